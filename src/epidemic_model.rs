pub mod sir_states;
pub use sir_states::*;

pub mod mechanisms;
pub use mechanisms::*;

pub mod model_options;
pub use model_options::*;

pub mod model;
pub use model::*;

pub mod curve_writer;
pub use curve_writer::*;
