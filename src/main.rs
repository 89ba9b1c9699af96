use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod misc_types;
pub mod json_parsing;
pub mod contact_graph;
pub mod epidemic_model;
pub mod stats_methods;
pub mod calibration;
pub mod build_graph;
pub mod simple_curves;
pub mod merge_data;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::Calibrate(o) => o.execute(),
        CmdOption::BuildGraph(o) => o.execute(),
        CmdOption::SimpleCurves(o) => o.execute(),
        CmdOption::MergeData(o) => o.execute()
    }
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()))
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Simulations for the SIR model on contact networks, with quarantines and growth rate calibration!")]
pub enum CmdOption
{
    /// Bisect the transmission probability until the epidemic hits a target growth rate
    Calibrate(calibration::Calibrate),
    /// Build a contact graph from a contact distribution and save it
    BuildGraph(build_graph::BuildGraph),
    /// Propagate the epidemic at a fixed transmission probability and write compartment curves
    SimpleCurves(simple_curves::SimpleCurves),
    /// Merge per-trial csv files and average them per configuration
    MergeData(merge_data::MergeData)
}
