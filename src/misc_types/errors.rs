use thiserror::Error;

/// Everything that can go wrong outside of plain invariant violations,
/// which panic instead of being retried.
#[derive(Debug, Error)]
pub enum SirError{
    #[error("unable to load contact graph from {path}: {reason}")]
    NetworkLoad{
        path: String,
        reason: String,
    },

    #[error("unable to save contact graph to {path}: {reason}")]
    NetworkSave{
        path: String,
        reason: String,
    },

    #[error("growth rate needs at least two rounds of case counts, history has {len}")]
    InsufficientHistory{
        len: usize,
    },

    #[error("calibration stopped after {trials} trials with the interval exhausted: growth rate {observed} missed target {target} by more than {threshold}")]
    CalibrationNonConvergence{
        observed: f64,
        target: f64,
        threshold: f64,
        trials: usize,
    },

    #[error("unrecognized mechanism name: {0}")]
    InvalidMechanismName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
