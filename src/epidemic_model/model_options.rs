use{
    crate::misc_types::*,
    crate::calibration::CalibrationParams,
    crate::simple_curves::SimpleCurvesParams,
    super::mechanisms::MechanismSet,
};

/// Everything a single simulation needs besides the graph and the rng.
#[derive(Clone, Debug)]
pub struct EpidemicOptions{
    pub trans_prob: f64,
    pub recovery_time: u32,
    pub mechanisms: MechanismSet,
    pub quarantine_prob: f64,
    pub contact_threshold: usize,
    pub initial_infection: InitialInfection,
    pub max_rounds: u32,
}

impl EpidemicOptions{
    pub fn from_calibration_params(param: &CalibrationParams, trans_prob: f64) -> Self
    {
        Self{
            trans_prob,
            recovery_time: param.recovery_time,
            mechanisms: MechanismSet::new(&param.mechanisms),
            quarantine_prob: param.quarantine_prob,
            contact_threshold: param.contact_threshold,
            initial_infection: param.initial_infection,
            max_rounds: param.max_rounds,
        }
    }

    pub fn from_curves_param(param: &SimpleCurvesParams) -> Self
    {
        Self{
            trans_prob: param.trans_prob,
            recovery_time: param.recovery_time,
            mechanisms: MechanismSet::new(&param.mechanisms),
            quarantine_prob: param.quarantine_prob,
            contact_threshold: param.contact_threshold,
            initial_infection: param.initial_infection,
            max_rounds: param.max_rounds,
        }
    }
}
