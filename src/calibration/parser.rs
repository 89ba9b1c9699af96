use{
    super::execute::run_calibration,
    structopt::StructOpt,
    std::num::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::json_parsing::*,
    crate::misc_types::*,
    crate::epidemic_model::Mechanism,
};

#[derive(Debug, StructOpt, Clone)]
/// Bisect the transmission probability until the observed growth rate
/// matches the target
pub struct Calibrate{
    /// json config; without it the built in defaults run
    #[structopt(long)]
    json: Option<String>,

    /// population size override
    #[structopt(short = "n", long)]
    system_size: Option<NonZeroUsize>,
}

impl Calibrate{
    pub fn parse(&self) -> (CalibrationParams, Value){
        let (mut param, json): (CalibrationParams, Value) = match &self.json{
            Some(_) => parse(self.json.as_ref()),
            None => {
                // unlike the other commands this one is useful without a
                // config, so run the defaults instead of printing them
                let param = CalibrationParams::default();
                let json = serde_json::to_value(&param)
                    .expect("default parameters are serializable");
                (param, json)
            }
        };
        if let Some(n) = self.system_size{
            param.system_size = n;
        }
        (param, json)
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_calibration(opt, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CalibrationParams{
    pub system_size: NonZeroUsize,
    pub target_growth_rate: f64,
    pub threshold: f64,
    pub recovery_time: u32,
    /// rounds per trial, 0 runs every trial until the infection dies out
    pub num_rounds: u32,
    pub max_rounds: u32,
    pub contact_distribution: ContactDistribution,
    /// load the graph from here instead of building a fresh one
    pub graph_file: Option<String>,
    /// persist the graph used for the trials
    pub save_graph: Option<String>,
    pub mechanisms: Vec<Mechanism>,
    pub quarantine_prob: f64,
    pub contact_threshold: usize,
    pub initial_infection: InitialInfection,
    pub graph_seed: u64,
    pub sir_seed: u64,
    pub trace_file: String,
}

impl Default for CalibrationParams{
    fn default() -> Self{
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            target_growth_rate: DEFAULT_TARGET_GROWTH_RATE,
            threshold: DEFAULT_THRESHOLD,
            recovery_time: DEFAULT_RECOVERY_TIME,
            num_rounds: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            contact_distribution: ContactDistribution::default(),
            graph_file: None,
            save_graph: None,
            mechanisms: Vec::new(),
            quarantine_prob: 0.0,
            contact_threshold: 0,
            initial_infection: InitialInfection::default(),
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
            trace_file: "growth_data.csv".to_owned(),
        }
    }
}
