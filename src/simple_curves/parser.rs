use{
    super::execute::run_curves,
    structopt::StructOpt,
    std::num::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::json_parsing::*,
    crate::misc_types::*,
    crate::epidemic_model::{Mechanism, MechanismSet},
};

#[derive(Debug, StructOpt, Clone)]
/// Propagate at a fixed transmission probability and write the compartment
/// curves of every sample
pub struct SimpleCurves{
    #[structopt(long)]
    json: Option<String>,
}

impl SimpleCurves{
    pub fn parse(&self) -> (SimpleCurvesParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_curves(opt, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimpleCurvesParams{
    pub system_size: NonZeroUsize,
    pub trans_prob: f64,
    pub recovery_time: u32,
    pub num_rounds: u32,
    pub max_rounds: u32,
    pub samples: u64,
    pub contact_distribution: ContactDistribution,
    pub graph_file: Option<String>,
    pub mechanisms: Vec<Mechanism>,
    pub quarantine_prob: f64,
    pub contact_threshold: usize,
    pub initial_infection: InitialInfection,
    pub graph_seed: u64,
    pub sir_seed: u64,
}

impl Default for SimpleCurvesParams{
    fn default() -> Self{
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            trans_prob: 0.05,
            recovery_time: DEFAULT_RECOVERY_TIME,
            num_rounds: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            samples: DEFAULT_SAMPLES,
            contact_distribution: ContactDistribution::default(),
            graph_file: None,
            mechanisms: Vec::new(),
            quarantine_prob: 0.0,
            contact_threshold: 0,
            initial_infection: InitialInfection::default(),
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
        }
    }
}

impl SimpleCurvesParams{
    pub fn name(&self) -> String
    {
        format!(
            "ver{}Curves_N{}p{}r{}_{}_{}_{}_Sam{}_GSeed{}_SS{}",
            crate::VERSION,
            self.system_size,
            self.trans_prob,
            self.recovery_time,
            self.contact_distribution.name(),
            MechanismSet::new(&self.mechanisms).name(),
            self.initial_infection.name(),
            self.samples,
            self.graph_seed,
            self.sir_seed
        )
    }
}
