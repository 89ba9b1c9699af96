use{
    super::execute::run_build_graph,
    structopt::StructOpt,
    std::num::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::json_parsing::*,
    crate::misc_types::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Build a contact graph once and persist it, so later runs can share it
pub struct BuildGraph{
    #[structopt(long)]
    json: Option<String>,
}

impl BuildGraph{
    pub fn parse(&self) -> (BuildGraphParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_build_graph(opt, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BuildGraphParams{
    pub system_size: NonZeroUsize,
    pub contact_distribution: ContactDistribution,
    pub graph_seed: u64,
    pub out_file: Option<String>,
}

impl Default for BuildGraphParams{
    fn default() -> Self{
        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            contact_distribution: ContactDistribution::default(),
            graph_seed: DEFAULT_GRAPH_SEED,
            out_file: None,
        }
    }
}

impl BuildGraphParams{
    pub fn name(&self) -> String
    {
        format!(
            "ver{}Graph_N{}_{}_GSeed{}.bin",
            crate::VERSION,
            self.system_size,
            self.contact_distribution.name(),
            self.graph_seed
        )
    }
}
