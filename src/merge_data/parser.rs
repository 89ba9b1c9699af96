use{
    super::execute::run_merge,
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Merge per-trial csv files into one table and average it per configuration
pub struct MergeData{
    #[structopt(long)]
    json: Option<String>,
}

impl MergeData{
    pub fn parse(&self) -> (MergeParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_merge(opt, json)
    }
}

/// Note the row shape here: `n,cdf,model,p,q,days...`. This is NOT the
/// shape of the calibration trace (`n,p,cases...`); the two files belong
/// to different stages and are kept as separate formats on purpose.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MergeParams{
    pub csv_dir: String,
    pub merged_file: String,
    pub average_file: String,
}

impl Default for MergeParams{
    fn default() -> Self{
        Self{
            csv_dir: "output_files/csvs".to_owned(),
            merged_file: "growth_data.csv".to_owned(),
            average_file: "average_growth_data.csv".to_owned(),
        }
    }
}
