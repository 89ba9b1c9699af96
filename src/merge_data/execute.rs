use{
    serde_json::Value,
    std::{
        collections::HashMap,
        fs::{File, OpenOptions},
        io::{BufWriter, Write},
        path::PathBuf,
    },
    super::*,
    crate::misc_types::SirError,
};

const MERGED_HEADER: &str = "n,cdf,model,p,q,days";
const AVERAGE_HEADER: &str = "n,cdf,model,p,q,num_trials,days";

pub fn run_merge(param: MergeParams, _json: Value)
{
    let merged = merge_trial_files(&param)
        .expect("merging trial files failed");
    println!("merged {} trial files into {}", merged, param.merged_file);
    average_rows(&param)
        .expect("averaging failed");
    println!("Creating: {}", param.average_file);
}

/// Append every csv in the directory (except the two output files) to the
/// merged table, then delete the inputs. The header is only written when
/// the merged table does not exist yet, so repeated merges keep appending.
pub fn merge_trial_files(param: &MergeParams) -> Result<usize, SirError>
{
    let merged_path = PathBuf::from(&param.csv_dir).join(&param.merged_file);
    let average_path = PathBuf::from(&param.csv_dir).join(&param.average_file);

    let mut inputs: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(&param.csv_dir)?{
        let entry = entry?;
        if !entry.file_type()?.is_file(){
            continue;
        }
        let path = entry.path();
        if path == merged_path || path == average_path{
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();

    let write_header = !merged_path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&merged_path)?;
    let mut writer = BufWriter::new(file);
    if write_header{
        writeln!(writer, "{}", MERGED_HEADER)?;
    }
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    for input in &inputs{
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(input)?;
        for record in reader.records(){
            csv_writer.write_record(&record?)?;
        }
    }
    csv_writer.flush()?;
    drop(csv_writer);

    for input in &inputs{
        std::fs::remove_file(input)?;
    }
    Ok(inputs.len())
}

/// Group the merged rows by configuration (everything before the day
/// counts) and average the day counts elementwise over the group.
pub fn average_rows(param: &MergeParams) -> Result<(), SirError>
{
    let merged_path = PathBuf::from(&param.csv_dir).join(&param.merged_file);
    let average_path = PathBuf::from(&param.csv_dir).join(&param.average_file);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(&merged_path)?;

    let mut sums: HashMap<Vec<String>, (Vec<f64>, u64)> = HashMap::new();
    let mut order: Vec<Vec<String>> = Vec::new();
    for (index, record) in reader.records().enumerate(){
        let record = record?;
        if index == 0{
            // header line
            continue;
        }
        let key: Vec<String> = record
            .iter()
            .take(5)
            .map(str::to_owned)
            .collect();
        let data: Vec<f64> = record
            .iter()
            .skip(5)
            .map(|field| field.parse().expect("day counts must be numeric"))
            .collect();
        match sums.get_mut(&key){
            Some((sum, count)) => {
                add_arrays(sum, &data);
                *count += 1;
            },
            None => {
                order.push(key.clone());
                sums.insert(key, (data, 1));
            }
        }
    }

    let file = File::create(&average_path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", AVERAGE_HEADER)?;
    for key in order{
        let (sum, count) = &sums[&key];
        write!(writer, "{},{}", key.join(","), count)?;
        for value in sum{
            write!(writer, ",{}", value / *count as f64)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Elementwise sum; the longer array wins, missing entries count as zero.
pub fn add_arrays(total: &mut Vec<f64>, other: &[f64])
{
    if other.len() > total.len(){
        total.resize(other.len(), 0.0);
    }
    for (entry, value) in total.iter_mut().zip(other){
        *entry += value;
    }
}
