use{
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fs::File,
        io::{BufReader, Write},
        path::Path,
        process::exit,
    },
};

/// Read a command's parameters from a json file.
/// Without a file the default parameters are printed as an example config
/// and the process exits, so the user has something to start from.
pub fn parse<P, T>(file: Option<&P>) -> (T, Value)
where P: AsRef<Path>,
    T: Default + Serialize + DeserializeOwned
{
    match file{
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(
                std::io::stdout(),
                &example
            ).expect("unable to write example config");
            println!();
            eprintln!("no json config given - example written to stdout");
            exit(0)
        },
        Some(file) => {
            let f = File::open(file)
                .expect("unable to open json config");
            let buf = BufReader::new(f);
            let json: Value = serde_json::from_reader(buf)
                .expect("invalid json");
            let opt: T = serde_json::from_value(json.clone())
                .expect("json does not match the expected parameters");
            (opt, json)
        }
    }
}

/// Prepend the config that produced a data file as a # comment line.
pub fn write_json<W: Write>(mut writer: W, json: &Value)
{
    write!(writer, "#").unwrap();
    serde_json::to_writer(&mut writer, json)
        .unwrap();
    writeln!(writer).unwrap();
}
