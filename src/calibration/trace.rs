use{
    std::{
        fs::{File, OpenOptions},
        io::{BufWriter, Write},
        path::Path,
    },
};

/// Append-only record of every calibration trial. One line per trial:
/// population size, the probed transmission probability, then the full
/// new-case history. No header, flushed per line so a crashed run still
/// leaves its finished trials behind.
pub struct TraceWriter{
    writer: BufWriter<File>,
}

impl TraceWriter{
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self>
    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self{writer: BufWriter::new(file)})
    }

    pub fn write_trial(
        &mut self,
        system_size: usize,
        trans_prob: f64,
        new_cases: &[usize]
    ) -> std::io::Result<()>
    {
        write!(self.writer, "{},{}", system_size, trans_prob)?;
        for count in new_cases{
            write!(self.writer, ",{}", count)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn one_line_per_trial_no_header()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        {
            let mut trace = TraceWriter::append(&path).unwrap();
            trace.write_trial(10, 0.5, &[1, 9, 0]).unwrap();
        }
        {
            // appending keeps earlier trials
            let mut trace = TraceWriter::append(&path).unwrap();
            trace.write_trial(10, 0.25, &[1, 2]).unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "10,0.5,1,9,0\n10,0.25,1,2\n");
    }
}
