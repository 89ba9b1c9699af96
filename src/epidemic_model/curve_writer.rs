use{
    serde_json::Value,
    std::{
        fs::File,
        io::{Write, BufWriter}
    },
    super::EpidemicModel,
    crate::json_parsing::write_json,
};

pub type CurveFile = BufWriter<File>;

/// Writes one compartment curve per file: susceptible, infected, recovered
/// and newly infected counts, one simulation per line.
pub struct CurveWriter
{
    pub writer_s: CurveFile,
    pub writer_i: CurveFile,
    pub writer_r: CurveFile,
    pub writer_new: CurveFile,
    pub paths: [String; 4]
}

impl CurveWriter
{
    #[inline]
    pub fn writer_iter(&mut self) -> impl Iterator<Item=&mut CurveFile>
    {
        let slice = [
            &mut self.writer_s,
            &mut self.writer_i,
            &mut self.writer_r,
            &mut self.writer_new
        ];
        slice.into_iter()
    }

    pub fn new(name: &str) -> Self
    {
        let names: [String; 4] = [
            format!("{name}_s.curves"),
            format!("{name}_i.curves"),
            format!("{name}_r.curves"),
            format!("{name}_new.curves")
        ];

        let mut files = names.clone().map(
            |name|
            {
                BufWriter::new(
                    File::create(name)
                        .expect("unable to create curve file")
                )
            }
        ).into_iter();

        Self{
            writer_s: files.next().unwrap(),
            writer_i: files.next().unwrap(),
            writer_r: files.next().unwrap(),
            writer_new: files.next().unwrap(),
            paths: names
        }
    }

    pub fn write_current(&mut self, model: &EpidemicModel) -> std::io::Result<()>
    {
        write!(self.writer_s, "{} ", model.n_susceptible())?;
        write!(self.writer_i, "{} ", model.n_infected())?;
        write!(self.writer_r, "{} ", model.n_recovered())?;
        let new = model.new_cases()
            .last()
            .copied()
            .unwrap_or(0);
        write!(self.writer_new, "{new} ")
    }

    pub fn write_line(&mut self) -> std::io::Result<()>
    {
        for writer in self.writer_iter()
        {
            writeln!(writer)?;
        }
        Ok(())
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> std::io::Result<()>
    {
        for writer in self.writer_iter()
        {
            writeln!(writer, "#count per round, one simulation per line")?;
        }
        for json in jsons{
            for writer in self.writer_iter()
            {
                write_json(&mut *writer, json);
            }
        }
        Ok(())
    }
}
