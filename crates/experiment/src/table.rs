use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// A record that can be written as one comma separated row.
pub trait CsvRow {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

/// Header row followed by one row per record.
pub struct CsvTable<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> CsvTable<W> {
    pub fn new(mut out: W, header: &[&str]) -> io::Result<Self> {
        writeln!(out, "{}", header.join(","))?;
        Ok(Self {
            out,
            columns: header.len(),
        })
    }

    pub fn push_row(&mut self, fields: &[String]) -> io::Result<()> {
        if fields.len() != self.columns {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("row has {} fields, header has {}", fields.len(), self.columns),
            ));
        }
        writeln!(self.out, "{}", fields.join(","))
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn write_rows<W: Write, R: CsvRow>(out: W, rows: &[R]) -> io::Result<W> {
    let mut table = CsvTable::new(out, R::HEADER)?;
    for row in rows {
        table.push_row(&row.fields())?;
    }
    table.finish()
}

pub fn write_csv_file<R: CsvRow>(path: &Path, rows: &[R]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(BufWriter::new(file), rows)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
