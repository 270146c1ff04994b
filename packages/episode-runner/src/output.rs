//! Output writers for run results: JSONL detail (optionally gzipped) and a CSV summary.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

pub struct OutputWriter {
    jsonl_writer: Box<dyn Write + Send>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    /// Create `<prefix>_<timestamp>.jsonl[.gz]` and `<prefix>_<timestamp>_summary.csv` in `output_dir`.
    pub fn new(
        output_dir: &Path,
        prefix: &str,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let filename = format!("{prefix}_{timestamp}.jsonl");
        let (jsonl_writer, jsonl_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let path = output_dir.join(format!("{filename}.gz"));
            let encoder = GzEncoder::new(File::create(&path)?, Compression::default());
            (Box::new(BufWriter::new(encoder)), path)
        } else {
            let path = output_dir.join(&filename);
            (Box::new(BufWriter::new(create_truncated(&path)?)), path)
        };

        let csv_path = output_dir.join(format!("{prefix}_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_record<J, R>(&mut self, detail: &J, row: &R) -> Result<(), Box<dyn std::error::Error>>
    where
        J: Serialize,
        R: Serialize,
    {
        let json = serde_json::to_string(detail)?;
        writeln!(self.jsonl_writer, "{json}")?;
        self.csv_writer.serialize(row)?;
        Ok(())
    }

    /// Flush and close both files.
    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.jsonl_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.jsonl_path, &self.csv_path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
