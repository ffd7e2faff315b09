use crate::error::{Result, TrackerError};
use crate::models::Observation;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Append-only CSV file of price observations
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every observation in file order
    ///
    /// Rows that cannot be parsed (bad timestamp, negative or fractional price)
    /// are logged and skipped.
    pub fn load(&self) -> Result<Vec<Observation>> {
        if !self.exists() {
            return Err(TrackerError::MissingLedger(self.path.clone()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut observations = Vec::new();
        let mut skipped = 0usize;

        for (idx, row) in reader.deserialize::<Observation>().enumerate() {
            match row {
                Ok(observation) => observations.push(observation),
                Err(e) => {
                    // idx + 2: header is line 1
                    warn!("Skipping malformed ledger row {}: {}", idx + 2, e);
                    skipped += 1;
                }
            }
        }

        debug!(
            "Loaded {} observations from {} ({} skipped)",
            observations.len(),
            self.path.display(),
            skipped
        );

        Ok(observations)
    }

    /// Append observations, writing the header only when the file is new
    pub fn append(&self, observations: &[Observation]) -> Result<()> {
        if observations.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let write_header = !self.exists();
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(write_header).from_writer(file);

        for observation in observations {
            writer.serialize(observation)?;
        }
        writer.flush()?;

        info!("Appended {} row(s) to {}", observations.len(), self.path.display());
        Ok(())
    }
}
