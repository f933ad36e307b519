//! High-level, ergonomic library API: square a single file or a whole directory,
//! collecting per-file outcomes into a `BatchReport`. Prefer these entrypoints
//! over the low-level `core` and `io` modules when integrating squarepad.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::padding::{PaddingPlan, pad_to_square};
use crate::core::params::SquareParams;
use crate::error::{Error, Result};
use crate::io::{backup, codec, listing};
use crate::types::{ErrorPolicy, FileOutcome};

/// Outcome of one file, printable as its console status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file_name, self.outcome)
    }
}

/// Batch processing report
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub padded: usize,
    pub already_square: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    fn record(&mut self, file: FileReport) {
        match file.outcome {
            FileOutcome::Padded { .. } => self.padded += 1,
            FileOutcome::AlreadySquare { .. } => self.already_square += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.files.push(file);
    }

    pub fn summary(&self) -> String {
        format!(
            "Padded: {}, already square: {}, failed: {}",
            self.padded, self.already_square, self.failed
        )
    }
}

/// Squares every candidate image of a source directory into an output directory
#[derive(Debug, Clone)]
pub struct ImageSquarer {
    params: SquareParams,
}

impl ImageSquarer {
    pub fn new(params: SquareParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn ensure_output_directory(&self) -> Result<()> {
        listing::ensure_output_directory(self.params.resolved_output_dir())
    }

    pub fn list_candidate_files(&self) -> Result<Vec<PathBuf>> {
        listing::list_candidate_files(&self.params.source_dir, &self.params.extensions)
    }

    /// Square a single image. Already-square images are never written,
    /// even when `output_path` differs from `source_path`.
    ///
    /// Only the header is read for images that turn out to be square.
    pub fn process_file(&self, source_path: &Path, output_path: &Path) -> Result<FileOutcome> {
        let (width, height) = codec::read_dimensions(source_path)?;

        let Some(plan) = PaddingPlan::for_dimensions(width, height) else {
            return Ok(FileOutcome::AlreadySquare { width, height });
        };
        let format = codec::output_format(output_path)?;

        let img = codec::decode_image(source_path)?;
        let canvas = pad_to_square(&img, plan).map_err(|e| Error::image(source_path, e))?;
        drop(img);

        if self.params.backup {
            backup::backup_existing(output_path)?;
        }
        codec::encode_image(&canvas, output_path, format)?;
        info!(
            "Wrote {:?} ({}x{})",
            output_path, plan.target_size, plan.target_size
        );

        Ok(FileOutcome::Padded {
            size: plan.target_size,
        })
    }

    /// Process the whole source directory.
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with(|_| {})
    }

    /// Like `run`, invoking `on_file` as soon as each file reaches its outcome.
    ///
    /// Directory creation and listing failures are always returned. Per-file
    /// failures are recorded under `ErrorPolicy::Continue` and returned as
    /// `Error::Aborted` under `ErrorPolicy::Abort`.
    pub fn run_with<F>(&self, mut on_file: F) -> Result<BatchReport>
    where
        F: FnMut(&FileReport),
    {
        let output_dir = self.params.resolved_output_dir();
        self.ensure_output_directory()?;

        info!(
            "Squaring images from {:?} into {:?}",
            self.params.source_dir, output_dir
        );

        let mut report = BatchReport::default();
        for source_path in self.list_candidate_files()? {
            let Some(file_name) = source_path.file_name() else {
                continue;
            };
            let output_path = output_dir.join(file_name);
            let file_name = file_name.to_string_lossy().into_owned();

            let outcome = match self.process_file(&source_path, &output_path) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Error processing {:?}: {}", source_path, e);
                    if self.params.on_error == ErrorPolicy::Abort {
                        return Err(Error::Aborted {
                            path: source_path,
                            source: Box::new(e),
                        });
                    }
                    FileOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            let file = FileReport { file_name, outcome };
            on_file(&file);
            report.record(file);
        }

        info!("{}", report.summary());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_each_outcome() {
        let mut report = BatchReport::default();
        report.record(FileReport {
            file_name: "a.png".into(),
            outcome: FileOutcome::Padded { size: 10 },
        });
        report.record(FileReport {
            file_name: "b.png".into(),
            outcome: FileOutcome::AlreadySquare {
                width: 4,
                height: 4,
            },
        });
        report.record(FileReport {
            file_name: "c.jpg".into(),
            outcome: FileOutcome::Failed {
                reason: "boom".into(),
            },
        });

        assert_eq!(
            (report.padded, report.already_square, report.failed),
            (1, 1, 1)
        );
        assert_eq!(report.summary(), "Padded: 1, already square: 1, failed: 1");
        assert_eq!(report.files[0].to_string(), "a.png: padding to 10x10");
        assert_eq!(report.files[2].to_string(), "c.jpg: failed (boom)");
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = SquareParams {
            extensions: vec![],
            ..Default::default()
        };
        assert!(ImageSquarer::new(params).is_err());
    }
}
