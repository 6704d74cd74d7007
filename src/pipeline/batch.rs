//! Batch processing: convert every input file into the output directory

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::converter::convert_file;
use super::error::ConvertError;
use super::eraser::erase_directory;
use super::headers::{collect_headers, ColumnPrompt, HeaderList};
use super::scanner::{list_files_with_extension, output_file_name};
use super::settings::{FailurePolicy, Settings};
use crate::report::BatchReport;
use crate::utils::{create_progress_bar, print_erase_failure, print_file_done, print_file_start};

/// How the header line of a batch is obtained
pub enum HeaderMode<'a> {
    /// No header line is written
    None,
    /// Ask the user for column names before converting
    Prompt(&'a mut dyn ColumnPrompt),
    /// Use an already validated list
    Fixed(HeaderList),
}

/// Result of a batch that did not fail
#[derive(Debug)]
pub enum BatchOutcome {
    /// The input directory held no matching files; output was left untouched
    NoInputFiles,
    /// Files were converted
    Completed(BatchReport),
}

/// Runs one full input-to-output conversion pass
pub struct BatchProcessor<'a> {
    settings: &'a Settings,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Convert all input files.
    ///
    /// The output directory is cleared only once at least one input file is
    /// found. Under [`FailurePolicy::Abort`] the first unreadable file ends
    /// the batch with a [`ConvertError::Read`]; outputs already written stay.
    pub fn run(&self, headers: HeaderMode<'_>) -> Result<BatchOutcome> {
        let settings = self.settings;

        let files = list_files_with_extension(&settings.input_dir, &settings.extension)
            .context("Failed to list input files")?;
        if files.is_empty() {
            info!(dir = %settings.input_dir.display(), "no input files");
            return Ok(BatchOutcome::NoInputFiles);
        }

        let erase = erase_directory(&settings.output_dir, false)
            .context("Failed to clear the output folder")?;
        for failure in &erase.failures {
            print_erase_failure(&failure.path);
        }

        let header = match headers {
            HeaderMode::None => None,
            HeaderMode::Prompt(prompt) => Some(collect_headers(prompt)?.line()),
            HeaderMode::Fixed(list) => Some(list.line()),
        };

        let mut report = BatchReport::new(erase, header);
        info!(files = files.len(), "starting batch");

        let pb = create_progress_bar(files.len() as u64, "Converting");
        for name in &files {
            pb.suspend(|| print_file_start(name));

            let input_path = settings.input_path(name);
            let converted = match convert_file(&input_path) {
                Ok(converted) => converted,
                Err(err) if settings.failure_policy == FailurePolicy::Skip => {
                    let reason = format!("{:#}", anyhow::Error::from(err));
                    warn!(file = %name, error = %reason, "skipping unreadable file");
                    report.add_skipped(name, reason);
                    pb.inc(1);
                    continue;
                }
                Err(err) => {
                    pb.abandon();
                    return Err(err.into());
                }
            };

            let output_name = output_file_name(name, &settings.extension);
            let output_path = settings.output_path(&output_name);
            if let Err(err) = write_output(&output_path, report.header.as_deref(), &converted.content)
            {
                pb.abandon();
                return Err(err.into());
            }

            report.add_converted(name, &output_name, converted.rows);
            pb.suspend(|| print_file_done(&output_name));
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            "batch complete"
        );
        Ok(BatchOutcome::Completed(report))
    }
}

/// Create or truncate `path` and write the optional header line and the rows
fn write_output(
    path: &std::path::Path,
    header: Option<&str>,
    content: &str,
) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_error)?;
    if let Some(header) = header {
        file.write_all(header.as_bytes()).map_err(write_error)?;
        file.write_all(b"\n").map_err(write_error)?;
    }
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)
}
