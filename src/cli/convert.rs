//! Non-interactive batch conversion

use anyhow::Result;

use super::shell::{present_outcome, CommandOutcome};
use crate::pipeline::{BatchProcessor, HeaderList, HeaderMode, Settings};
use crate::utils::{print_folders, print_info};

/// Convert every input file once, without the menu.
///
/// `headers` become the header line when non-empty. Folders are created
/// first, as in the interactive shell.
pub fn run_convert(settings: &Settings, headers: &[String]) -> Result<()> {
    settings.ensure_directories()?;
    print_folders(&settings.input_dir, &settings.output_dir);

    let mode = if headers.is_empty() {
        HeaderMode::None
    } else {
        let list = HeaderList::from_names(headers.iter().cloned())?;
        print_info(&format!("Header: {}", list.line()));
        HeaderMode::Fixed(list)
    };

    let outcome = BatchProcessor::new(settings).run(mode)?;
    present_outcome(&CommandOutcome::Batch(outcome));
    Ok(())
}
