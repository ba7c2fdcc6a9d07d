use console::style;
use log::info;

use crate::core::cmds::print::FilesFilters;
use crate::core::scanner;
use crate::types::config::{colors_enabled, config};
use crate::types::{AppResult, Condition};

/// List the log files each group would scan, without parsing them.
/// Missing directories and empty groups are reported inline rather than
/// treated as errors, so the command is usable while logs are still
/// being collected.
pub fn execute(filters: FilesFilters) -> AppResult<()> {
    let baseline_dir = config().resolve_baseline_dir(filters.baseline_dir.as_deref());
    let restricted_dir = config().resolve_restricted_dir(filters.restricted_dir.as_deref());
    let suites = config().resolve_suites(&filters.suites);
    let ignore = config().scan().ignore().to_vec();
    let colors = colors_enabled();

    for suite in &suites {
        for (condition, root) in [
            (Condition::Baseline, &baseline_dir),
            (Condition::Restricted, &restricted_dir),
        ] {
            let dir = root.join(suite);
            info!("{} {} ({}):", suite, condition, dir.display());

            if !dir.is_dir() {
                info!("  {}", style("(directory not found)").red().force_styling(colors));
                info!("");
                continue;
            }

            let files = scanner::collect_log_files(&dir, &ignore)?;
            if files.is_empty() {
                info!("  {}", style("(no log files)").yellow().force_styling(colors));
            } else {
                for file in &files {
                    info!("  {}", file.display());
                }
            }
            info!(""); // Empty line between groups
        }
    }

    Ok(())
}
