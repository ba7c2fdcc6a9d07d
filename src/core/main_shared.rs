use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        let _ = env::set_current_dir(&cwd);
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file first, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();

    let cwd = env::current_dir()?;
    debug!("Current working directory: {}", cwd.display());

    // Dispatch to appropriate command
    match args.command {
        Commands::Init => cmds::execute_init(),
        Commands::Compare(compare_args) => cmds::execute_compare(compare_args),
        Commands::Scan(scan_args) => cmds::execute_scan(scan_args),
        Commands::Print {
            command: print_args,
        } => match print_args {
            PrintArgs::Config(args) => {
                cmds::execute_print(cmds::print::PrintCommand::Config(args.format))
            }
            PrintArgs::Files(args) => {
                cmds::execute_print(cmds::print::PrintCommand::Files(cmds::print::FilesFilters {
                    baseline_dir: args.baseline_dir,
                    restricted_dir: args.restricted_dir,
                    suites: args.suites,
                }))
            }
        },
    }
}
