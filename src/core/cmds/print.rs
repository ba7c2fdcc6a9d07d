use crate::types::AppResult;

pub mod config;
pub mod files;

pub struct FilesFilters {
    pub baseline_dir: Option<String>,
    pub restricted_dir: Option<String>,
    pub suites: Vec<String>,
}

pub enum PrintCommand {
    Config(String),
    Files(FilesFilters),
}

pub fn execute_print(command: PrintCommand) -> AppResult<()> {
    match command {
        PrintCommand::Config(format) => config::execute(format),
        PrintCommand::Files(filters) => files::execute(filters),
    }
}
