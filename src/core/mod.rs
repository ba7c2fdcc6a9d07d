pub mod cli;
pub mod cmds;
pub mod logging;
pub mod main_shared;
pub mod scanner;
pub mod stats;
pub mod types;
