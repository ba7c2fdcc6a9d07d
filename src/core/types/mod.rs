pub mod config;
mod condition;
mod error;
mod summary;

pub use condition::*;
pub use error::*;
pub use summary::*;
