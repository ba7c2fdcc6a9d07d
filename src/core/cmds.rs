pub mod compare;
pub mod init;
pub mod print;
pub mod scan;

pub use compare::execute_compare;
pub use init::execute_init;
pub use print::execute_print;
pub use scan::execute_scan;
