pub mod completion;
pub mod config;
pub mod check_report;
pub mod cli;
