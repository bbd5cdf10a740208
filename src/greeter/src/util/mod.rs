pub mod clap;
pub mod error_report;
