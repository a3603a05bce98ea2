pub mod payload;
pub mod usage_check;
pub mod output_format;
pub mod commands;
