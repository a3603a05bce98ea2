pub mod field_reader;
pub mod config_helper;
