pub mod inspector_config;
pub mod output_config;
pub mod check_config;
