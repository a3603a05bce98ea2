use clap::Parser;
use completion_decoder::config::config_manager::ConfigManager;
use completion_decoder::enums::commands::Commands;
use completion_decoder::structs::cli::Cli;
use completion_decoder::structs::config::inspector_config::InspectorConfig;
use completion_decoder::workers::command_runner::CommandRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `init` may target a file that does not exist yet.
    let (config, loaded_from) = match cli.command {
        Commands::Init { .. } => (InspectorConfig::default(), None),
        _ => ConfigManager::load(cli.config.as_deref())?,
    };

    let level = ConfigManager::log_level(&config)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();

    match &loaded_from {
        Some(path) => log::debug!("📋 Loaded config from: {}", path.display()),
        None => log::debug!("📋 Using default configuration"),
    }

    let config_path = ConfigManager::resolve_path(cli.config.as_deref());
    CommandRunner::new(config, config_path).run_command(cli.command)?;
    Ok(())
}
