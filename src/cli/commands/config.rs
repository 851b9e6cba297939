use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, custom_path: Option<&str>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Config::config_file(),
        };

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => eprintln!("Could not render configuration: {e}"),
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            Config::check(&path)?;
            success(format!("Configuration OK: {}", path.display()));
        }
    }

    Ok(())
}
