use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` subcommand: write the default config file.
pub fn handle(_cli: &Cli) -> AppResult<()> {
    let path = Config::init_all()?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
