use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the default configuration file (to `--config` if given). An
/// existing file is kept as is.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if Config::init(&path)? {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }
    Ok(())
}
