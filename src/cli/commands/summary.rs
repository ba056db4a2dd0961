use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::{load_logs, select_logs};
use crate::core::summary::print_summaries;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input, date } = cmd {
        let logs = select_logs(load_logs(input)?, date.as_deref())?;
        print_summaries(&logs, cfg.color)?;
    }
    Ok(())
}
