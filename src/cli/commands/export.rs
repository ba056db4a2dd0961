use crate::cli::parser::Commands;
use crate::core::input::{load_logs, select_logs};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        date,
        force,
    } = cmd
    {
        let logs = select_logs(load_logs(input)?, date.as_deref())?;
        ExportLogic::export(&logs, format, file, *force)?;
    }
    Ok(())
}
