use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::{load_logs, select_logs};
use crate::core::render::{RenderLogic, RenderRequest};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        date,
        blank,
        format,
        output,
        width,
        height,
        force,
    } = cmd
    {
        let req = RenderRequest::from_flags(cfg, *format, output.clone(), *width, *height, *force);
        match input {
            Some(input) if !*blank => {
                let logs = select_logs(load_logs(input)?, date.as_deref())?;
                RenderLogic::render(&logs, &req, cfg)?;
            }
            _ => RenderLogic::render_blank(&req, cfg)?,
        }
    }
    Ok(())
}
