use crate::chart::Chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Prints `HH:MM` for a hit, `no hit` otherwise. Both exit 0.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hit {
        x,
        y,
        width,
        height,
    } = cmd
    {
        let mut chart = Chart::with_size(width.unwrap_or(cfg.width), height.unwrap_or(cfg.height))?;
        chart.on_time_selected(|t| tracing::debug!(time = %t, "time selected"));

        match chart.pointer_event(*x, *y) {
            Some(time) => println!("{time}"),
            None => println!("no hit"),
        }
    }
    Ok(())
}
