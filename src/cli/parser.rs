use crate::export::ExportFormat;
use crate::paint::ChartFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rdutylog
/// Render FMCSA-style driver daily logs as 24-hour duty-status grids
#[derive(Parser, Debug)]
#[command(
    name = "rdutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render driver daily logs (duty-status JSON) as 24-hour grid charts: SVG, PDF or terminal",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rdutylog/rdutylog.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics on stderr (overridden by RUST_LOG)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Draw the duty-status grid for one or more daily logs
    Render {
        /// Log JSON: one log, an array of logs, or a trip with eld_logs ("-" for stdin)
        #[arg(
            long,
            short = 'i',
            value_name = "FILE",
            required_unless_present = "blank"
        )]
        input: Option<String>,

        /// Only the log for this day (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Print the empty form instead of a log
        #[arg(long, conflicts_with_all = ["input", "date"])]
        blank: bool,

        /// Output format (default from config)
        #[arg(long, value_enum)]
        format: Option<ChartFormat>,

        /// Output file; required for svg and pdf
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Canvas width in logical units
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height in logical units
        #[arg(long)]
        height: Option<f64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Per-status hours: supplied by the log vs computed from its intervals
    Summary {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Map a pointer x coordinate on the chart to a time of day
    Hit {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        /// Accepted for completeness; only x decides the time
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        y: f64,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,
    },

    /// Export the duty-status table
    Export {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'd')]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
