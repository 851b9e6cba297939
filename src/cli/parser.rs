use crate::core::SortOrder;
use crate::core::layout::LayoutStrategy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ccreport
/// CLI application to reconcile call-center agent and CDR exports
#[derive(Parser)]
#[command(
    name = "ccreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile agent-performance and CDR exports into a per-agent summary report",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom layouts)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Generate the per-agent summary report from two export files
    Generate {
        /// Agent Performance export (.csv, .xlsx or .xlsm)
        #[arg(long = "agent", value_name = "FILE")]
        agent: String,

        /// Call Detail Record export (.csv, .xlsx or .xlsm)
        #[arg(long = "cdr", value_name = "FILE")]
        cdr: String,

        /// Output format; omit to print a table to stdout
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (required with --format)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Row ordering (overrides the configured default)
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Column-layout strategy (overrides the configured default)
        #[arg(long, value_enum)]
        layout: Option<LayoutStrategy>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
