use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for cutlog
/// CLI application to record textile cutting operations in a CSV table
#[derive(Parser)]
#[command(
    name = "cutlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record textile cutting operations, compute operation durations, and export the cutting table",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom table)
    #[arg(global = true, long = "table")]
    pub table: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the cutting table and the client list
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Record one cutting operation
    Add {
        /// Date of the operation (YYYY-MM-DD)
        date: String,

        /// Client name (e.g. Decathlon, Benetton, Zara)
        #[arg(long = "client")]
        client: String,

        /// Order number
        #[arg(long = "order")]
        order_no: String,

        /// Fabric (e.g. Coton, Polyester, Elasthanne)
        #[arg(long = "fabric")]
        fabric: String,

        /// Fabric roll code
        #[arg(long = "roll")]
        roll_code: String,

        /// Spread length in meters
        #[arg(long = "length")]
        length_m: f64,

        /// Number of plies
        #[arg(long = "plies")]
        plies: u32,

        /// Operation start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// Operation end time (HH:MM)
        #[arg(long = "end")]
        end: String,
    },

    /// List recorded operations
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom start:end range"
        )]
        range: Option<String>,

        #[arg(long, help = "Filter by exact client name")]
        client: Option<String>,
    },

    /// Print or grow the known-client list
    Clients {
        #[arg(long = "add", value_name = "NAME", help = "Add a client name")]
        add: Option<String>,
    },

    /// Export the cutting table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Filter export by exact client name")]
        client: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run the HTTP API server
    Serve {
        #[arg(long, value_name = "ADDR", help = "Listen address (host:port)")]
        addr: Option<String>,
    },
}
