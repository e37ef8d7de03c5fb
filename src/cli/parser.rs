use clap::{Parser, Subcommand};

/// Command-line interface definition for placemap
/// Interactive terminal map to collect the places you've been
#[derive(Parser)]
#[command(
    name = "placemap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Click on a world map to drop pins, name them, and review the places you've been",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colours in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive map session (default)
    Run,

    /// Show the map tile containing a coordinate
    Tile {
        /// Latitude in degrees
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lng: f64,

        #[arg(long, short = 'z', help = "Zoom level (default: configured zoom)")]
        zoom: Option<u8>,
    },

    /// Manage the configuration file (view, check, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite an existing file with --init")]
        force: bool,

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
}
