use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "terse")]
#[command(version, about = "Sparse, nine-level plain text notebooks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Document to operate on (the configured extension is added when missing)
    #[arg(short, long, global = true, default_value = "notes")]
    pub file: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the text of one scroll
    #[command(alias = "v")]
    Show {
        /// Coordinate of the scroll (e.g. w2m3 or 1-1-1-1-1-1-2-1-3)
        #[arg(default_value = "1-1-1-1-1-1-1-1-1")]
        coordinate: String,
    },

    /// Replace the text of one scroll
    #[command(alias = "w")]
    Write {
        /// Coordinate of the scroll
        coordinate: String,

        /// New text (read from stdin when omitted)
        text: Option<String>,
    },

    /// List scrolls with a one-line preview
    #[command(alias = "ls")]
    List {
        /// Only list scrolls containing this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show scroll and word counts
    Stats,

    /// Print the byte offset of a scroll in the file
    Locate {
        /// Coordinate of the scroll
        coordinate: String,
    },

    /// Normalize a coordinate literal
    #[command(alias = "c")]
    Coord {
        /// Coordinate in dashed or tagged form
        coordinate: String,
    },

    /// Export scrolls to a tar.gz archive
    Export {
        /// Coordinates to export (all scrolls when omitted)
        coordinates: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (file-ext, tagged, preview-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
