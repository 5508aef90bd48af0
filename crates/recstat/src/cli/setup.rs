use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "recstat",
    bin_name = "recstat",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inspect record status codes and the filters built from them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to load instead of searching for recstat.toml
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Table name used to qualify fields in rendered SQL
    #[arg(short, long, global = true, help_heading = "Options")]
    pub table: Option<String>,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the active code table
    #[command(alias = "ls")]
    Codes,

    /// Resolve a status name (or existing code) to the code that gets stored
    Resolve {
        /// Status name or code, e.g. `active` or `A`
        value: String,
    },

    /// Resolve a stored code to its status name
    Read {
        /// Stored value; omit to read an empty field
        stored: Option<String>,

        /// Status to report when the stored value is empty
        #[arg(short, long)]
        default: Option<String>,

        /// Fail on codes missing from the table instead of reporting no status
        #[arg(long)]
        strict: bool,
    },

    /// Show the named scopes generated for a status field
    Scopes {
        /// Accessor name
        #[arg(long, default_value = "status")]
        attr: String,

        /// Stored field, defaults to the accessor name
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Build a default visibility filter from status names
    #[command(alias = "vis")]
    Visibility {
        /// Status names to keep visible
        #[arg(required = true, num_args = 1..)]
        statuses: Vec<String>,

        /// Stored field
        #[arg(short, long, default_value = "record_status")]
        field: String,

        /// Also include rows where the field is null
        #[arg(long)]
        allow_null: bool,

        /// Also include rows where the field is empty
        #[arg(long)]
        allow_blank: bool,
    },

    /// Show the resolved configuration
    Config {
        /// Print a commented recstat.toml template instead
        #[arg(long)]
        template: bool,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
