// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// sqldialects - SQL dialect statement generator
///
/// Maps abstract field types onto SQLite, MySQL and PostgreSQL syntax
/// and renders CREATE / DROP / INSERT statements from table definitions.
#[derive(Parser, Debug)]
#[command(name = "sqldialects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Abstract field types and statement templates for SQL dialects")]
#[command(propagate_version = true)]
#[command(after_help = "Supported dialects: SQLite3, MySQL, PostgreSQL")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the abstract field types of a dialect
    ///
    /// EXAMPLES:
    ///   sqldialects types --dialect MySQL
    ///
    ///   # Resolve formatted types (varchar, decimal) with a format
    ///   sqldialects types --dialect PostgreSQL --format 12,2
    Types {
        /// Database dialect (SQLite3, MySQL, PostgreSQL)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: String,

        /// Format substituted into formatted types
        #[arg(short, long, value_name = "FORMAT", default_value = "")]
        format: String,
    },

    /// Generate statements from a table definition file
    ///
    /// EXAMPLES:
    ///   sqldialects generate --file tables.yaml
    ///
    ///   # Override the dialect declared in the file
    ///   sqldialects generate --file tables.yaml --dialect SQLite3
    ///
    ///   # Emit DROP TABLE statements instead
    ///   sqldialects generate --file tables.yaml --drop
    Generate {
        /// Table definition file (YAML)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Database dialect (SQLite3, MySQL, PostgreSQL)
        #[arg(short, long, value_name = "DIALECT")]
        dialect: Option<String>,

        /// Emit DROP TABLE statements instead of CREATE statements
        #[arg(long)]
        drop: bool,
    },
}
