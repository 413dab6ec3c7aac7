//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::core::{Platform, Project};

/// Export file layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Spreadsheet CSV with a UTF-8 BOM (written to a file)
    Csv,
    /// Tab-separated rows for pasting into a spreadsheet (stdout by default)
    Tsv,
    /// Full JSON backup that `import` can read back
    Json,
}

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Record one day of spend for a project on a platform
    Add {
        /// Project the spend belongs to
        #[arg(value_name = "PROJECT", value_enum)]
        entry_project: Project,

        /// Platform the spend was made on
        #[arg(value_enum)]
        platform: Platform,

        /// Amount spent (SAR)
        spend: String,

        /// Number of purchases
        purchases: String,

        /// Day of the spend (YYYYMMDD or YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Change fields of an existing entry; its id stays the same
    Update {
        /// Entry id or a unique id prefix (see `list`)
        id: String,

        #[arg(long)]
        date: Option<String>,

        /// Move the entry to another project
        #[arg(long, value_name = "PROJECT", value_enum)]
        set_project: Option<Project>,

        #[arg(long, value_enum)]
        platform: Option<Platform>,

        #[arg(long)]
        spend: Option<String>,

        #[arg(long)]
        purchases: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry id or a unique id prefix (see `list`)
        id: String,
    },
    /// List entries with their ids (all dates unless a range is given)
    List,
    /// Show the dashboard report per project (default)
    Report,
    /// Compare spend and cost per result across platforms
    Platforms,
    /// Show spend per day
    Daily,
    /// Export entries as CSV, TSV or a JSON backup
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file ("-" for stdout)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Replace all entries with the contents of a JSON backup
    Import {
        /// Backup file produced by `export json`
        file: PathBuf,
    },
    /// Write the current entries to the data file again
    Save,
    /// List the date range options and what they cover today
    Ranges,
}

impl Commands {
    /// Commands that list raw entries default to every date
    pub(crate) fn defaults_to_all_dates(&self) -> bool {
        matches!(self, Commands::List | Commands::Export { .. })
    }
}
