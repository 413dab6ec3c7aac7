//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};
use crate::core::{Project, RangeOption};
use crate::labels::Lang;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "adspend")]
#[command(about = "Daily ad spend and cost-per-purchase tracker", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Only show one project
    #[arg(short, long, global = true, value_enum)]
    pub(crate) project: Option<Project>,

    /// Date range to report on
    #[arg(short, long, global = true, value_enum)]
    pub(crate) range: Option<RangeOption>,

    /// Custom range start (YYYYMMDD or YYYY-MM-DD); implies --range custom
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) from: Option<String>,

    /// Custom range end, inclusive; implies --range custom
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) to: Option<String>,

    /// Range of the overview shown above a single-project report
    #[arg(long, global = true, value_enum, value_name = "RANGE")]
    pub(crate) overview_range: Option<RangeOption>,

    /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) today: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for results
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Language of project, platform and export header labels
    #[arg(long, global = true, value_enum)]
    pub(crate) lang: Option<Lang>,

    /// Entries file (default: <data dir>/adspend/entries.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data_file: Option<PathBuf>,

    /// Skip the confirmation prompt of delete and import
    #[arg(short, long, global = true)]
    pub(crate) yes: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Range used when --range is not given (from the config file)
    #[arg(skip)]
    pub(crate) default_range: Option<RangeOption>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, config applies only while the CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Optional values: only apply if CLI didn't set them
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        if self.lang.is_none() {
            self.lang = config.lang;
        }
        if self.data_file.is_none() {
            self.data_file = config.data_file.clone();
        }
        if self.default_range.is_none() {
            self.default_range = config.default_range.as_deref().map(RangeOption::parse_lenient);
        }

        self
    }

    /// Color for tables on stdout
    pub(crate) fn use_color(&self) -> bool {
        self.color_enabled(std::io::stdout().is_terminal())
    }

    /// Color for log lines on stderr
    pub(crate) fn use_log_color(&self) -> bool {
        self.color_enabled(std::io::stderr().is_terminal())
    }

    fn color_enabled(&self, is_terminal: bool) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }

    pub(crate) fn lang(&self) -> Lang {
        self.lang.unwrap_or_default()
    }
}
