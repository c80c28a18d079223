//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::error::ConfigurationError;
use crate::pricing::Model;
use crate::projection::{
    INPUT_K_MAX, INPUT_K_MIN, OUTPUT_K_MAX, OUTPUT_K_MIN, QUERIES_MAX, QUERIES_MIN, QueryParams,
    RETENTION_MAX, RETENTION_MIN,
};

use super::commands::Commands;

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
#[command(name = "cachecost")]
#[command(
    about = "Compare normal and context-caching token billing for Gemini models",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Model id (gemini15Pro, gemini15Flash, ...)
    #[arg(short, long, global = true)]
    pub(crate) model: Option<String>,

    /// Input context size in K units
    #[arg(
        short,
        long,
        global = true,
        value_name = "K",
        value_parser = clap::value_parser!(u32).range(i64::from(INPUT_K_MIN)..=i64::from(INPUT_K_MAX))
    )]
    pub(crate) input: Option<u32>,

    /// Output context size in K units
    #[arg(
        short,
        long,
        global = true,
        value_name = "K",
        value_parser = clap::value_parser!(u32).range(i64::from(OUTPUT_K_MIN)..=i64::from(OUTPUT_K_MAX))
    )]
    pub(crate) output: Option<u32>,

    /// Cache retention in minutes
    #[arg(
        short,
        long,
        global = true,
        value_name = "MINUTES",
        value_parser = clap::value_parser!(u32).range(i64::from(RETENTION_MIN)..=i64::from(RETENTION_MAX))
    )]
    pub(crate) retention: Option<u32>,

    /// Largest query count on the x-axis
    #[arg(
        short,
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(i64::from(QUERIES_MIN)..=i64::from(QUERIES_MAX))
    )]
    pub(crate) queries: Option<u32>,

    /// Output as JSON
    #[arg(short, long, global = true, conflicts_with = "csv")]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Compact output (fewer columns, no price footer)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for decimal separators (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH", env = "CACHECOST_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // `prices -m ID` means the same as `prices ID`; a config model never filters
        if let Some(Commands::Prices { only }) = &mut self.command
            && only.is_none()
        {
            *only = self.model.take();
        }

        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
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

        if self.model.is_none() {
            self.model = config.model.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        self.input = self.input.or(config.input);
        self.output = self.output.or(config.output);
        self.retention = self.retention.or(config.retention);
        self.queries = self.queries.or(config.queries);

        self
    }

    /// Build the projection inputs; unset fields take the calculator defaults.
    ///
    /// Config-file numbers bypass clap's range checks, hence the clamp.
    pub(crate) fn query_params(&self) -> Result<QueryParams, ConfigurationError> {
        let defaults = QueryParams::default();
        let model = match &self.model {
            Some(raw) => raw.parse::<Model>()?,
            None => defaults.model,
        };
        Ok(QueryParams {
            model,
            context_size_input: self.input.unwrap_or(defaults.context_size_input),
            context_size_output: self.output.unwrap_or(defaults.context_size_output),
            cache_retention_minutes: self.retention.unwrap_or(defaults.cache_retention_minutes),
            max_queries: self.queries.unwrap_or(defaults.max_queries),
        }
        .clamped())
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
