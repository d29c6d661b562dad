//! CLI argument definitions for the `dfa` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dfa_cli::types::SuggestKind;
use dfa_editor::Sample;
use dfa_model::{ApplicationMetaData, MessagingType, StorageType};

#[derive(Parser)]
#[command(
    name = "dfa",
    version,
    about = "Check, format, and package DFA specification documents",
    long_about = "Check, format, and package DFA specification documents.\n\n\
                  Documents are the canonical JSON form consumed by the \
                  application-generation service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Editor options in TOML (naming rules, default description).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a document and list its transitions.
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Rewrite a document in canonical form.
    Format {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write here instead of stdout.
        #[arg(long = "output", short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Propose the next unused state name or symbol.
    Suggest {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long = "kind", value_enum, default_value = "state")]
        kind: SuggestKind,
    },

    /// Print a bundled sample (even-zeros, beverage-vending, decimal-numbers).
    Sample {
        #[arg(value_name = "NAME")]
        name: Sample,
    },

    /// Print the generation request for a document.
    Request(RequestArgs),
}

#[derive(Parser)]
pub struct RequestArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long = "app-name")]
    pub app_name: String,

    #[arg(long = "app-package")]
    pub app_package: String,

    #[arg(long = "container-registry", default_value = "")]
    pub container_registry: String,

    #[arg(long = "messaging", value_enum, default_value = "rabbitmq")]
    pub messaging: MessagingArg,

    #[arg(long = "storage", value_enum, default_value = "redis")]
    pub storage: StorageArg,

    /// Include optional services in the generated application.
    #[arg(long = "optional-services")]
    pub optional_services: bool,
}

impl RequestArgs {
    pub fn metadata(&self) -> ApplicationMetaData {
        ApplicationMetaData::new(&self.app_name, &self.app_package)
            .with_container_registry(&self.container_registry)
            .with_messaging_type(self.messaging.into())
            .with_storage_type(self.storage.into())
            .with_optional_services(self.optional_services)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MessagingArg {
    Rabbitmq,
    Artemis,
    Kafka,
}

impl From<MessagingArg> for MessagingType {
    fn from(arg: MessagingArg) -> Self {
        match arg {
            MessagingArg::Rabbitmq => Self::Rabbitmq,
            MessagingArg::Artemis => Self::Artemis,
            MessagingArg::Kafka => Self::Kafka,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StorageArg {
    Redis,
    Mongodb,
    Postgresql,
}

impl From<StorageArg> for StorageType {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Redis => Self::Redis,
            StorageArg::Mongodb => Self::Mongodb,
            StorageArg::Postgresql => Self::Postgresql,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
