use clap::{ArgAction, Parser, ValueEnum};
use phonebook_gateway::telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "PHONEBOOK_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "PHONEBOOK_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "PHONEBOOK_MYSQL_DSN";
pub const ID_GENERATOR_ENV: &str = "PHONEBOOK_ID_GENERATOR";
pub const SEED_SAMPLE_DATA_ENV: &str = "PHONEBOOK_SEED_SAMPLE_DATA";
pub const STATIC_DIR_ENV: &str = "PHONEBOOK_STATIC_DIR";
pub const LOG_FORMAT_ENV: &str = "PHONEBOOK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdGeneratorArg {
    /// Uniformly random ids below 100000, not checked for collisions.
    Random,
    /// Monotonically increasing ids.
    Seq,
}

impl Display for IdGeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdGeneratorArg::Random => write!(f, "random"),
            IdGeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "phonebook")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Id scheme of the in-memory store.
    #[arg(
        long,
        env = ID_GENERATOR_ENV,
        value_enum,
        default_value_t = IdGeneratorArg::Random
    )]
    pub id_generator: IdGeneratorArg,

    /// Start the in-memory store with the four sample records.
    #[arg(
        long,
        env = SEED_SAMPLE_DATA_ENV,
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_sample_data: bool,

    /// Serve files from this directory for paths no API route claims.
    #[arg(long, env = STATIC_DIR_ENV)]
    pub static_dir: Option<PathBuf>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}
