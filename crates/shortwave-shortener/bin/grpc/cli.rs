use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SHORTWAVE_GRPC_LISTEN_ADDR";
pub const KEYGEN_ENDPOINT_ENV: &str = "SHORTWAVE_KEYGEN_ENDPOINT";
pub const STORAGE_BACKEND_ENV: &str = "SHORTWAVE_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "SHORTWAVE_REDIS_URL";
pub const EXPIRY_DAYS_ENV: &str = "SHORTWAVE_EXPIRY_DAYS";
pub const REDIRECT_CACHE_ENV: &str = "SHORTWAVE_REDIRECT_CACHE";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:50051";
pub const DEFAULT_KEYGEN_ENDPOINT: &str = "http://127.0.0.1:50052";
pub const DEFAULT_EXPIRY_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortwave-grpc-server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = KEYGEN_ENDPOINT_ENV, default_value = DEFAULT_KEYGEN_ENDPOINT)]
    pub keygen_endpoint: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = EXPIRY_DAYS_ENV, default_value_t = DEFAULT_EXPIRY_DAYS)]
    pub expiry_days: u32,

    /// Serve redirections through an in-memory record cache.
    #[arg(long, env = REDIRECT_CACHE_ENV)]
    pub cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_the_cache_off() {
        let cli = CLI::try_parse_from(["shortwave-grpc-server"]).unwrap();
        assert!(!cli.cache);
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.expiry_days, DEFAULT_EXPIRY_DAYS);
    }

    #[test]
    fn cache_flag_enables_the_cache() {
        let cli = CLI::try_parse_from(["shortwave-grpc-server", "--cache"]).unwrap();
        assert!(cli.cache);
    }
}
