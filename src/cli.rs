use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Terminal back-office client for REST collection APIs.
#[derive(Debug, Parser)]
#[command(name = "backdesk", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Tab to open on startup.
    #[arg(long, value_enum, default_value_t = EntityArg::Products)]
    pub entity: EntityArg,

    /// Write logs to this file. Logging is off otherwise, so the TUI
    /// stays clean. The BACKDESK_LOG env var works as a fallback.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityArg {
    Products,
    Users,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_products_tab() {
        let cli = Cli::parse_from(["backdesk"]);
        assert_eq!(cli.entity, EntityArg::Products);
        assert!(cli.base_url.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "backdesk",
            "--entity",
            "users",
            "--base-url",
            "http://localhost:4000",
            "--config",
            "/tmp/backdesk.toml",
        ]);
        assert_eq!(cli.entity, EntityArg::Users);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/backdesk.toml")));
    }
}
