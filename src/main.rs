use anyhow::Context;
use backdesk::cli::{Cli, EntityArg};
use backdesk::config::{Config, ConfigStore};
use backdesk::logging::init_tracing;
use backdesk::ui::app::EntityTab;
use backdesk::ui::runtime;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let (path, mut config) = match cli.config.clone() {
        Some(path) => {
            let config = Config::load_from(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (path, config)
        }
        None => {
            let path = Config::config_path();
            let config = Config::load()
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (path, config)
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("invalid --base-url override")?;
    }

    let initial = match cli.entity {
        EntityArg::Products => EntityTab::Products,
        EntityArg::Users => EntityTab::Users,
    };

    let store = ConfigStore::new(config, path);
    runtime::run(store, initial).await
}
