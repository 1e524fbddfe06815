use std::rc::Rc;

use registrar::config::Config;
use registrar::search::{Router, StaticCatalog};
use registrar::server::Server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let catalog = StaticCatalog::load(&cfg.catalog_path)?;
    tracing::info!("Loaded {} courses from {}", catalog.len(), cfg.catalog_path);

    let router = Rc::new(Router::new(catalog));
    let server = Server::bind(&cfg.listen_addr).await?;

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            tokio::select! {
                res = server.run(router) => {
                    res?;
                }

                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received");
                }
            }

            Ok(())
        })
        .await
}
