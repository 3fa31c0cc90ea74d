//! Catálogo Server - read-only HTTP API over the author/works catalog
//!
//! Configuration comes from `server.{toml,yaml,json}`, `CATALOGO__*`
//! environment variables and `PORT`; a `.env` file is read first if present.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::init_tracing(&config);

    server::start_server(config).await?;

    Ok(())
}
