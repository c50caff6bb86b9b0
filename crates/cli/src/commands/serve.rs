//! `alumnet serve`: Start the HTTP API server.

use std::path::Path;

pub async fn run(
    config_path: Option<&Path>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = port_override {
        config.server.port = port;
    }

    println!("Alumnet Gateway");
    println!("   Listening: {}:{}", config.server.host, config.server.port);
    println!("   Store:     {}", config.store.backend);
    println!("   Model:     {}", config.model.name);

    alumnet_gateway::start(config).await?;

    Ok(())
}
