//! `angstrom serve`: start the website HTTP gateway.

use std::path::PathBuf;

pub async fn run(
    config_path: Option<PathBuf>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Angstrom Gateway");
    println!("   Listening: {}", config.bind_addr());
    println!("   Provider:  {} ({})", config.provider, config.model);
    println!("   Content:   {}", config.content.dir.display());

    angstrom_gateway::start(config).await?;

    Ok(())
}
