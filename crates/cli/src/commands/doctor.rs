//! `angstrom doctor`: diagnose configuration, content and provider health.

use std::path::PathBuf;

use angstrom_config::AppConfig;
use angstrom_content::ContentStore;

pub async fn run(
    config_path: Option<PathBuf>,
    ping: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Angstrom Doctor: System Diagnostics");
    println!("===================================\n");

    let mut issues = 0;

    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => {
            println!("  ✅ Config valid ({} / {})", config.provider, config.model);
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  1 issue found. Fix the config before running further checks.");
            return Ok(());
        }
    };

    if config.has_api_key() {
        println!("  ✅ API key configured");
    } else {
        println!(
            "  ⚠️  No API key configured: set {} or ANGSTROM_API_KEY",
            config.credential_env()
        );
        issues += 1;
    }

    match ContentStore::load(&config.content.dir) {
        Ok(store) if store.is_empty() => {
            println!(
                "  ⚠️  No page content found in {}",
                config.content.dir.display()
            );
            issues += 1;
        }
        Ok(store) => println!("  ✅ Content loaded: {}", store.pages().join(", ")),
        Err(e) => {
            println!("  ❌ Content invalid: {e}");
            issues += 1;
        }
    }

    if ping {
        let provider = angstrom_providers::build_from_config(&config);
        match provider.health_check().await {
            Ok(true) => println!("  ✅ Provider {} reachable", provider.name()),
            Ok(false) => {
                println!("  ❌ Provider {} answered with an error status", provider.name());
                issues += 1;
            }
            Err(e) => {
                println!("  ❌ Provider {} unreachable: {e}", provider.name());
                issues += 1;
            }
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed!");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
