//! `alumnet doctor`: Diagnose system health.

use alumnet_config::AppConfig;
use alumnet_core::error::ProviderError;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Alumnet Doctor — System Diagnostics");
    println!("===================================\n");

    let mut issues = 0;

    // Check config
    let path = AppConfig::config_path(config_path);
    if path.exists() {
        println!("  ✅ Config file found at {}", path.display());
    } else {
        println!("  ℹ️  No config file at {} — using defaults", path.display());
    }

    let config = match AppConfig::load(config_path) {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            println!("\n  ⚠️  Fix the configuration before running further checks.");
            return Ok(());
        }
    };

    // Check API key
    if config.has_api_key() {
        println!("  ✅ API key configured");
    } else {
        println!("  ⚠️  No API key configured — set OPENAI_API_KEY");
        issues += 1;
    }

    // Check store
    match alumnet_store::open_store(&config.store).await {
        Ok(store) => {
            println!("  ✅ Store reachable ({})", store.name());
            for collection in config.collections.all() {
                match store.count(collection).await {
                    Ok(0) => {
                        println!("     ⚠️  {collection}: empty");
                    }
                    Ok(n) => println!("     {collection}: {n} document(s)"),
                    Err(e) => {
                        println!("     ❌ {collection}: {e}");
                        issues += 1;
                    }
                }
            }
        }
        Err(e) => {
            println!("  ❌ Store unavailable: {e}");
            issues += 1;
        }
    }

    // Check model endpoint
    if config.has_api_key() {
        let provider = alumnet_providers::build_from_config(&config);
        let (line, ok) = model_check_line(provider.health_check().await, &config.model.base_url);
        println!("{line}");
        if !ok {
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}

/// One report line for the model endpoint check, and whether it passed.
fn model_check_line(result: Result<bool, ProviderError>, base_url: &str) -> (String, bool) {
    match result {
        Ok(true) => (format!("  ✅ Model endpoint reachable ({base_url})"), true),
        Ok(false) => (
            format!("  ⚠️  Model endpoint not checked: no API key ({base_url})"),
            false,
        ),
        Err(e) => (format!("  ❌ Model endpoint check failed ({base_url}): {e}"), false),
    }
}
