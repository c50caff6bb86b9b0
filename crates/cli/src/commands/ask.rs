//! `alumnet ask`: Run the chat pipeline once.

use alumnet_context::{AlumniAssistant, ContextAggregator};
use std::path::Path;

pub async fn run(config_path: Option<&Path>, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    let question = message.trim();
    if question.is_empty() {
        return Err("Message is required".into());
    }

    // Check for API key early; fail with a clear error
    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set the OPENAI_API_KEY environment variable,");
        eprintln!("  or add api_key under [model] in your config file.");
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let store = alumnet_store::open_store(&config.store).await?;
    let provider = alumnet_providers::build_from_config(&config);
    let aggregator = ContextAggregator::new(store, config.collections.clone());
    let assistant = AlumniAssistant::new(aggregator, provider, config.model.name.clone());

    let reply = assistant.answer(question).await?;
    println!("{reply}");

    Ok(())
}
