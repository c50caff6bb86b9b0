//! `alumnet context`: Show the prompt the model would receive.

use alumnet_context::{ContextAggregator, prompt};
use alumnet_core::message::Message;
use std::path::Path;

const DEFAULT_QUESTION: &str = "What is happening in the alumni network?";

pub async fn run(
    config_path: Option<&Path>,
    message: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let store = alumnet_store::open_store(&config.store).await?;
    let aggregator = ContextAggregator::new(store, config.collections.clone());

    let gathered = aggregator.gather().await;
    let question = message
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_QUESTION);
    let messages = prompt::build_messages(&gathered.bundle, question);

    print!("{}", render(&messages));

    println!("---");
    println!("Records: {}", gathered.bundle.total_records());
    if !gathered.degraded.is_empty() {
        println!("Unreadable collections: {}", gathered.degraded.join(", "));
    }

    Ok(())
}

fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("=== {} ===\n{}\n\n", m.role.as_str(), m.content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_labels_each_role() {
        let out = render(&[Message::system("persona"), Message::user("question")]);
        assert_eq!(out, "=== system ===\npersona\n\n=== user ===\nquestion\n\n");
    }
}
