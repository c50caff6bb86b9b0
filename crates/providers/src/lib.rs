//! LLM Provider implementations for Alumnet.
//!
//! All providers implement the `alumnet_core::Provider` trait. The chat
//! pipeline talks to a single OpenAI-compatible endpoint configured in the
//! `[model]` section.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use alumnet_core::provider::Provider;
use std::sync::Arc;

/// Build the configured provider.
pub fn build_from_config(config: &alumnet_config::AppConfig) -> Arc<dyn Provider> {
    if !config.has_api_key() {
        tracing::warn!("No model API key configured; chat requests will fail until OPENAI_API_KEY is set");
    }
    Arc::new(OpenAiCompatProvider::from_config(&config.model))
}
