//! # Alumnet Context
//!
//! Turns the document store into a prompt. Per request:
//!
//! 1. [`ContextAggregator`] reads the six collections concurrently,
//!    degrading any failed read to empty data.
//! 2. The [`sections`] formatters render each collection as HTML.
//! 3. [`prompt`] assembles the persona and the labeled database.
//! 4. [`AlumniAssistant`] sends the result to the model.

pub mod aggregator;
pub mod assistant;
pub mod fetch;
pub mod prompt;
pub mod sections;

pub use aggregator::{ContextAggregator, ContextBundle, GatheredContext};
pub use assistant::AlumniAssistant;
pub use fetch::{FetchOutcome, fetch_collection};
