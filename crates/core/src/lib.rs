//! # Alumnet Core
//!
//! Domain types, traits, and error definitions for the Alumnet alumni
//! assistant. This crate has **zero framework dependencies**: it defines
//! the domain model that all other crates implement against.
//!
//! Both external collaborators are traits here:
//! - [`RecordStore`] for the document store holding alumni collections
//! - [`Provider`] for the language-model chat endpoint
//!
//! Implementations live in `alumnet-store` and `alumnet-providers`, which
//! keeps the chat pipeline testable with in-process stubs.

pub mod error;
pub mod message;
pub mod provider;
pub mod records;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, StoreError};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use records::{
    AlumniProfile, Campaign, Entity, Event, Internship, MentorshipOffer, Notification,
};
pub use store::{Document, RecordStore, StoredRecord};
