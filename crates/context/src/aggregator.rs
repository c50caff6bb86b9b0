//! Context aggregation: one concurrent read per collection, joined.
//!
//! The six reads are independent and may complete in any order; the
//! aggregator waits for all of them before producing a [`ContextBundle`].
//! Since [`fetch_collection`] never fails, neither does aggregation: a
//! failed collection simply shows up empty.

use crate::fetch::{FetchOutcome, fetch_collection};
use alumnet_config::CollectionNames;
use alumnet_core::records::{
    AlumniProfile, Campaign, Entity, Event, Internship, MentorshipOffer, Notification,
};
use alumnet_core::store::RecordStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Every record the assistant may draw on for one request.
///
/// All six sequences are always present; absence of data is an empty Vec.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextBundle {
    pub events: Vec<Event>,
    pub fundraising: Vec<Campaign>,
    pub internships: Vec<Internship>,
    pub notifications: Vec<Notification>,
    pub users: Vec<AlumniProfile>,
    pub mentorship: Vec<MentorshipOffer>,
}

impl ContextBundle {
    /// Total number of records across all collections.
    pub fn total_records(&self) -> usize {
        self.events.len()
            + self.fundraising.len()
            + self.internships.len()
            + self.notifications.len()
            + self.users.len()
            + self.mentorship.len()
    }
}

/// A bundle together with the names of collections whose read failed.
#[derive(Debug, Clone, Default)]
pub struct GatheredContext {
    pub bundle: ContextBundle,
    pub degraded: Vec<String>,
}

/// Reads the configured collections from the store.
#[derive(Clone)]
pub struct ContextAggregator {
    store: Arc<dyn RecordStore>,
    collections: CollectionNames,
}

impl ContextAggregator {
    pub fn new(store: Arc<dyn RecordStore>, collections: CollectionNames) -> Self {
        Self { store, collections }
    }

    /// Build the bundle for one request.
    pub async fn collect(&self) -> ContextBundle {
        self.gather().await.bundle
    }

    /// Build the bundle and report which collections were degraded.
    pub async fn gather(&self) -> GatheredContext {
        let store = self.store.as_ref();
        let names = &self.collections;

        let (events, fundraising, internships, notifications, users, mentorship) = tokio::join!(
            fetch_collection(store, &names.events),
            fetch_collection(store, &names.fundraising),
            fetch_collection(store, &names.internships),
            fetch_collection(store, &names.notifications),
            fetch_collection(store, &names.users),
            fetch_collection(store, &names.mentorship),
        );

        let degraded: Vec<String> = [
            &events,
            &fundraising,
            &internships,
            &notifications,
            &users,
            &mentorship,
        ]
        .into_iter()
        .filter_map(|outcome| match outcome {
            FetchOutcome::Failed { collection, .. } => Some(collection.clone()),
            FetchOutcome::Loaded(_) => None,
        })
        .collect();

        let bundle = ContextBundle {
            events: decode(events),
            fundraising: decode(fundraising),
            internships: decode(internships),
            notifications: decode(notifications),
            users: decode(users),
            mentorship: decode(mentorship),
        };

        info!(
            records = bundle.total_records(),
            degraded = degraded.len(),
            "Context assembled"
        );

        GatheredContext { bundle, degraded }
    }
}

fn decode<T: Entity>(outcome: FetchOutcome) -> Vec<T> {
    outcome
        .into_documents()
        .into_iter()
        .map(T::from_document)
        .collect()
}
