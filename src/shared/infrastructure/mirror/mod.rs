// Mirror port: a flat text copy of the registry, rewritten after each mutation.
//
// Responsibilities
// - Render the full registry into the text block format.
// - Let the application write snapshots without knowing where they end up.
//
// Boundaries
// - Write only. Nothing reads the mirror back.

pub mod in_memory;
pub mod text_file;

use crate::modules::events::core::event::{Event, EventId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventMirror: Send + Sync {
    /// Replace the mirror content with `snapshot`.
    async fn write(&self, snapshot: &BTreeMap<EventId, Event>) -> Result<(), MirrorError>;
}

/// One `Label: value` block per event, each followed by a blank line.
pub fn render(snapshot: &BTreeMap<EventId, Event>) -> String {
    snapshot
        .iter()
        .map(|(id, event)| {
            format!(
                "Evento ID: {id}\n\
                 Title: {}\n\
                 Description: {}\n\
                 Date: {}\n\
                 Time: {}\n\
                 Location: {}\n\
                 Cost: {}\n\n",
                event.title, event.description, event.date, event.time, event.location, event.cost,
            )
        })
        .collect()
}
