// In process registry of events keyed by identifier.
//
// Purpose
// - Hold the current set of events and hand out identifiers.
//
// Invariants
// - Identifiers start at 1, only grow, and are never handed out twice, even after a removal.
// - Iteration order is ascending identifier, which is also insertion order.
//
// Boundaries
// - Pure data. Locking and mirroring belong to the application handler.

use crate::modules::events::core::event::{Event, EventId};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("event {id} not found")]
    NotFound { id: EventId },

    #[error("no event titled {title:?}")]
    TitleNotFound { title: String },
}

#[derive(Debug, Clone)]
pub struct Registry {
    entries: BTreeMap<EventId, Event>,
    next_id: EventId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<EventId, Event> {
        &self.entries
    }

    pub fn insert(&mut self, event: Event) -> EventId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, event);
        id
    }

    /// First exact, case-sensitive match on title in identifier order.
    pub fn find_by_title(&self, title: &str) -> Result<(EventId, &Event), RegistryError> {
        self.entries
            .iter()
            .find(|(_, event)| event.title == title)
            .map(|(id, event)| (*id, event))
            .ok_or_else(|| RegistryError::TitleNotFound {
                title: title.to_string(),
            })
    }

    pub fn replace(&mut self, id: EventId, event: Event) -> Result<(), RegistryError> {
        match self.entries.get_mut(&id) {
            Some(slot) => {
                *slot = event;
                Ok(())
            }
            None => Err(RegistryError::NotFound { id }),
        }
    }

    pub fn remove(&mut self, id: EventId) -> Result<Event, RegistryError> {
        self.entries
            .remove(&id)
            .ok_or(RegistryError::NotFound { id })
    }
}
