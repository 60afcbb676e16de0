use crate::modules::events::core::event::{Event, EventId};
use crate::shared::infrastructure::mirror::{EventMirror, MirrorError, render};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Keeps every rendered snapshot. Toggle offline to make writes fail.
#[derive(Default)]
pub struct InMemoryMirror {
    pub writes: Mutex<Vec<String>>,
    is_offline: bool,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn last(&self) -> Option<String> {
        self.writes.lock().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl EventMirror for InMemoryMirror {
    async fn write(&self, snapshot: &BTreeMap<EventId, Event>) -> Result<(), MirrorError> {
        if self.is_offline {
            return Err(MirrorError::Backend("Mirror offline".into()));
        }
        self.writes.lock().await.push(render(snapshot));
        Ok(())
    }
}
