// Application handler for the events registry.
//
// Purpose
// - Own the registry for the lifetime of the service and expose the CRUD operations.
//
// Invariants
// - Every mutation and its mirror write run under the same lock, so the mirror has a single writer.
// - The mirror always reflects the post mutation state.
// - A failed mirror write leaves the registry as it was before the request.

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::registry::{Registry, RegistryError};
use crate::shared::infrastructure::mirror::EventMirror;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct EventsHandler {
    registry: Mutex<Registry>,
    mirror: Arc<dyn EventMirror>,
}

impl EventsHandler {
    pub fn new(mirror: Arc<dyn EventMirror>) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            mirror,
        }
    }

    pub async fn create(&self, event: Event) -> Result<(EventId, Event), ApplicationError> {
        let id = self
            .mutate(|registry| Ok(registry.insert(event.clone())))
            .await?;
        info!(event_id = id, title = %event.title, "Event created");
        Ok((id, event))
    }

    pub async fn list(&self) -> BTreeMap<EventId, Event> {
        self.registry.lock().await.entries().clone()
    }

    pub async fn find_by_title(&self, title: &str) -> Result<(EventId, Event), ApplicationError> {
        let registry = self.registry.lock().await;
        let (id, event) = registry.find_by_title(title)?;
        Ok((id, event.clone()))
    }

    pub async fn update(&self, id: EventId, event: Event) -> Result<(), ApplicationError> {
        self.mutate(|registry| registry.replace(id, event)).await?;
        info!(event_id = id, "Event updated");
        Ok(())
    }

    pub async fn delete(&self, id: EventId) -> Result<(), ApplicationError> {
        self.mutate(|registry| registry.remove(id)).await?;
        info!(event_id = id, "Event deleted");
        Ok(())
    }

    async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Registry) -> Result<T, RegistryError>,
    ) -> Result<T, ApplicationError> {
        let mut registry = self.registry.lock().await;
        let mut working = registry.clone();
        let out = op(&mut working)?;
        if let Err(err) = self.mirror.write(working.entries()).await {
            error!(error = %err, "Mirror write failed, mutation discarded");
            return Err(err.into());
        }
        *registry = working;
        Ok(out)
    }
}
