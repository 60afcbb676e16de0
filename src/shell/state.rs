use crate::modules::events::adapters::inbound::pages::Pages;
use crate::modules::events::application::handler::EventsHandler;
use crate::shared::infrastructure::mirror::EventMirror;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventsHandler>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(mirror: Arc<dyn EventMirror>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            events: Arc::new(EventsHandler::new(mirror)),
            pages: Arc::new(Pages::new()?),
        })
    }
}
