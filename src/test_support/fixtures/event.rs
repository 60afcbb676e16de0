// Shared test fixture for the Event record.

use crate::modules::events::core::event::Event;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                title: "Meetup".to_string(),
                description: "d".to_string(),
                date: "2024-01-01".to_string(),
                time: "18:00".to_string(),
                location: "Lab".to_string(),
                cost: "0".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn cost(mut self, v: impl Into<String>) -> Self {
        self.inner.cost = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }

    pub fn to_json(self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}
