// Event record, the only entity in the registry.
//
// Purpose
// - Carry the six text attributes of a calendar event.
//
// Boundaries
// - No format validation on date, time or cost. Type coercion at the transport boundary is the only check.

use serde::{Deserialize, Serialize};

pub type EventId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub cost: String,
}
