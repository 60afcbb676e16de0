// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the mirror and the events handler.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
