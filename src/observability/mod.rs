//! Observability for the book tracker
//!
//! Structured JSON-lines logging of lifecycle, store and request events.
//!
//! ```ignore
//! use book_tracker::observability::{log_event, log_event_with_fields, Event};
//!
//! log_event(Event::ServerStart);
//! log_event_with_fields(Event::BookCreated, &[("id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
