//! Observable events
//!
//! Every log line the server writes is tagged with one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved from file, environment and flags
    ConfigResolved,
    /// Store created with seed records
    StoreSeeded,
    /// Server starting
    ServerStart,
    /// Listener bound, accepting requests
    ServerListening,
    /// Server stopped with an error
    ServerFailed,
    /// Static asset directory missing
    StaticDirMissing,

    // Books
    BookCreated,
    BookUpdated,
    BookDeleted,

    // Requests
    /// Request completed (any status)
    RequestComplete,
    /// Request failed with a client error
    RequestRejected,
    /// Request failed with a server error
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigResolved => "CONFIG_RESOLVED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerFailed => "SERVER_FAILED",
            Event::StaticDirMissing => "STATIC_DIR_MISSING",
            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed | Event::RequestFailed => Severity::Error,
            Event::StaticDirMissing | Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BookCreated.as_str(), "BOOK_CREATED");
        assert_eq!(Event::RequestComplete.to_string(), "REQUEST_COMPLETE");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::BookDeleted.severity(), Severity::Info);
        assert_eq!(Event::RequestRejected.severity(), Severity::Warn);
        assert_eq!(Event::ServerFailed.severity(), Severity::Error);
    }
}
