use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Poll for terminal events with timeout
pub fn poll_event(timeout_ms: u64) -> io::Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
