//! Input debouncing
//!
//! Every keystroke replaces the pending schedule. The timer itself lives
//! outside (an iced task); it hands the ticket back when it elapses and only
//! the ticket that is still pending may fire.

use std::time::Duration;

/// Handle for one scheduled search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    query: String,
}

impl Ticket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    next_id: u64,
    pending: Option<u64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `query`, superseding whatever was pending
    pub fn schedule(&mut self, query: String) -> Ticket {
        self.next_id += 1;
        self.pending = Some(self.next_id);
        Ticket {
            id: self.next_id,
            query,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume an elapsed ticket. Returns the query only if the ticket was
    /// not superseded or cancelled.
    pub fn fire(&mut self, ticket: Ticket) -> Option<String> {
        if self.pending == Some(ticket.id) {
            self.pending = None;
            Some(ticket.query)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.schedule("in".to_string());
        let second = debouncer.schedule("inc".to_string());

        assert_eq!(debouncer.fire(first), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(second), Some("inc".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.schedule("matrix".to_string());

        assert_eq!(debouncer.fire(ticket.clone()), Some("matrix".to_string()));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.schedule("matrix".to_string());
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(ticket), None);
    }
}
