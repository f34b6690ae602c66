//! Request generations
//!
//! Responses can arrive out of order. Only the response belonging to the most
//! recently dispatched request is allowed to reach the results panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    current: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the generation for a new dispatch; every earlier one goes stale
    pub fn begin(&mut self) -> Generation {
        self.issued += 1;
        self.current = Some(self.issued);
        Generation(self.issued)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == Some(generation.0)
    }

    /// Make every outstanding generation stale without issuing a new one
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(first < second);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_invalidate() {
        let mut sequencer = RequestSequencer::new();
        let generation = sequencer.begin();
        sequencer.invalidate();
        assert!(!sequencer.is_current(generation));

        let next = sequencer.begin();
        assert!(next > generation);
        assert!(sequencer.is_current(next));
    }
}
