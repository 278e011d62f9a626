use crate::outcome::ResolutionOutcome;

// Keeps the two candidates of one poll cycle. A later replaced outcome
// overwrites an earlier one, and last_seen always follows the newest peer.
#[derive(Default, Debug)]
pub struct Aggregator {
    authoritative: Option<ResolutionOutcome>,
    last_seen: Option<ResolutionOutcome>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, outcome: ResolutionOutcome) {
        if outcome.replaced {
            self.authoritative = Some(outcome.clone());
        }
        self.last_seen = Some(outcome);
    }

    /// Authoritative outcome if any peer replaced its chain, else the last one seen
    pub fn finish(self) -> Option<ResolutionOutcome> {
        self.authoritative.or(self.last_seen)
    }
}
