use super::error::EngineError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues run tickets under the "last request wins" policy.
///
/// Each [`SearchGate::issue`] call starts a new request generation and
/// thereby supersedes every ticket issued earlier. Batch tasks poll their
/// ticket between chunks, so a stale run aborts at the next chunk boundary
/// instead of finishing and clobbering the newer result.
#[derive(Debug, Clone, Default)]
pub struct SearchGate {
    current: Arc<AtomicU64>,
}

impl SearchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            gate: Arc::clone(&self.current),
            generation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    gate: Arc<AtomicU64>,
    generation: u64,
}

impl Ticket {
    /// A ticket with no gate behind it: it can never be superseded. For
    /// strictly batch contexts where no competing request exists.
    pub fn standalone() -> Self {
        Self {
            gate: Arc::new(AtomicU64::new(0)),
            generation: 0,
        }
    }

    pub fn is_superseded(&self) -> bool {
        self.gate.load(Ordering::SeqCst) != self.generation
    }

    pub fn ensure_current(&self) -> Result<(), EngineError> {
        if self.is_superseded() {
            Err(EngineError::Superseded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let gate = SearchGate::new();
        let ticket = gate.issue();
        assert!(!ticket.is_superseded());
        assert!(ticket.ensure_current().is_ok());
    }

    #[test]
    fn issuing_again_supersedes_earlier_tickets() {
        let gate = SearchGate::new();
        let first = gate.issue();
        let second = gate.issue();

        assert!(first.is_superseded());
        assert!(!second.is_superseded());
        assert!(matches!(
            first.ensure_current(),
            Err(EngineError::Superseded)
        ));
    }

    #[test]
    fn standalone_ticket_never_expires() {
        let ticket = Ticket::standalone();
        assert!(!ticket.is_superseded());
    }

    #[test]
    fn clones_share_the_generation() {
        let gate = SearchGate::new();
        let ticket = gate.issue();
        let clone = ticket.clone();
        gate.issue();
        assert!(ticket.is_superseded());
        assert!(clone.is_superseded());
    }
}
