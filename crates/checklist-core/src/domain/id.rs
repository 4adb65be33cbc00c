//! Creation-time identifiers
//!
//! Ids are wall-clock milliseconds, bumped past the last issued id so that
//! two creations in the same millisecond still get distinct values.

use web_time::{SystemTime, UNIX_EPOCH};

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Seed with the largest id already in use
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    /// Fails with `IdsExhausted` once `u64::MAX` has been issued or seeded.
    pub fn next_id(&mut self) -> DomainResult<u64> {
        self.next_at(now_millis())
    }

    fn next_at(&mut self, now: u64) -> DomainResult<u64> {
        let bumped = self.last.checked_add(1).ok_or(DomainError::IdsExhausted)?;
        let id = now.max(bumped);
        self.last = id;
        Ok(id)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
