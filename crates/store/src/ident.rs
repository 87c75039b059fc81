use model::CityId;

/// Hands out city identities during one load pass.
///
/// Reset to 1 at the start of every load, so a city's identity is its
/// 1-based position among the rows that loaded.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: CityId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Restarts numbering at 1.
    pub fn reset(&mut self) {
        self.next = 1;
    }

    /// Returns the next identity and advances the counter.
    pub fn next_id(&mut self) -> CityId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of identities handed out since the last reset.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
