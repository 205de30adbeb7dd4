use folio_types::EffectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    Idle,
    Active,
}

/// Snapshot of the effect a scheduler owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectInstance {
    pub kind: EffectKind,
    pub active: bool,
    /// Scheduler time of the latest activation (0 if never activated).
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl EffectInstance {
    pub fn new(kind: EffectKind, duration_ms: u64) -> Self {
        Self {
            kind,
            active: false,
            started_at_ms: 0,
            duration_ms,
        }
    }

    pub fn phase(&self) -> EffectPhase {
        if self.active {
            EffectPhase::Active
        } else {
            EffectPhase::Idle
        }
    }

    /// When the current window closes, if active.
    pub fn ends_at_ms(&self) -> Option<u64> {
        self.active
            .then(|| self.started_at_ms.saturating_add(self.duration_ms))
    }

    /// Milliseconds of the current window left at `now_ms`.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.ends_at_ms()
            .map_or(0, |end| end.saturating_sub(now_ms))
    }
}
