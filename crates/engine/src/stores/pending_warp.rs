//! Single-slot storage for the warp awaiting its arrival notification.
//!
//! The slot is the only channel between a paid warp and the later menu
//! transition that announces the arrival. Arming an occupied slot replaces
//! its contents; nothing is queued.

use chrono::{DateTime, Utc};
use transit_domain::StopId;

use crate::infrastructure::ports::LoopingCue;

/// A paid warp whose arrival has not been announced yet.
pub struct PendingWarp {
    pub destination: StopId,
    pub arrival_message: String,
    pub armed_at: DateTime<Utc>,
    ambient: Box<dyn LoopingCue>,
}

impl PendingWarp {
    pub fn new(
        destination: StopId,
        arrival_message: impl Into<String>,
        armed_at: DateTime<Utc>,
        ambient: Box<dyn LoopingCue>,
    ) -> Self {
        Self {
            destination,
            arrival_message: arrival_message.into(),
            armed_at,
            ambient,
        }
    }

    /// Stop the ambient loop and release the warp.
    pub fn stop_ambient(mut self) -> (StopId, String) {
        self.ambient.stop();
        (self.destination, self.arrival_message)
    }
}

impl std::fmt::Debug for PendingWarp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingWarp")
            .field("destination", &self.destination)
            .field("arrival_message", &self.arrival_message)
            .field("armed_at", &self.armed_at)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierState {
    Idle,
    Armed,
}

#[derive(Debug, Default)]
pub struct PendingWarpStore {
    slot: Option<PendingWarp>,
}

impl PendingWarpStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NotifierState {
        match self.slot {
            Some(_) => NotifierState::Armed,
            None => NotifierState::Idle,
        }
    }

    /// Store `pending`, returning whatever it displaced.
    pub fn arm(&mut self, pending: PendingWarp) -> Option<PendingWarp> {
        self.slot.replace(pending)
    }

    pub fn take(&mut self) -> Option<PendingWarp> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&PendingWarp> {
        self.slot.as_ref()
    }
}
