//! Arrival announcement after a paid train warp.
//!
//! Arming starts the ambient train loop and parks the arrival message in the
//! [`PendingWarpStore`]. The message is shown on the next dialogue-box
//! transition; any other transition leaves it pending. With a timeout
//! configured, a warp observed after its deadline is dropped silently.

use std::sync::Arc;

use chrono::Duration;
use transit_domain::StopId;

use crate::infrastructure::ports::{AudioPort, ClockPort, DialogPort, MenuTransition};
use crate::stores::{NotifierState, PendingWarp, PendingWarpStore};

pub const AMBIENT_CUE: &str = "trainLoop";
pub const ARRIVAL_CUE: &str = "trainWhistle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrivalOutcome {
    NothingPending,
    StillArmed,
    Announced { destination: StopId },
    Expired { destination: StopId },
}

pub struct ArrivalNotifier {
    store: PendingWarpStore,
    audio: Arc<dyn AudioPort>,
    dialog: Arc<dyn DialogPort>,
    clock: Arc<dyn ClockPort>,
    timeout: Option<Duration>,
}

impl ArrivalNotifier {
    pub fn new(
        audio: Arc<dyn AudioPort>,
        dialog: Arc<dyn DialogPort>,
        clock: Arc<dyn ClockPort>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            store: PendingWarpStore::new(),
            audio,
            dialog,
            clock,
            timeout,
        }
    }

    pub fn state(&self) -> NotifierState {
        self.store.state()
    }

    /// Arm for `destination`. A warp that was still pending is replaced and its loop stopped.
    pub fn arm(&mut self, destination: &StopId, arrival_message: String) {
        let ambient = self.audio.start_loop(AMBIENT_CUE);
        let pending = PendingWarp::new(
            destination.clone(),
            arrival_message,
            self.clock.now(),
            ambient,
        );
        if let Some(displaced) = self.store.arm(pending) {
            let (replaced, _) = displaced.stop_ambient();
            tracing::debug!(stop_id = %replaced, "Replaced pending arrival");
        }
        tracing::debug!(stop_id = %destination, "Arrival armed");
    }

    /// React to a menu transition reported by the host.
    pub fn observe(&mut self, transition: MenuTransition) -> ArrivalOutcome {
        let Some(pending) = self.store.peek() else {
            return ArrivalOutcome::NothingPending;
        };
        let expired = self.is_expired(pending);
        if !expired && transition != MenuTransition::DialogOpened {
            return ArrivalOutcome::StillArmed;
        }
        let Some(pending) = self.store.take() else {
            return ArrivalOutcome::NothingPending;
        };

        if expired {
            let (destination, _) = pending.stop_ambient();
            tracing::info!(stop_id = %destination, "Pending arrival expired");
            return ArrivalOutcome::Expired { destination };
        }

        self.dialog.show_notice(&pending.arrival_message);
        let (destination, _) = pending.stop_ambient();
        self.audio.play_once(ARRIVAL_CUE);
        tracing::info!(stop_id = %destination, "Arrival announced");
        ArrivalOutcome::Announced { destination }
    }

    /// Drop whatever is pending, e.g. when the session ends.
    pub fn reset(&mut self) -> Option<StopId> {
        self.store
            .take()
            .map(|pending| pending.stop_ambient().0)
    }

    fn is_expired(&self, pending: &PendingWarp) -> bool {
        self.timeout
            .is_some_and(|timeout| self.clock.now() - pending.armed_at > timeout)
    }
}
