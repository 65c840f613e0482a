use std::time::{Duration, Instant};

/// Minimum gap between two accepted announcements.
const MIN_INTERVAL: Duration = Duration::from_millis(10_000);
/// Settle time after an utterance ends before the gate reopens.
const COOLDOWN: Duration = Duration::from_millis(3_000);

/// Outcome of offering a detection to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Start speaking now.
    Speak,
    /// Dropped. Detections are never queued for later.
    Suppressed,
}

/// Debounce gate for spoken announcements.
///
/// At most one utterance is in flight at a time: `busy` covers both the
/// utterance itself and its trailing cooldown. All timestamps are passed
/// in by the caller, so decisions are deterministic and the gate can be
/// exercised without a speech engine or a clock.
#[derive(Debug, Default)]
pub struct AnnounceGate {
    busy: bool,
    last_accepted: Option<Instant>,
}

impl AnnounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a detection arriving at `now` may be spoken.
    ///
    /// On `Speak` the gate marks itself busy and records `now`; the
    /// caller must cancel any release still pending from the previous
    /// utterance before starting the new one.
    pub fn try_announce(&mut self, now: Instant) -> Decision {
        if self.busy {
            return Decision::Suppressed;
        }
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < MIN_INTERVAL {
                return Decision::Suppressed;
            }
        }
        self.busy = true;
        self.last_accepted = Some(now);
        Decision::Speak
    }

    /// How long after the utterance ends (at `now`) the release should
    /// fire: the unspent part of the cooldown, clamped to zero.
    pub fn cooldown_remaining(&self, now: Instant) -> Duration {
        match self.last_accepted {
            Some(last) => COOLDOWN.saturating_sub(now.duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Reopen the gate. Called when the post-utterance cooldown elapses.
    pub fn release(&mut self) {
        self.busy = false;
    }

    /// Forget all timing state. Called when a feed session stops, so a
    /// suppression window never leaks into the next session.
    pub fn reset(&mut self) {
        self.busy = false;
        self.last_accepted = None;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn first_detection_speaks() {
        let mut gate = AnnounceGate::new();
        assert_eq!(gate.try_announce(Instant::now()), Decision::Speak);
        assert!(gate.is_busy());
    }

    #[test]
    fn burst_collapses_to_one_announcement() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();
        assert_eq!(gate.try_announce(t0), Decision::Speak);
        // Everything inside the window is dropped, busy or not.
        gate.release();
        for ms in [100, 500, 2_000, 9_999] {
            assert_eq!(gate.try_announce(at(t0, ms)), Decision::Suppressed);
        }
    }

    #[test]
    fn busy_suppresses_even_after_window_elapses() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();
        assert_eq!(gate.try_announce(t0), Decision::Speak);
        // No release: a stuck utterance keeps the gate closed.
        assert_eq!(gate.try_announce(at(t0, 12_000)), Decision::Suppressed);
    }

    #[test]
    fn cooldown_is_clamped_to_zero() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();
        gate.try_announce(t0);
        // Utterance ended 2s in: 1s of cooldown left.
        assert_eq!(
            gate.cooldown_remaining(at(t0, 2_000)),
            Duration::from_millis(1_000)
        );
        // Long utterance already outlasted the cooldown.
        assert_eq!(gate.cooldown_remaining(at(t0, 5_000)), Duration::ZERO);
    }

    #[test]
    fn detection_sequence_through_one_utterance() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();

        // "A" at t=0 starts an utterance.
        assert_eq!(gate.try_announce(t0), Decision::Speak);
        // "B" at t=500ms: utterance still playing.
        assert_eq!(gate.try_announce(at(t0, 500)), Decision::Suppressed);

        // Utterance ends at t=2000ms; 1000ms of cooldown remain.
        assert_eq!(
            gate.cooldown_remaining(at(t0, 2_000)),
            Duration::from_millis(1_000)
        );
        gate.release();

        // "C" at t=4000ms: released, but inside the 10s window.
        assert_eq!(gate.try_announce(at(t0, 4_000)), Decision::Suppressed);
        // "D" at t=11000ms: window elapsed and gate open.
        assert_eq!(gate.try_announce(at(t0, 11_000)), Decision::Speak);
    }

    #[test]
    fn detections_just_over_the_window_both_speak() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();
        assert_eq!(gate.try_announce(t0), Decision::Speak);
        gate.release();
        assert_eq!(gate.try_announce(at(t0, 10_001)), Decision::Speak);
    }

    #[test]
    fn reset_clears_the_suppression_window() {
        let t0 = Instant::now();
        let mut gate = AnnounceGate::new();
        assert_eq!(gate.try_announce(t0), Decision::Speak);
        // Feed stopped and restarted right away.
        gate.reset();
        assert_eq!(gate.try_announce(at(t0, 1_000)), Decision::Speak);
    }

    #[test]
    fn release_is_idempotent() {
        let mut gate = AnnounceGate::new();
        gate.release();
        assert!(!gate.is_busy());
        assert_eq!(gate.cooldown_remaining(Instant::now()), Duration::ZERO);
    }
}
