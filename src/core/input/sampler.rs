//=========================================================================
// Input Sampler
//=========================================================================
//
// Drains the platform event queue once per frame and folds the events
// into an edge-triggered `InputSnapshot`.
//
// Architecture:
//   Receiver<PlatformEvent> → pump() → InputSnapshot (copied into Context)
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::snapshot::InputSnapshot;
use crate::core::platform_bridge::PlatformEvent;

//=== InputSampler ========================================================

/// Samples platform input at the frame boundary.
pub struct InputSampler {
    receiver: Receiver<PlatformEvent>,
    snapshot: InputSnapshot,
}

impl InputSampler {
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            snapshot: InputSnapshot::new(),
        }
    }

    /// Drains every pending platform event and returns the frame snapshot.
    ///
    /// Edges are reset to `Unchanged` before draining. A disconnected queue
    /// means the platform is gone and is reported as a quit request.
    pub fn pump(&mut self) -> InputSnapshot {
        self.snapshot.begin_frame();
        let mut drained = 0usize;

        loop {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Input(event)) => {
                    trace!(target: "input", "Sampled {:?}", event);
                    self.snapshot.apply(event);
                    drained += 1;
                }
                Ok(PlatformEvent::CloseRequested) => {
                    debug!(target: "input", "Close requested");
                    self.snapshot.request_quit();
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "input", "Platform queue disconnected");
                    self.snapshot.request_quit();
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained > 0 {
            trace!(target: "input", "Drained {} platform events", drained);
        }

        self.snapshot
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, KeyEdge};
    use crossbeam_channel::unbounded;

    fn key_down(key: KeyCode) -> PlatformEvent {
        PlatformEvent::Input(InputEvent::KeyDown { key })
    }

    fn key_up(key: KeyCode) -> PlatformEvent {
        PlatformEvent::Input(InputEvent::KeyUp { key })
    }

    #[test]
    fn pump_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut sampler = InputSampler::new(rx);

        let snapshot = sampler.pump();

        assert!(!snapshot.quit_requested());
        assert_eq!(snapshot.keys_held().count(), 0);
    }

    #[test]
    fn pump_drains_all_pending_events() {
        let (tx, rx) = unbounded();
        let mut sampler = InputSampler::new(rx);

        tx.send(key_down(KeyCode::ArrowUp)).unwrap();
        tx.send(key_down(KeyCode::Space)).unwrap();
        tx.send(key_down(KeyCode::Digit2)).unwrap();

        let snapshot = sampler.pump();

        assert!(snapshot.just_pressed(KeyCode::ArrowUp));
        assert!(snapshot.just_pressed(KeyCode::Space));
        assert!(snapshot.just_pressed(KeyCode::Digit2));
        assert!(tx.is_empty());
    }

    #[test]
    fn edges_reset_every_pump() {
        let (tx, rx) = unbounded();
        let mut sampler = InputSampler::new(rx);

        tx.send(key_down(KeyCode::Space)).unwrap();
        assert_eq!(sampler.pump().edge(KeyCode::Space), KeyEdge::JustPressed);

        // Auto-repeat
        tx.send(key_down(KeyCode::Space)).unwrap();
        let snapshot = sampler.pump();
        assert_eq!(snapshot.edge(KeyCode::Space), KeyEdge::Unchanged);
        assert!(snapshot.is_held(KeyCode::Space));

        assert_eq!(sampler.pump().edge(KeyCode::Space), KeyEdge::Unchanged);

        tx.send(key_up(KeyCode::Space)).unwrap();
        assert_eq!(sampler.pump().edge(KeyCode::Space), KeyEdge::JustReleased);
        assert_eq!(sampler.pump().edge(KeyCode::Space), KeyEdge::Unchanged);
    }

    #[test]
    fn close_request_sets_one_shot_quit() {
        let (tx, rx) = unbounded();
        let mut sampler = InputSampler::new(rx);

        tx.send(PlatformEvent::CloseRequested).unwrap();

        assert!(sampler.pump().quit_requested());
        assert!(!sampler.pump().quit_requested());
    }

    #[test]
    fn disconnect_is_reported_as_quit() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut sampler = InputSampler::new(rx);

        drop(tx);

        assert!(sampler.pump().quit_requested());
    }

    #[test]
    fn unidentified_events_are_ignored() {
        let (tx, rx) = unbounded();
        let mut sampler = InputSampler::new(rx);

        tx.send(PlatformEvent::Input(InputEvent::Unidentified)).unwrap();
        tx.send(key_down(KeyCode::Unidentified)).unwrap();

        let snapshot = sampler.pump();
        assert!(!snapshot.quit_requested());
        assert_eq!(snapshot.keys_held().count(), 0);
    }
}
