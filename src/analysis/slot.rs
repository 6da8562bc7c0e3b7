//! Hand-off point between the engine reader thread and the session.

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use super::info::EngineInfo;

#[derive(Debug, Default)]
struct SlotState {
    fen: Option<String>,
    latest: Option<EngineInfo>,
}

/// Latest evaluation for the position currently under analysis.
///
/// Clones share the same slot. The reader thread calls [`publish`] as info
/// lines arrive; the owner polls with [`latest`] or [`take`]. Results for a
/// position other than the one last passed to [`begin`] are dropped, so a
/// slow reply never lands on the wrong position.
///
/// [`publish`]: EvaluationSlot::publish
/// [`latest`]: EvaluationSlot::latest
/// [`take`]: EvaluationSlot::take
/// [`begin`]: EvaluationSlot::begin
#[derive(Clone, Debug, Default)]
pub struct EvaluationSlot {
    inner: Arc<Mutex<SlotState>>,
}

impl EvaluationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start analysing `fen`, discarding any previous result.
    pub fn begin(&self, fen: &str) {
        let mut state = self.inner.lock();
        state.fen = Some(fen.to_string());
        state.latest = None;
    }

    /// Store an evaluation for `fen`. Returns false if it is stale.
    pub fn publish(&self, fen: &str, info: EngineInfo) -> bool {
        let mut state = self.inner.lock();
        if state.fen.as_deref() != Some(fen) {
            debug!("dropping stale evaluation for {fen}");
            return false;
        }
        // Keep the previous score when a line only updates the PV
        let merged = match (&state.latest, info.score) {
            (Some(prev), None) => EngineInfo {
                score: prev.score,
                bound: prev.bound,
                ..info
            },
            _ => info,
        };
        state.latest = Some(merged);
        true
    }

    #[must_use]
    pub fn latest(&self) -> Option<EngineInfo> {
        self.inner.lock().latest.clone()
    }

    pub fn take(&self) -> Option<EngineInfo> {
        self.inner.lock().latest.take()
    }

    #[must_use]
    pub fn current_fen(&self) -> Option<String> {
        self.inner.lock().fen.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::info::{parse_info_line, Score};
    use std::thread;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_publish_from_another_thread() {
        let slot = EvaluationSlot::new();
        slot.begin(START);

        let writer = slot.clone();
        let handle = thread::spawn(move || {
            for line in [
                "info depth 10 score cp 20 pv e2e4",
                "info depth 11 score cp 28 pv d2d4 d7d5",
            ] {
                if let Some(info) = parse_info_line(line) {
                    writer.publish(START, info);
                }
            }
        });
        handle.join().unwrap();

        let latest = slot.latest().unwrap();
        assert_eq!(latest.depth, Some(11));
        assert_eq!(latest.score, Some(Score::Cp(28)));
        assert_eq!(slot.take().unwrap().pv.len(), 2);
        assert!(slot.latest().is_none());
    }

    #[test]
    fn test_stale_results_dropped() {
        let slot = EvaluationSlot::new();
        slot.begin(START);
        slot.begin("8/8/8/8/8/8/8/K1k5 w - - 0 1");
        let info = parse_info_line("info depth 5 score cp 10 pv e2e4").unwrap();
        assert!(!slot.publish(START, info));
        assert!(slot.latest().is_none());
    }

    #[test]
    fn test_pv_only_update_keeps_score() {
        let slot = EvaluationSlot::new();
        slot.begin(START);
        slot.publish(START, parse_info_line("info depth 8 score mate 3 pv e2e4").unwrap());
        slot.publish(START, parse_info_line("info depth 9 pv d2d4").unwrap());
        let latest = slot.latest().unwrap();
        assert_eq!(latest.score, Some(Score::Mate(3)));
        assert_eq!(latest.depth, Some(9));
        assert_eq!(slot.current_fen().as_deref(), Some(START));
    }
}
