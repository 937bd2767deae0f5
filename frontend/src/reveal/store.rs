use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use super::evaluator::Evaluation;
use super::layout::TargetId;
use super::scroll::ScrollState;

/// What happens to latched reveals when the page scrolls back up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rearm {
    /// Once revealed, always revealed for the life of the page.
    Never,
    /// Moving more than `slack_px` above the furthest point of the current
    /// downward pass starts a new pass, and targets the evaluator no longer
    /// reveals go back to hidden.
    OnScrollUp { slack_px: u32 },
}

/// Reveal flags for every registered target, in registration order.
///
/// Only ever replaced as a whole, so a renderer never sees a length that
/// disagrees with the target list it registered.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    rearm: Rearm,
    entries: Vec<(TargetId, bool)>,
    progress: Option<f64>,
    anchor: Option<u32>,
}

pub enum RevealAction {
    Apply {
        snapshot: ScrollState,
        targets: Vec<TargetId>,
        evaluation: Evaluation,
    },
    Reset,
}

impl RevealState {
    pub fn new(rearm: Rearm) -> Self {
        Self {
            rearm,
            entries: Vec::new(),
            progress: None,
            anchor: None,
        }
    }

    pub fn revealed(&self, id: TargetId) -> bool {
        self.entries
            .iter()
            .any(|(target, revealed)| *target == id && *revealed)
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Folds one evaluation pass into the latched state.
    pub fn apply(&self, snapshot: ScrollState, targets: &[TargetId], evaluation: &Evaluation) -> Self {
        let new_pass = match (self.rearm, self.anchor) {
            (Rearm::OnScrollUp { slack_px }, Some(anchor)) => {
                snapshot.offset.saturating_add(slack_px) < anchor
            }
            _ => false,
        };

        let anchor = if new_pass {
            snapshot.offset
        } else {
            self.anchor.map_or(snapshot.offset, |a| a.max(snapshot.offset))
        };

        let previous: HashMap<TargetId, bool> = if new_pass {
            HashMap::new()
        } else {
            self.entries.iter().copied().collect()
        };

        let entries = targets
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let raw = evaluation.flags.get(i).copied().unwrap_or(false);
                let latched = previous.get(&id).copied().unwrap_or(false);
                (id, raw || latched)
            })
            .collect();

        Self {
            rearm: self.rearm,
            entries,
            progress: evaluation.progress,
            anchor: Some(anchor),
        }
    }
}

#[cfg(test)]
impl RevealState {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flags(&self) -> Vec<bool> {
        self.entries.iter().map(|(_, revealed)| *revealed).collect()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.entries.get(index).map_or(false, |(_, revealed)| *revealed)
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Apply {
                snapshot,
                targets,
                evaluation,
            } => {
                let next = self.apply(snapshot, &targets, &evaluation);
                // Same state keeps the same Rc so nothing re-renders.
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
            RevealAction::Reset => Rc::new(Self::new(self.rearm)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::evaluator::{evaluate, Extent, RevealPolicy};
    use crate::reveal::layout::FixedLayout;
    use proptest::prelude::*;

    fn ids(n: usize) -> Vec<TargetId> {
        (0..n).map(TargetId).collect()
    }

    fn eval(flags: &[bool]) -> Evaluation {
        Evaluation {
            flags: flags.to_vec(),
            progress: None,
        }
    }

    fn at(offset: u32) -> ScrollState {
        ScrollState::new(offset, 800)
    }

    #[test]
    fn reveals_latch_on_the_way_down() {
        let state = RevealState::new(Rearm::Never)
            .apply(at(100), &ids(3), &eval(&[true, false, false]))
            .apply(at(150), &ids(3), &eval(&[false, true, false]));
        assert_eq!(state.flags(), vec![true, true, false]);
    }

    #[test]
    fn jitter_within_the_slack_keeps_reveals() {
        let rearm = Rearm::OnScrollUp { slack_px: 40 };
        let state = RevealState::new(rearm)
            .apply(at(500), &ids(2), &eval(&[true, true]))
            .apply(at(470), &ids(2), &eval(&[true, false]));
        assert_eq!(state.flags(), vec![true, true]);
    }

    #[test]
    fn scrolling_up_past_the_slack_rearms() {
        let rearm = Rearm::OnScrollUp { slack_px: 40 };
        let state = RevealState::new(rearm)
            .apply(at(500), &ids(2), &eval(&[true, true]))
            .apply(at(300), &ids(2), &eval(&[true, false]));
        assert_eq!(state.flags(), vec![true, false]);

        // The next downward pass latches again from the new anchor.
        let state = state
            .apply(at(320), &ids(2), &eval(&[false, false]))
            .apply(at(290), &ids(2), &eval(&[false, false]));
        assert_eq!(state.flags(), vec![true, false]);
    }

    #[test]
    fn never_rearm_ignores_upward_scroll() {
        let state = RevealState::new(Rearm::Never)
            .apply(at(900), &ids(1), &eval(&[true]))
            .apply(at(0), &ids(1), &eval(&[false]));
        assert!(state.is_revealed(0));
    }

    #[test]
    fn entries_follow_the_registered_targets() {
        let state = RevealState::new(Rearm::Never)
            .apply(at(100), &ids(3), &eval(&[true, true, true]));
        // Target 1 unmounts; the others keep their latch by identity.
        let targets = vec![TargetId(0), TargetId(2)];
        let state = state.apply(at(100), &targets, &eval(&[false]));
        assert_eq!(state.len(), 2);
        assert!(state.revealed(TargetId(2)));
        assert!(!state.revealed(TargetId(1)));
        assert!(!state.is_revealed(5));
    }

    #[test]
    fn unchanged_apply_keeps_the_same_allocation() {
        let state = Rc::new(RevealState::new(Rearm::Never).apply(at(10), &ids(2), &eval(&[true, false])));
        let next = state.clone().reduce(RevealAction::Apply {
            snapshot: at(10),
            targets: ids(2),
            evaluation: eval(&[true, false]),
        });
        assert!(Rc::ptr_eq(&state, &next));

        let reset = next.reduce(RevealAction::Reset);
        assert!(reset.is_empty());
        assert_eq!(reset.progress(), None);
    }

    proptest! {
        #[test]
        fn downward_pass_never_unreveals(steps in proptest::collection::vec(0u32..400, 1..30)) {
            let policy = RevealPolicy::FractionalProgress {
                start: Extent::Viewports(0.8),
                span: Extent::Viewports(1.5),
                epsilon: 0.05,
            };
            let layout = FixedLayout::new();
            let targets = ids(6);
            let mut state = RevealState::new(Rearm::OnScrollUp { slack_px: 48 });
            let mut offset = 0u32;
            for step in steps {
                offset += step;
                let snapshot = at(offset);
                let next = state.apply(snapshot, &targets, &evaluate(&snapshot, &targets, &layout, &policy));
                for (before, after) in state.flags().iter().zip(next.flags()) {
                    prop_assert!(!*before || after);
                }
                state = next;
            }
        }

        #[test]
        fn applying_the_same_snapshot_twice_is_stable(offset in 0u32..5000) {
            let policy = RevealPolicy::absolute(200.0);
            let layout = FixedLayout::new()
                .with(TargetId(0), 900.0, 300.0)
                .with(TargetId(1), 1400.0, 300.0);
            let targets = ids(2);
            let snapshot = at(offset);
            let evaluation = evaluate(&snapshot, &targets, &layout, &policy);
            let once = RevealState::new(Rearm::OnScrollUp { slack_px: 48 }).apply(snapshot, &targets, &evaluation);
            let twice = once.apply(snapshot, &targets, &evaluation);
            prop_assert_eq!(once, twice);
        }
    }
}
