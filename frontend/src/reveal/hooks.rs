use std::rc::Rc;

use yew::prelude::*;

use super::evaluator::{evaluate, RevealPolicy};
use super::layout::{DomLayout, TargetId};
use super::scroll::use_scroll_state;
use super::store::{Rearm, RevealAction, RevealState};

#[derive(Clone)]
pub struct RevealHandle {
    refs: Rc<Vec<(TargetId, NodeRef)>>,
    state: UseReducerHandle<RevealState>,
}

impl RevealHandle {
    /// The ref to attach to a target's element. Unknown ids get a detached
    /// ref, which simply never measures.
    pub fn node_ref(&self, id: TargetId) -> NodeRef {
        self.refs
            .iter()
            .find(|(target, _)| *target == id)
            .map(|(_, node_ref)| node_ref.clone())
            .unwrap_or_default()
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.state.revealed(id)
    }

    pub fn progress(&self) -> Option<f64> {
        self.state.progress()
    }
}

/// Tracks `ids` against the page's scroll snapshot.
///
/// Targets register when the owning component mounts their elements and go
/// away with it; a different id list starts from a clean store.
#[hook]
pub fn use_reveal(ids: Vec<TargetId>, policy: RevealPolicy, rearm: Rearm) -> RevealHandle {
    let snapshot = use_scroll_state();
    let refs = use_memo(
        |ids: &Vec<TargetId>| {
            ids.iter()
                .map(|&id| (id, NodeRef::default()))
                .collect::<Vec<_>>()
        },
        ids.clone(),
    );
    let state = use_reducer(move || RevealState::new(rearm));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(RevealAction::Reset);
                || ()
            },
            ids.clone(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let refs = refs.clone();
        use_effect_with_deps(
            move |(snapshot, ids, policy)| {
                let layout = DomLayout::new(&refs);
                let evaluation = evaluate(snapshot, ids, &layout, policy);
                dispatcher.dispatch(RevealAction::Apply {
                    snapshot: *snapshot,
                    targets: ids.clone(),
                    evaluation,
                });
                || ()
            },
            (snapshot, ids, policy),
        );
    }

    RevealHandle { refs, state }
}
