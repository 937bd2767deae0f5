use log::trace;

use super::layout::{Layout, TargetId};
use super::scroll::ScrollState;

/// A length that is either fixed or proportional to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    Pixels(f64),
    Viewports(f64),
}

impl Extent {
    pub fn resolve(&self, viewport_height: u32) -> f64 {
        match *self {
            Extent::Pixels(px) => px,
            Extent::Viewports(factor) => factor * viewport_height as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPolicy {
    /// Revealed once the scroll offset comes within `margin_px` of the
    /// target's vertical center. `line` moves the compared offset down from
    /// the viewport's top edge, e.g. `Viewports(0.5)` for its center.
    AbsoluteOffset { margin_px: f64, line: Extent },
    /// One progress value through a section drives a sequential reveal: the
    /// target at index `i` of `n` shows up as progress passes `(i + 1) / n`,
    /// `epsilon` early.
    FractionalProgress {
        start: Extent,
        span: Extent,
        epsilon: f64,
    },
}

impl RevealPolicy {
    /// `scroll_offset >= target_center - margin_px`, measured at the top edge.
    pub fn absolute(margin_px: f64) -> Self {
        RevealPolicy::AbsoluteOffset {
            margin_px,
            line: Extent::Pixels(0.0),
        }
    }

    /// Moves the absolute policy's reading line; other policies are returned
    /// unchanged.
    pub fn read_at(self, line: Extent) -> Self {
        match self {
            RevealPolicy::AbsoluteOffset { margin_px, .. } => {
                RevealPolicy::AbsoluteOffset { margin_px, line }
            }
            other => other,
        }
    }
}

/// Result of one evaluation pass, all taken from a single snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub flags: Vec<bool>,
    pub progress: Option<f64>,
}

/// How far the scroll offset has advanced through a section, in `[0, 1]`.
///
/// `None` for a degenerate section (span not positive), which includes any
/// viewport-relative span before the page is laid out.
pub fn progress(snapshot: &ScrollState, start: Extent, span: Extent) -> Option<f64> {
    let span = span.resolve(snapshot.viewport_height);
    if span.is_nan() || span <= 0.0 {
        return None;
    }
    let start = start.resolve(snapshot.viewport_height);
    Some(((snapshot.offset as f64 - start) / span).clamp(0.0, 1.0))
}

/// Lead-in point of the target at `index` out of `count`.
pub fn lead_in(index: usize, count: usize, epsilon: f64) -> f64 {
    (index + 1) as f64 / count as f64 - epsilon
}

/// Progress has to move past a target's lead-in point to reveal it; the end
/// of the section reveals everything regardless of epsilon. Nothing shows
/// before the section starts, even when epsilon pushes a lead-in below zero.
fn passes_lead_in(progress: f64, index: usize, count: usize, epsilon: f64) -> bool {
    progress > 0.0 && (progress >= 1.0 || progress > lead_in(index, count, epsilon))
}

pub fn evaluate<L>(
    snapshot: &ScrollState,
    targets: &[TargetId],
    layout: &L,
    policy: &RevealPolicy,
) -> Evaluation
where
    L: Layout + ?Sized,
{
    let count = targets.len();
    if !snapshot.is_laid_out() {
        return Evaluation {
            flags: vec![false; count],
            progress: None,
        };
    }

    match *policy {
        RevealPolicy::AbsoluteOffset { margin_px, line } => {
            let scroll = snapshot.offset as f64 + line.resolve(snapshot.viewport_height);
            let flags = targets
                .iter()
                .map(|&id| match layout.measure(id) {
                    Ok(m) => scroll >= m.center() - margin_px,
                    Err(e) => {
                        trace!("Skipping reveal: {}", e);
                        false
                    }
                })
                .collect();
            Evaluation { flags, progress: None }
        }
        RevealPolicy::FractionalProgress { start, span, epsilon } => {
            let progress = progress(snapshot, start, span);
            let flags = match progress {
                Some(p) => (0..count).map(|i| passes_lead_in(p, i, count, epsilon)).collect(),
                None => vec![false; count],
            };
            Evaluation { flags, progress }
        }
    }
}
