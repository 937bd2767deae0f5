#[cfg(test)]
use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::NodeRef;

/// Stable identity of one tracked element, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub usize);

/// Page-relative vertical box of a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub offset: f64,
    pub height: f64,
}

impl Measurement {
    pub fn center(&self) -> f64 {
        self.offset + self.height / 2.0
    }
}

/// Why a target could not be measured. None of these are fatal: the
/// evaluator treats every variant as "not revealed".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    #[error("target {0:?} was never registered")]
    Unregistered(TargetId),

    #[error("target {0:?} is not mounted")]
    NotMounted(TargetId),

    #[error("target {0:?} has no layout box yet")]
    NoLayoutBox(TargetId),
}

pub trait Layout {
    fn measure(&self, id: TargetId) -> Result<Measurement, MeasureError>;
}

/// Measures mounted elements through their `NodeRef`s.
pub struct DomLayout<'a> {
    refs: &'a [(TargetId, NodeRef)],
}

impl<'a> DomLayout<'a> {
    pub fn new(refs: &'a [(TargetId, NodeRef)]) -> Self {
        Self { refs }
    }
}

/// Sums `offsetTop` up the `offsetParent` chain, which gives the document
/// offset without reading the scroll position.
fn page_offset(element: &HtmlElement) -> f64 {
    let mut offset = element.offset_top() as f64;
    let mut parent = element.offset_parent();
    while let Some(el) = parent {
        match el.dyn_into::<HtmlElement>() {
            Ok(html) => {
                offset += html.offset_top() as f64;
                parent = html.offset_parent();
            }
            Err(_) => break,
        }
    }
    offset
}

impl Layout for DomLayout<'_> {
    fn measure(&self, id: TargetId) -> Result<Measurement, MeasureError> {
        let node_ref = self
            .refs
            .iter()
            .find(|(target, _)| *target == id)
            .map(|(_, node_ref)| node_ref)
            .ok_or(MeasureError::Unregistered(id))?;

        let element = node_ref
            .cast::<HtmlElement>()
            .ok_or(MeasureError::NotMounted(id))?;

        let height = element.offset_height() as f64;
        if height <= 0.0 {
            return Err(MeasureError::NoLayoutBox(id));
        }

        Ok(Measurement {
            offset: page_offset(&element),
            height,
        })
    }
}

/// In-memory layout, for driving the evaluator without a document.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct FixedLayout {
    boxes: HashMap<TargetId, Measurement>,
}

#[cfg(test)]
impl FixedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: TargetId, offset: f64, height: f64) -> Self {
        self.boxes.insert(id, Measurement { offset, height });
        self
    }
}

#[cfg(test)]
impl Layout for FixedLayout {
    fn measure(&self, id: TargetId) -> Result<Measurement, MeasureError> {
        match self.boxes.get(&id) {
            Some(m) if m.height > 0.0 => Ok(*m),
            Some(_) => Err(MeasureError::NoLayoutBox(id)),
            None => Err(MeasureError::NotMounted(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_halfway_down_the_box() {
        let m = Measurement { offset: 1000.0, height: 400.0 };
        assert_eq!(m.center(), 1200.0);
    }

    #[test]
    fn fixed_layout_reports_missing_and_collapsed_boxes() {
        let layout = FixedLayout::new()
            .with(TargetId(0), 100.0, 50.0)
            .with(TargetId(1), 200.0, 0.0);

        assert_eq!(layout.measure(TargetId(0)).map(|m| m.offset), Ok(100.0));
        assert_eq!(layout.measure(TargetId(1)), Err(MeasureError::NoLayoutBox(TargetId(1))));
        assert_eq!(layout.measure(TargetId(7)), Err(MeasureError::NotMounted(TargetId(7))));
    }

    #[test]
    fn dom_layout_rejects_unknown_targets_before_touching_the_dom() {
        let refs = vec![(TargetId(0), NodeRef::default())];
        let layout = DomLayout::new(&refs);
        assert_eq!(layout.measure(TargetId(3)), Err(MeasureError::Unregistered(TargetId(3))));
        assert_eq!(layout.measure(TargetId(0)), Err(MeasureError::NotMounted(TargetId(0))));
    }
}
