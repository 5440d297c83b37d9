//! Element factory dispatching model records to formulations.

use frame2d_model::{Element as ElementRecord, ElementKind};

use super::{Bar2D, Element, Rod2D};

/// A concrete line element formulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineElement {
    Rod(Rod2D),
    Bar(Bar2D),
}

impl LineElement {
    /// Build the formulation matching a model record.
    pub fn from_record(record: &ElementRecord) -> Self {
        match record.kind {
            ElementKind::Rod => LineElement::Rod(Rod2D::new(record.id)),
            ElementKind::Bar {
                release_a,
                release_b,
            } => LineElement::Bar(Bar2D::with_releases(record.id, release_a, release_b)),
        }
    }

    /// The formulation behind the element interface.
    pub fn as_dyn(&self) -> &dyn Element {
        match self {
            LineElement::Rod(rod) => rod,
            LineElement::Bar(bar) => bar,
        }
    }
}
