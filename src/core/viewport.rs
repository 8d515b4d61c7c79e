//! Viewport and element geometry as seen by the scroll sequencer.
//!
//! Nothing here is cached across frames: the web layer builds a fresh
//! [`Viewport`] at the start of every layout decision and hands it down, so
//! rotation and resizing are picked up on the next frame.

use super::constants::MOBILE_MAX_WIDTH_PX;

/// Identifier of a DOM element, matching its `id` attribute.
pub type ElementId = &'static str;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_MAX_WIDTH_PX
    }
}

/// Document-relative vertical box of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    /// Distance from the document origin to the element's top edge.
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Source of geometry for track resolution.
///
/// The web layer measures the live DOM; tests use [`PageLayout`].
pub trait LayoutQuery {
    fn viewport(&self) -> Viewport;
    /// `None` when the element is not mounted.
    fn element_box(&self, id: ElementId) -> Option<ElementBox>;
}

/// A static page layout: a viewport plus a list of measured elements.
#[derive(Clone, Debug)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub elements: Vec<(ElementId, ElementBox)>,
}

impl PageLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    pub fn with(mut self, id: ElementId, top: f64, height: f64) -> Self {
        self.elements.push((id, ElementBox::new(top, height)));
        self
    }

    /// Stacks the given elements top to bottom, each `heights_vh` viewport
    /// heights tall, starting at the document origin.
    pub fn stacked(viewport: Viewport, sections: &[(ElementId, f64)]) -> Self {
        let mut top = 0.0;
        let mut layout = Self::new(viewport);
        for &(id, heights_vh) in sections {
            let height = heights_vh * viewport.height;
            layout.elements.push((id, ElementBox::new(top, height)));
            top += height;
        }
        layout
    }

    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|(_, b)| b.bottom())
            .fold(0.0, f64::max)
    }

    /// Largest scroll offset the document allows.
    pub fn scroll_limit(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    pub fn remove(&mut self, id: ElementId) {
        self.elements.retain(|(e, _)| *e != id);
    }
}

impl LayoutQuery for PageLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_box(&self, id: ElementId) -> Option<ElementBox> {
        self.elements
            .iter()
            .find(|(e, _)| *e == id)
            .map(|(_, b)| *b)
    }
}
