use crate::core::{ElementBox, ElementId, LayoutQuery, PageLayout, StylePatch, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport size, read fresh on every call.
pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Writes the set properties of `patch` onto `el`'s inline style.
pub fn apply_patch(el: &web::HtmlElement, patch: &StylePatch) {
    let style = el.style();
    if let Some(opacity) = patch.opacity() {
        _ = style.set_property("opacity", &format!("{opacity:.4}"));
    }
    if let Some(transform) = patch.css_transform() {
        _ = style.set_property("transform", &transform);
    }
    if let Some(blur) = patch.get(crate::core::Property::Blur) {
        _ = style.set_property("filter", &format!("blur({blur:.2}px)"));
    }
}

/// Document-relative geometry of the tracked elements, measured once and
/// reused until the layout is marked dirty. The viewport is refreshed once
/// per frame with [`DomLayout::refresh_viewport`].
pub struct DomLayout {
    window: web::Window,
    measured: PageLayout,
}

impl DomLayout {
    pub fn new(window: web::Window) -> Self {
        let viewport = viewport(&window);
        Self {
            window,
            measured: PageLayout::new(viewport),
        }
    }

    pub fn measure(&mut self, document: &web::Document, ids: &[ElementId]) {
        let scroll = scroll_y(&self.window);
        let mut layout = PageLayout::new(viewport(&self.window));
        for &id in ids {
            if let Some(el) = document.get_element_by_id(id) {
                let rect = el.get_bounding_client_rect();
                layout = layout.with(id, rect.top() + scroll, rect.height());
            }
        }
        self.measured = layout;
    }

    pub fn refresh_viewport(&mut self) {
        self.measured.viewport = viewport(&self.window);
    }
}

impl LayoutQuery for DomLayout {
    fn viewport(&self) -> Viewport {
        self.measured.viewport
    }

    fn element_box(&self, id: ElementId) -> Option<ElementBox> {
        self.measured.element_box(id)
    }
}
