use crate::constants::{INTRO_BLUR_ID, INTRO_OVERLAY_ID};
use crate::core::intro::IntroFrame;
use crate::pages;
use web_sys as web;

/// Appends the intro overlay to `<body>` unless it is already there.
pub fn mount(document: &web::Document) {
    if document.get_element_by_id(INTRO_OVERLAY_ID).is_some() {
        return;
    }
    if let Some(body) = document.body() {
        _ = body.insert_adjacent_html("beforeend", &pages::intro_overlay());
    }
}

#[inline]
pub fn is_mounted(document: &web::Document) -> bool {
    document.get_element_by_id(INTRO_OVERLAY_ID).is_some()
}

/// Writes one intro frame; removes the overlay once it is done.
pub fn apply(document: &web::Document, frame: &IntroFrame) {
    let Some(el) = document.get_element_by_id(INTRO_OVERLAY_ID) else {
        return;
    };
    if frame.done {
        el.remove();
        return;
    }
    let pointer = if frame.interactive { "auto" } else { "none" };
    _ = el.set_attribute(
        "style",
        &format!("opacity:{:.4};pointer-events:{pointer}", frame.opacity),
    );
    if let Some(blur) = document.get_element_by_id(INTRO_BLUR_ID) {
        _ = blur.set_attribute(
            "style",
            &format!("filter:blur({:.2}px);opacity:{:.4}", frame.blur_px, frame.opacity),
        );
    }
}

#[inline]
pub fn remove(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INTRO_OVERLAY_ID) {
        el.remove();
    }
}
