//! Which navigation link is highlighted for the current scroll position.

use super::constants::NAV_ACTIVE_OFFSET_PX;
use super::sections::Section;
use super::viewport::LayoutQuery;

/// The last nav section whose top is at or above `scroll_y + 120px`.
///
/// Sections that are not mounted are ignored.
pub fn active_section(scroll_y: f64, layout: &impl LayoutQuery) -> Option<Section> {
    Section::NAV
        .into_iter()
        .filter_map(|s| layout.element_box(s.id()).map(|b| (s, b.top)))
        .filter(|(_, top)| scroll_y + NAV_ACTIVE_OFFSET_PX >= *top)
        .map(|(s, _)| s)
        .last()
}
