pub mod navigation;
pub mod scroll;

pub use navigation::{wire_link_clicks, wire_popstate};
pub use scroll::ScrollDriver;
