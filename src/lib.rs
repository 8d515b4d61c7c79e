//! Single-page site for an interim-management consultancy.
//!
//! `core`, `content` and `pages` are plain Rust and build everywhere; the
//! DOM wiring below them only exists on wasm32.

pub mod constants;
pub mod content;
pub mod core;
pub mod pages;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod router;
#[cfg(target_arch = "wasm32")]
mod vcard_export;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{Route, Section};
    use crate::router::Site;
    use crate::{events, overlay, vcard_export};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("interim-site starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let site = Rc::new(RefCell::new(Site::new(window.clone(), document.clone())));
        let route = Route::from_path(&site.borrow().current_path());

        if route.animates() {
            overlay::mount(&document);
        }
        site.borrow_mut().render(route)?;

        // Deep links such as `/#prozess` land on their section.
        let hash = window.location().hash().unwrap_or_default();
        if let Some(section) = Section::from_id(hash.trim_start_matches('#')) {
            site.borrow_mut().scroll_to_section(section)?;
        }

        events::wire_link_clicks(&document, site.clone());
        events::wire_popstate(&window, site);

        if route == Route::Kontakt && vcard_export::requested(&window) {
            spawn_local(vcard_export::run(window, document));
        }
        Ok(())
    }
}
