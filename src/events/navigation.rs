use crate::core::{Route, Section};
use crate::router::Site;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a click on an in-site link asks for.
enum LinkAction {
    Route(Route),
    Section(Section),
    Top,
}

fn link_action(anchor: &web::Element) -> Option<LinkAction> {
    if anchor.has_attribute("data-scroll-top") {
        return Some(LinkAction::Top);
    }
    if let Some(section) = anchor
        .get_attribute("data-section")
        .and_then(|id| Section::from_id(&id))
    {
        return Some(LinkAction::Section(section));
    }
    anchor
        .get_attribute("data-route")
        .map(|path| LinkAction::Route(Route::from_path(&path)))
}

fn handle_click(ev: &web::MouseEvent, site: &Rc<RefCell<Site>>) {
    // leave modified clicks (new tab, new window) to the browser
    if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
        return;
    }
    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
    else {
        return;
    };
    let Some(action) = link_action(&anchor) else {
        return;
    };
    ev.prevent_default();
    let Ok(mut site) = site.try_borrow_mut() else {
        return;
    };
    let result = match action {
        LinkAction::Top => site.scroll_to_top(),
        LinkAction::Section(section) => site.scroll_to_section(section),
        LinkAction::Route(route) if route == site.route() => Ok(()),
        LinkAction::Route(route) => site.navigate(route, true),
    };
    if let Err(e) = result {
        log::error!("[route] navigation failed: {:?}", e);
    }
}

pub fn wire_link_clicks(document: &web::Document, site: Rc<RefCell<Site>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handle_click(&ev, &site);
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_popstate(window: &web::Window, site: Rc<RefCell<Site>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Ok(mut site) = site.try_borrow_mut() else {
            return;
        };
        let route = Route::from_path(&site.current_path());
        if let Err(e) = site.render(route) {
            log::error!("[route] popstate render failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}
