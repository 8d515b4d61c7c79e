use crate::constants::{LAYOUT_REFRESH_SEC, NAV_ACTIVE_CLASS, NAV_ID};
use crate::core::constants::MAX_FRAME_DT_SEC;
use crate::core::intro::intro_frame;
use crate::core::nav::active_section;
use crate::core::{
    mount_home, unmount_home, ElementId, HomeTracks, LayoutQuery, LogoMachine, Section,
    Sequencer, SmoothScrollConfig, LOGO_ID,
};
use crate::dom::{self, DomLayout};
use crate::events::ScrollDriver;
use crate::overlay;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,

    pub sequencer: Sequencer,
    pub tracks: HomeTracks,
    pub logo: LogoMachine,
    pub driver: ScrollDriver,
    pub layout: DomLayout,

    pub last_instant: Instant,
    pub intro_started: Instant,
    pub since_measure: f32,
    pub nav_active: Option<Section>,
}

/// Ids whose geometry the track tables depend on.
fn measured_ids() -> Vec<ElementId> {
    Section::ALL.iter().map(|s| s.id()).collect()
}

impl FrameContext {
    pub fn mount(window: web::Window, document: web::Document) -> Self {
        let mut sequencer = Sequencer::new();
        let tracks = mount_home(&mut sequencer);
        let mut layout = DomLayout::new(window.clone());
        layout.measure(&document, &measured_ids());
        let limit = scroll_limit(&window, &document);
        let driver = ScrollDriver::install(window.clone(), SmoothScrollConfig::default(), limit);
        log::info!("[scroll] home mounted with {} tracks", sequencer.len());
        let now = Instant::now();
        Self {
            window,
            document,
            sequencer,
            tracks,
            logo: LogoMachine::new(),
            driver,
            layout,
            last_instant: now,
            intro_started: now,
            since_measure: 0.0,
            nav_active: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.since_measure += dt_sec;
        if self.driver.take_layout_dirty() || self.since_measure >= LAYOUT_REFRESH_SEC {
            self.layout.measure(&self.document, &measured_ids());
            self.driver.set_limit(scroll_limit(&self.window, &self.document));
            self.since_measure = 0.0;
        } else {
            self.layout.refresh_viewport();
        }

        let scroll = self.driver.tick(dt_sec);
        let frame = self.sequencer.evaluate(scroll, &self.layout, dt_sec);
        for (target, patch) in &frame.styles {
            if let Some(el) = dom::html_element(&self.document, target) {
                dom::apply_patch(&el, patch);
            }
        }

        let logo_progress = self.tracks.logo.map(|id| self.sequencer.progress(id));
        self.logo.update(logo_progress);
        if let Some(el) = dom::html_element(&self.document, LOGO_ID) {
            let t = self.logo.transform();
            let style = el.style();
            _ = style.set_property("transform", &t.css_transform());
            _ = style.set_property("opacity", &format!("{:.4}", t.opacity));
        }

        self.update_nav(scroll);

        if overlay::is_mounted(&self.document) {
            let elapsed = (now - self.intro_started).as_secs_f32();
            overlay::apply(&self.document, &intro_frame(elapsed));
        }
    }

    fn update_nav(&mut self, scroll: f64) {
        let active = active_section(scroll, &self.layout);
        if active == self.nav_active {
            return;
        }
        set_nav_highlight(&self.document, active);
        self.nav_active = active;
    }

    pub fn scroll_to_section(&self, section: Section) {
        if let Some(b) = self.layout.element_box(section.id()) {
            self.driver.scroll_to(b.top);
        }
    }

    pub fn scroll_to_top(&self) {
        self.driver.scroll_to(0.0);
    }

    /// Disposes tracks and listeners. Safe to call more than once.
    pub fn teardown(&mut self) {
        unmount_home(&mut self.sequencer);
        self.driver.dispose();
        set_nav_highlight(&self.document, None);
        overlay::remove(&self.document);
    }
}

fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    (dom::document_height(document) - dom::viewport(window).height).max(0.0)
}

/// Marks the nav link of `active` (or none) as current.
pub fn set_nav_highlight(document: &web::Document, active: Option<Section>) {
    let Some(nav) = document.get_element_by_id(NAV_ID) else {
        return;
    };
    for section in Section::NAV {
        let Ok(Some(link)) = nav.query_selector(&format!("[data-section=\"{}\"]", section.id()))
        else {
            continue;
        };
        if Some(section) == active {
            _ = link.class_list().add_1(NAV_ACTIVE_CLASS);
            _ = link.set_attribute("aria-current", "page");
        } else {
            _ = link.class_list().remove_1(NAV_ACTIVE_CLASS);
            _ = link.remove_attribute("aria-current");
        }
    }
}

/// Handle to a running `requestAnimationFrame` chain.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Stops the chain. A callback already queued sees the flag and returns
    /// without touching the page.
    pub fn dispose(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Starts the frame chain. Returns `None` when animation frames cannot be
/// scheduled; the caller then degrades to scroll-event driven frames.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> Option<FrameLoop> {
    let alive = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_next = tick.clone();
    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.frame();
        }
        if alive_tick.get() {
            raf_tick.set(request_frame(&tick_next));
        }
    }) as Box<dyn FnMut()>));

    let Some(first) = request_frame(&tick) else {
        tick.borrow_mut().take();
        return None;
    };
    raf_id.set(Some(first));
    Some(FrameLoop {
        alive,
        raf_id,
        tick,
    })
}
