//! Wheel smoothing and scroll/resize bookkeeping for the home page.
//!
//! The driver owns its listeners and removes them in [`ScrollDriver::dispose`];
//! nothing here is leaked with `forget`, since the home page is mounted and
//! torn down on every route change.

use crate::core::{SmoothScroll, SmoothScrollConfig};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LINE_HEIGHT_PX: f64 = 16.0;

type FrameHook = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

/// A registered DOM listener, removed again on drop of the driver.
struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    fn remove(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DriverMode {
    /// Wheel input is eased and written back every animation frame.
    Smooth,
    /// No frame loop available: raw scroll position, frames run on `scroll`.
    Passthrough,
}

pub struct ScrollDriver {
    window: web::Window,
    smooth: Rc<RefCell<SmoothScroll>>,
    mode: Rc<Cell<DriverMode>>,
    layout_dirty: Rc<Cell<bool>>,
    frame_hook: FrameHook,
    listeners: Vec<Listener>,
    alive: bool,
}

impl ScrollDriver {
    pub fn install(window: web::Window, config: SmoothScrollConfig, limit: f64) -> Self {
        let smooth = Rc::new(RefCell::new(SmoothScroll::new(
            config,
            dom::scroll_y(&window),
            limit,
        )));
        let mut driver = Self {
            window,
            smooth,
            mode: Rc::new(Cell::new(DriverMode::Smooth)),
            layout_dirty: Rc::new(Cell::new(true)),
            frame_hook: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
            alive: true,
        };
        driver.wire_wheel();
        driver.wire_scroll();
        driver.wire_resize();
        log::info!("[scroll] driver installed, limit={:.0}px", limit);
        driver
    }

    fn listen(&mut self, kind: &'static str, passive: bool, handler: impl FnMut(web::Event) + 'static) {
        let target: web::EventTarget = self.window.clone().into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[scroll] could not listen for {}: {:?}", kind, e);
            return;
        }
        self.listeners.push(Listener {
            target,
            kind,
            closure,
        });
    }

    fn wire_wheel(&mut self) {
        let smooth = self.smooth.clone();
        let mode = self.mode.clone();
        let window = self.window.clone();
        self.listen("wheel", false, move |ev: web::Event| {
            if mode.get() != DriverMode::Smooth {
                return;
            }
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            // pinch-zoom arrives as ctrl+wheel
            if wheel.ctrl_key() {
                return;
            }
            let scale = match wheel.delta_mode() {
                web::WheelEvent::DOM_DELTA_LINE => LINE_HEIGHT_PX,
                web::WheelEvent::DOM_DELTA_PAGE => dom::viewport(&window).height,
                _ => 1.0,
            };
            ev.prevent_default();
            smooth.borrow_mut().scroll_by(wheel.delta_y() * scale);
        });
    }

    fn wire_scroll(&mut self) {
        let smooth = self.smooth.clone();
        let mode = self.mode.clone();
        let hook = self.frame_hook.clone();
        let window = self.window.clone();
        self.listen("scroll", true, move |_ev: web::Event| {
            smooth.borrow_mut().sync(dom::scroll_y(&window));
            if mode.get() == DriverMode::Passthrough {
                if let Ok(mut slot) = hook.try_borrow_mut() {
                    if let Some(run_frame) = slot.as_mut() {
                        run_frame();
                    }
                }
            }
        });
    }

    fn wire_resize(&mut self) {
        let dirty = self.layout_dirty.clone();
        self.listen("resize", true, move |_ev: web::Event| dirty.set(true));
        let dirty = self.layout_dirty.clone();
        self.listen("orientationchange", true, move |_ev: web::Event| dirty.set(true));
    }

    /// Switches to raw scrolling and runs `run_frame` on every scroll event.
    pub fn degrade(&mut self, run_frame: Box<dyn FnMut()>) {
        log::warn!("[scroll] no animation frames, falling back to native scrolling");
        self.smooth.borrow_mut().stop();
        self.mode.set(DriverMode::Passthrough);
        *self.frame_hook.borrow_mut() = Some(run_frame);
    }

    /// True once after a resize or orientation change.
    #[inline]
    pub fn take_layout_dirty(&self) -> bool {
        self.layout_dirty.replace(false)
    }

    pub fn set_limit(&self, limit: f64) {
        self.smooth.borrow_mut().set_limit(limit);
    }

    /// Eases toward `offset` (nav links, scroll-to-top).
    pub fn scroll_to(&self, offset: f64) {
        match self.mode.get() {
            DriverMode::Smooth => self.smooth.borrow_mut().scroll_to(offset),
            DriverMode::Passthrough => self.window.scroll_to_with_x_and_y(0.0, offset),
        }
    }

    /// Advances the eased position and writes it to the window. Returns the
    /// effective scroll offset for this frame.
    pub fn tick(&self, dt_sec: f32) -> f64 {
        if !self.alive || self.mode.get() == DriverMode::Passthrough {
            return dom::scroll_y(&self.window);
        }
        let mut smooth = self.smooth.borrow_mut();
        if !smooth.is_animating() {
            return smooth.position();
        }
        let y = smooth.advance(dt_sec);
        self.window.scroll_to_with_x_and_y(0.0, y);
        y
    }

    /// Removes every listener and drops the frame hook. Idempotent.
    pub fn dispose(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        self.frame_hook.borrow_mut().take();
        self.smooth.borrow_mut().stop();
        log::info!("[scroll] driver disposed");
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}
