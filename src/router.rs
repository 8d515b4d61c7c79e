//! Route rendering and the lifetime of the animated home page.

use crate::constants::APP_ROOT_ID;
use crate::core::{Route, Section};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::overlay;
use crate::pages;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything mounted for `/`. Dropping it tears the page down.
pub struct HomeRuntime {
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
}

impl HomeRuntime {
    pub fn mount(window: web::Window, document: web::Document) -> Self {
        let ctx = Rc::new(RefCell::new(FrameContext::mount(window, document)));
        let frame_loop = frame::start_loop(ctx.clone());
        if frame_loop.is_none() {
            let ctx_hook = ctx.clone();
            ctx.borrow_mut().driver.degrade(Box::new(move || {
                if let Ok(mut c) = ctx_hook.try_borrow_mut() {
                    c.frame();
                }
            }));
            // Draw once so sections start in their scroll-derived state; the
            // intro overlay cannot animate without frames.
            let mut c = ctx.borrow_mut();
            overlay::remove(&c.document);
            c.frame();
            drop(c);
        }
        Self { ctx, frame_loop }
    }

    pub fn scroll_to_section(&self, section: Section) {
        self.ctx.borrow().scroll_to_section(section);
    }

    pub fn scroll_to_top(&self) {
        self.ctx.borrow().scroll_to_top();
    }

    pub fn dispose(&mut self) {
        if let Some(l) = self.frame_loop.take() {
            l.dispose();
        }
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.teardown();
        }
    }
}

impl Drop for HomeRuntime {
    fn drop(&mut self) {
        self.dispose();
    }
}

pub struct Site {
    window: web::Window,
    document: web::Document,
    route: Route,
    home: Option<HomeRuntime>,
}

impl Site {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            route: Route::NotFound,
            home: None,
        }
    }

    #[inline]
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_else(|_| "/".to_owned())
    }

    /// Renders `route`, pushing a history entry when `push` is set.
    pub fn navigate(&mut self, route: Route, push: bool) -> anyhow::Result<()> {
        if push {
            self.window
                .history()
                .map_err(|e| anyhow!("{:?}", e))?
                .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        self.render(route)
    }

    pub fn render(&mut self, route: Route) -> anyhow::Result<()> {
        // Tracks must be gone before their elements are replaced.
        if let Some(mut home) = self.home.take() {
            home.dispose();
        }
        let root = self
            .document
            .get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| anyhow!("missing #{}", APP_ROOT_ID))?;
        root.set_inner_html(&pages::render(route));
        self.document.set_title(route.title());
        self.route = route;
        log::info!("[route] {}", route.path());

        if route.animates() {
            self.home = Some(HomeRuntime::mount(self.window.clone(), self.document.clone()));
        } else {
            self.window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        Ok(())
    }

    pub fn scroll_to_section(&mut self, section: Section) -> anyhow::Result<()> {
        if self.route != Route::Home {
            self.navigate(Route::Home, true)?;
        }
        if let Some(home) = &self.home {
            home.scroll_to_section(section);
        }
        Ok(())
    }

    pub fn scroll_to_top(&mut self) -> anyhow::Result<()> {
        if self.route != Route::Home {
            return self.navigate(Route::Home, true);
        }
        if let Some(home) = &self.home {
            home.scroll_to_top();
        }
        Ok(())
    }
}
