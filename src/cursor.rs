use crate::core::cursor::centered_scale_transform;
use crate::core::markup::{ID_CURSOR_DOT, ID_CURSOR_RING};
use crate::core::CursorState;
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::AnimationLoop;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Two-layer custom cursor: a dot pinned to the pointer and a ring that trails it.
///
/// Dropping the follower stops its frame loop and unregisters both pointer
/// listeners.
pub struct CursorFollower {
    state: Rc<RefCell<CursorState>>,
    _listeners: Vec<EventListener>,
    frame_loop: AnimationLoop,
}

impl CursorFollower {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let dot: web::HtmlElement = dom::element_by_id(document, ID_CURSOR_DOT)?;
        let ring: web::HtmlElement = dom::element_by_id(document, ID_CURSOR_RING)?;

        let state = Rc::new(RefCell::new(CursorState::new()));
        let listeners = events::wire_cursor_handlers(&window, &state)?;

        let state_tick = state.clone();
        let frame_loop = AnimationLoop::start(move || {
            let mut s = state_tick.borrow_mut();
            s.tick();
            apply_layers(&dot, &ring, &s);
        })?;
        log::info!("[cursor] mounted");

        Ok(Self {
            state,
            _listeners: listeners,
            frame_loop,
        })
    }

    pub fn snapshot(&self) -> CursorState {
        self.state.borrow().clone()
    }

    pub fn shared_state(&self) -> Rc<RefCell<CursorState>> {
        self.state.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop.is_running()
    }
}

impl Drop for CursorFollower {
    fn drop(&mut self) {
        log::info!("[cursor] unmounted");
    }
}

fn apply_layers(dot: &web::HtmlElement, ring: &web::HtmlElement, state: &CursorState) {
    let style = state.style();
    let pointer = state.pointer();
    let trail = state.trail();

    dom::set_style(dot, "left", &format!("{}px", pointer.x));
    dom::set_style(dot, "top", &format!("{}px", pointer.y));
    dom::set_style(dot, "transform", &centered_scale_transform(style.dot_scale));

    dom::set_style(ring, "left", &format!("{}px", trail.x));
    dom::set_style(ring, "top", &format!("{}px", trail.y));
    dom::set_style(ring, "transform", &centered_scale_transform(style.ring_scale));
    dom::set_style(ring, "opacity", &style.ring_opacity.to_string());
}
