use crate::constants::{EVENT_MOUSEMOVE, EVENT_MOUSEOVER};
use crate::core::{is_interactive, CursorState, ElementInfo, INTERACTIVE_MARKER};
use crate::dom::EventListener;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hover target followed by its ancestors, nearest first.
pub type TargetChain = SmallVec<[ElementInfo; 8]>;

/// Describe the event target and its ancestors for hover classification.
/// Only the target's own marker class matters, so ancestors skip the class lookup.
pub fn target_chain(ev: &web::Event) -> TargetChain {
    let mut chain = TargetChain::new();
    let mut current = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok());
    if let Some(el) = &current {
        chain.push(ElementInfo::new(
            el.tag_name(),
            el.class_list().contains(INTERACTIVE_MARKER),
        ));
        current = el.parent_element();
    }
    while let Some(el) = current {
        chain.push(ElementInfo::new(el.tag_name(), false));
        current = el.parent_element();
    }
    chain
}

pub fn wire_cursor_handlers(
    window: &web::Window,
    state: &Rc<RefCell<CursorState>>,
) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_mousemove(window, state.clone())?,
        wire_mouseover(window, state.clone())?,
    ])
}

fn wire_mousemove(
    window: &web::Window,
    state: Rc<RefCell<CursorState>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, EVENT_MOUSEMOVE, move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            state
                .borrow_mut()
                .on_pointer_move(me.client_x() as f32, me.client_y() as f32);
        }
    })
}

fn wire_mouseover(
    window: &web::Window,
    state: Rc<RefCell<CursorState>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, EVENT_MOUSEOVER, move |ev: web::Event| {
        let chain = target_chain(&ev);
        let interactive = is_interactive(&chain);
        let mut s = state.borrow_mut();
        if s.hovering() != interactive {
            log::debug!("[cursor] hover {}", interactive);
        }
        s.on_pointer_over(interactive);
    })
}
