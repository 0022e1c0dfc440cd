use crate::constants::{MENU_LABEL_CLOSED, MENU_LABEL_OPEN};
use crate::core::markup::{CLASS_HIDDEN, CLASS_MOBILE_LINK, ID_MENU_BUTTON, ID_MOBILE_MENU};
use crate::core::MenuState;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_MOBILE_MENU) {
        _ = el.class_list().remove_1(CLASS_HIDDEN);
    }
    set_button_state(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_MOBILE_MENU) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
    }
    set_button_state(document, false);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(ID_MOBILE_MENU)
        .map(|el| el.class_list().contains(CLASS_HIDDEN))
        .unwrap_or(true)
}

fn set_button_state(document: &web::Document, open: bool) {
    if let Some(btn) = document.get_element_by_id(ID_MENU_BUTTON) {
        _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
        btn.set_text_content(Some(if open {
            MENU_LABEL_OPEN
        } else {
            MENU_LABEL_CLOSED
        }));
    }
}

/// Mobile navigation drawer: the toggle button flips it, any link inside closes it.
pub struct MobileMenu {
    state: Rc<RefCell<MenuState>>,
    _listeners: Vec<EventListener>,
}

impl MobileMenu {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(MenuState::default()));
        hide(document);

        let mut listeners = Vec::new();
        let state_toggle = state.clone();
        let doc_toggle = document.clone();
        listeners.push(dom::add_click_listener(document, ID_MENU_BUTTON, move || {
            if state_toggle.borrow_mut().toggle() {
                show(&doc_toggle);
            } else {
                hide(&doc_toggle);
            }
        })?);

        let links = document
            .query_selector_all(&format!("#{} .{}", ID_MOBILE_MENU, CLASS_MOBILE_LINK))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        for i in 0..links.length() {
            let Some(link) = links.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let state_link = state.clone();
            let doc_link = document.clone();
            listeners.push(EventListener::new(&link, "click", move |_| {
                state_link.borrow_mut().close();
                hide(&doc_link);
            })?);
        }

        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }
}
