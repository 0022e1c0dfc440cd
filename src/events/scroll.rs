use crate::constants::EVENT_SCROLL;
use crate::core::markup::{CLASS_NAV_SCROLLED, ID_NAVBAR, ID_PROGRESS_FILL};
use crate::core::{is_scrolled, scroll_progress};
use crate::dom::{self, EventListener};
use web_sys as web;

/// Update the progress bar width and the navbar backdrop from the current scroll offset.
pub fn apply_scroll_state(window: &web::Window, document: &web::Document) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_h = dom::viewport_size(window).1 as f64;

    if let Ok(fill) = dom::element_by_id::<web::HtmlElement>(document, ID_PROGRESS_FILL) {
        let pct = scroll_progress(scroll_y, scroll_height, viewport_h);
        dom::set_style(&fill, "width", &format!("{:.2}%", pct));
    }
    if let Some(nav) = document.get_element_by_id(ID_NAVBAR) {
        _ = nav
            .class_list()
            .toggle_with_force(CLASS_NAV_SCROLLED, is_scrolled(scroll_y));
    }
}

pub fn wire_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<EventListener> {
    apply_scroll_state(window, document);
    let window_c = window.clone();
    let document_c = document.clone();
    EventListener::new(window, EVENT_SCROLL, move |_| {
        apply_scroll_state(&window_c, &document_c);
    })
}
