//! Browser tests for mounting, hover detection, resize and teardown.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use hersi_archive_web::core::markup::{self, ID_CONTACT_STATUS, ID_MENU_BUTTON};
use hersi_archive_web::cursor::CursorFollower;
use hersi_archive_web::frame::AnimationLoop;
use hersi_archive_web::particles::ParticleBackground;
use hersi_archive_web::{dom, menu};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn render_page() -> web::Document {
    let document = dom::window_document().expect("document");
    let body = document.body().expect("body");
    body.set_inner_html(&markup::page());
    document
}

#[allow(deprecated)]
fn dispatch_bubbling(target: &web::EventTarget, name: &str) {
    let ev = web::Event::new(name).expect("event");
    ev.init_event_with_bubbles(name, true);
    target.dispatch_event(&ev).expect("dispatch");
}

// Resolves on the next requestAnimationFrame callback.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web::window()
            .expect("window")
            .request_animation_frame(&resolve)
            .expect("raf");
    });
    JsFuture::from(promise).await.expect("frame");
}

#[wasm_bindgen_test]
async fn animation_loop_stops_calling_back_once_stopped() {
    let frames = Rc::new(Cell::new(0u32));
    let frames_tick = frames.clone();
    let mut frame_loop = AnimationLoop::start(move || frames_tick.set(frames_tick.get() + 1))
        .expect("loop");
    assert!(frame_loop.is_running());
    for _ in 0..3 {
        next_frame().await;
    }
    assert!(frames.get() > 0);

    frame_loop.stop();
    assert!(!frame_loop.is_running());
    let after_stop = frames.get();
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(frames.get(), after_stop);
}

#[wasm_bindgen_test]
async fn dropping_animation_loop_cancels_pending_frame() {
    let frames = Rc::new(Cell::new(0u32));
    let frames_tick = frames.clone();
    let frame_loop = AnimationLoop::start(move || frames_tick.set(frames_tick.get() + 1))
        .expect("loop");
    drop(frame_loop);
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(frames.get(), 0);
}

#[wasm_bindgen_test]
fn particle_field_sizes_canvas_to_viewport() {
    let document = render_page();
    let window = web::window().expect("window");
    let bg = ParticleBackground::mount(&document)
        .expect("mount")
        .expect("canvas present");
    assert_eq!(bg.particle_count(), 60);
    assert_eq!(bg.surface_size(), dom::viewport_size(&window));
    assert!(bg.is_animating());
}

#[wasm_bindgen_test]
fn resize_event_resizes_surface_and_keeps_population() {
    let document = render_page();
    let window = web::window().expect("window");
    let bg = ParticleBackground::mount(&document)
        .expect("mount")
        .expect("canvas present");
    // Shrink the backing store behind the component's back, then fire resize
    let canvas: web::HtmlCanvasElement =
        dom::element_by_id(&document, markup::ID_PARTICLE_CANVAS).expect("canvas");
    canvas.set_width(1);
    canvas.set_height(1);
    dispatch_bubbling(&window, "resize");

    let (w, h) = dom::viewport_size(&window);
    assert_eq!(bg.surface_size(), (w, h));
    assert_eq!(bg.field_size(), (w as f32, h as f32));
    assert_eq!(bg.particle_count(), 60);
}

#[wasm_bindgen_test]
fn dropping_background_unsubscribes_from_resize() {
    let document = render_page();
    let window = web::window().expect("window");
    let bg = ParticleBackground::mount(&document)
        .expect("mount")
        .expect("canvas present");
    drop(bg);

    let canvas: web::HtmlCanvasElement =
        dom::element_by_id(&document, markup::ID_PARTICLE_CANVAS).expect("canvas");
    canvas.set_width(1);
    canvas.set_height(1);
    dispatch_bubbling(&window, "resize");
    assert_eq!((canvas.width(), canvas.height()), (1, 1));
}

#[wasm_bindgen_test]
fn missing_canvas_mounts_nothing() {
    let document = dom::window_document().expect("document");
    document.body().expect("body").set_inner_html("<p>static</p>");
    assert!(ParticleBackground::mount(&document).expect("mount").is_none());
}

#[wasm_bindgen_test]
fn hovering_links_and_marked_elements_enlarges_cursor() {
    let document = render_page();
    let cursor = CursorFollower::mount(&document).expect("cursor");

    let link = document
        .query_selector("a.btn-primary")
        .expect("query")
        .expect("hero link");
    dispatch_bubbling(&link, "mouseover");
    assert!(cursor.snapshot().hovering());

    let para = document
        .query_selector(".hero-quote")
        .expect("query")
        .expect("hero quote");
    dispatch_bubbling(&para, "mouseover");
    assert!(!cursor.snapshot().hovering());

    let card = document
        .query_selector(".timeline-card")
        .expect("query")
        .expect("timeline card");
    dispatch_bubbling(&card, "mouseover");
    assert!(cursor.snapshot().hovering());
}

#[wasm_bindgen_test]
fn dropping_cursor_removes_its_listeners() {
    let document = render_page();
    let cursor = CursorFollower::mount(&document).expect("cursor");
    let state = cursor.shared_state();
    assert!(cursor.is_animating());
    drop(cursor);

    let button = document
        .get_element_by_id(ID_MENU_BUTTON)
        .expect("menu button");
    dispatch_bubbling(&button, "mouseover");
    assert!(!state.borrow().hovering());
}

#[wasm_bindgen_test]
fn menu_button_toggles_drawer() {
    let document = render_page();
    let mobile = menu::MobileMenu::mount(&document).expect("menu");
    assert!(menu::is_hidden(&document));

    let button: web::HtmlElement = dom::element_by_id(&document, ID_MENU_BUTTON).expect("button");
    button.click();
    assert!(mobile.is_open());
    assert!(!menu::is_hidden(&document));

    let link: web::HtmlElement = document
        .query_selector(".mobile-link")
        .expect("query")
        .expect("mobile link")
        .dyn_into()
        .expect("html element");
    link.click();
    assert!(!mobile.is_open());
    assert!(menu::is_hidden(&document));
}

#[wasm_bindgen_test]
fn contact_form_reports_validation_errors() {
    let document = render_page();
    let form = hersi_archive_web::contact::ContactForm::mount(&document).expect("form");
    let submit: web::HtmlElement =
        dom::element_by_id(&document, markup::ID_CONTACT_SUBMIT).expect("submit");
    submit.click();

    let status = document
        .get_element_by_id(ID_CONTACT_STATUS)
        .expect("status");
    assert_eq!(
        status.text_content().as_deref(),
        Some("Please tell us your name.")
    );
    assert_eq!(form.accepted(), 0);
}

#[wasm_bindgen_test]
fn app_mount_and_teardown_cycle() {
    let document = dom::window_document().expect("document");
    let body = document.body().expect("body");
    body.set_inner_html("<div id=\"app-root\"></div>");

    hersi_archive_web::mount().expect("mount");
    assert_eq!(
        hersi_archive_web::with_app(|app| app.cursor.is_some()),
        Some(true)
    );
    hersi_archive_web::teardown();
    assert!(hersi_archive_web::with_app(|_| ()).is_none());

    // Remount after teardown works
    hersi_archive_web::mount().expect("remount");
    assert!(hersi_archive_web::with_app(|app| app.particles.is_some()).unwrap_or(false));
    hersi_archive_web::teardown();
}
