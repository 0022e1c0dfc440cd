#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod contact;
pub mod core;
pub mod cursor;
pub mod dom;
pub mod events;
pub mod frame;
pub mod menu;
pub mod particles;

/// Every mounted component. Dropping the app releases all listeners and
/// cancels both animation loops.
pub struct App {
    pub cursor: Option<cursor::CursorFollower>,
    pub particles: Option<particles::ParticleBackground>,
    pub menu: Option<menu::MobileMenu>,
    pub contact: Option<contact::ContactForm>,
    _scroll: Option<dom::EventListener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

// Components degrade independently: a failed mount is logged and skipped.
fn optional<T>(label: &str, res: anyhow::Result<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[app] {} not mounted: {:?}", label, e);
            None
        }
    }
}

fn mount_app(window: &web::Window, document: &web::Document) -> anyhow::Result<App> {
    let root = document
        .get_element_by_id(constants::APP_ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", constants::APP_ROOT_ID))?;
    root.set_inner_html(&core::markup::page());

    Ok(App {
        cursor: optional("cursor", cursor::CursorFollower::mount(document)),
        particles: optional("particles", particles::ParticleBackground::mount(document)).flatten(),
        menu: optional("menu", menu::MobileMenu::mount(document)),
        contact: optional("contact", contact::ContactForm::mount(document)),
        _scroll: optional("scroll", events::wire_scroll(window, document)),
    })
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    if APP.with(|slot| slot.borrow().is_some()) {
        log::info!("[app] already mounted");
        return Ok(());
    }
    let app = mount_app(&window, &document)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    log::info!("[app] mounted");
    Ok(())
}

/// Run `f` against the mounted app, if any.
pub fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow().as_ref().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hersi-archive-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Render and mount synchronously. A no-op while already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Unmount every component, removing listeners and cancelling frame requests.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("[app] torn down");
    }
}
