use crate::constants::EVENT_RESIZE;
use crate::core::markup::ID_PARTICLE_CANVAS;
use crate::core::{Particle, ParticleConfig, ParticleField};
use crate::dom::{self, EventListener};
use crate::frame::AnimationLoop;
use anyhow::anyhow;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Full-viewport canvas of drifting particles behind the hero section.
pub struct ParticleBackground {
    field: Rc<RefCell<ParticleField>>,
    canvas: web::HtmlCanvasElement,
    _resize: EventListener,
    frame_loop: AnimationLoop,
}

impl ParticleBackground {
    /// Returns `Ok(None)` when there is no canvas or no 2D context; the page
    /// then simply stays static.
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let canvas = match document
            .get_element_by_id(ID_PARTICLE_CANVAS)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::warn!("[particles] no #{} canvas, skipping", ID_PARTICLE_CANVAS);
                return Ok(None);
            }
        };
        let ctx = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::warn!("[particles] 2d context unavailable, skipping");
                return Ok(None);
            }
        };
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;

        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let field = Rc::new(RefCell::new(ParticleField::from_entropy(
            ParticleConfig::default(),
            w as f32,
            h as f32,
        )?));
        log::info!(
            "[particles] mounted {} particles on {}x{}",
            field.borrow().len(),
            w,
            h
        );

        let field_resize = field.clone();
        let canvas_resize = canvas.clone();
        let resize = EventListener::new(&window, EVENT_RESIZE, move |_| {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
            field_resize.borrow_mut().resize(w as f32, h as f32);
            log::debug!("[particles] resized to {}x{}", w, h);
        })?;

        let field_tick = field.clone();
        let canvas_tick = canvas.clone();
        let frame_loop = AnimationLoop::start(move || {
            let mut f = field_tick.borrow_mut();
            f.step();
            draw(&ctx, &canvas_tick, f.particles());
        })?;

        Ok(Some(Self {
            field,
            canvas,
            _resize: resize,
            frame_loop,
        }))
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().len()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    pub fn field_size(&self) -> (f32, f32) {
        let f = self.field.borrow();
        (f.width(), f.height())
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop.is_running()
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        log::info!("[particles] unmounted");
    }
}

#[allow(deprecated)]
fn draw(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for p in particles {
        ctx.set_global_alpha(p.opacity as f64);
        ctx.set_fill_style(&JsValue::from_str(p.color.hex()));
        ctx.begin_path();
        _ = ctx.arc(
            p.position.x as f64,
            p.position.y as f64,
            p.size as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
