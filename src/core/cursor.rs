// Pointer-follower state: a lead dot pinned to the pointer and a trail ring
// that eases toward it once per animation frame.

use super::constants::*;
use super::error::{CoreError, CoreResult};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub smoothing: f32,
    pub dot_scale_hover: f32,
    pub dot_scale_rest: f32,
    pub ring_scale_hover: f32,
    pub ring_scale_rest: f32,
    pub ring_opacity_hover: f32,
    pub ring_opacity_rest: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing: TRAIL_SMOOTHING,
            dot_scale_hover: DOT_SCALE_HOVER,
            dot_scale_rest: DOT_SCALE_REST,
            ring_scale_hover: RING_SCALE_HOVER,
            ring_scale_rest: RING_SCALE_REST,
            ring_opacity_hover: RING_OPACITY_HOVER,
            ring_opacity_rest: RING_OPACITY_REST,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.smoothing > 0.0 && self.smoothing < 1.0) {
            return Err(CoreError::InvalidSmoothing(self.smoothing));
        }
        Ok(())
    }
}

/// Visual parameters the web layer applies to the two cursor layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub dot_scale: f32,
    pub ring_scale: f32,
    pub ring_opacity: f32,
}

#[derive(Clone, Debug)]
pub struct CursorState {
    config: CursorConfig,
    pointer: Vec2,
    trail: Vec2,
    hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            config: CursorConfig::default(),
            pointer: Vec2::ZERO,
            trail: Vec2::ZERO,
            hovering: false,
        }
    }

    pub fn with_config(config: CursorConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    #[inline]
    pub fn on_pointer_over(&mut self, interactive: bool) {
        self.hovering = interactive;
    }

    /// Advance the trail one frame toward the latest pointer sample.
    #[inline]
    pub fn tick(&mut self) {
        self.trail += (self.pointer - self.trail) * self.config.smoothing;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// Distance still separating the trail ring from the pointer.
    pub fn trail_error(&self) -> f32 {
        (self.pointer - self.trail).length()
    }

    pub fn style(&self) -> CursorStyle {
        if self.hovering {
            CursorStyle {
                dot_scale: self.config.dot_scale_hover,
                ring_scale: self.config.ring_scale_hover,
                ring_opacity: self.config.ring_opacity_hover,
            }
        } else {
            CursorStyle {
                dot_scale: self.config.dot_scale_rest,
                ring_scale: self.config.ring_scale_rest,
                ring_opacity: self.config.ring_opacity_rest,
            }
        }
    }
}

/// CSS transform for a layer centred on its `left`/`top` anchor.
#[inline]
pub fn centered_scale_transform(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({})", scale)
}
