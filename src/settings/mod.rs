//! Canvas curvature settings
//!
//! [`CurveSettings`] is the plain configuration of one curved canvas.
//! [`CurvedCanvas`] wraps it in a shared, revisioned handle that every
//! element of the canvas holds.

mod canvas;

pub use canvas::{CanvasSnapshot, CurvedCanvas};

use glam::Vec2;

use crate::error::{CurveError, CurveResult};
use crate::DEG_TO_RAD;

/// Curvature configuration of a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Arc in degrees subtended by the full canvas width. 0 is flat,
    /// negative values curve away from the viewer.
    pub angle: i32,
    /// Treat the canvas width as arc length instead of chord length
    pub preserve_aspect: bool,
    /// Subdivision density multiplier, clamped to [0.01, 10] when used
    pub quality: f32,
    /// Nominal segment count for a full circle
    pub base_circle_segments: i32,
    /// Size of the canvas rectangle in canvas-local units
    pub canvas_size: Vec2,
    /// Disabled settings leave all geometry flat
    pub enabled: bool,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            angle: 90,
            preserve_aspect: true,
            quality: 1.0,
            base_circle_segments: 16,
            canvas_size: Vec2::ZERO,
            enabled: true,
        }
    }
}

impl CurveSettings {
    pub fn new(angle: i32, canvas_size: Vec2) -> Self {
        Self {
            angle,
            canvas_size,
            ..Default::default()
        }
    }

    pub fn with_angle(mut self, angle: i32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_preserve_aspect(mut self, preserve_aspect: bool) -> Self {
        self.preserve_aspect = preserve_aspect;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_base_circle_segments(mut self, segments: i32) -> Self {
        self.base_circle_segments = segments;
        self
    }

    pub fn with_canvas_size(mut self, canvas_size: Vec2) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Radius of the canvas cylinder in canvas-local units.
    ///
    /// Returns 0 for a flat canvas. Degenerate inputs (a non-finite canvas
    /// width, angles whose half-angle sine underflows) are not guarded and
    /// the resulting huge, infinite or NaN radius is returned as is.
    pub fn cylinder_radius(&self) -> f32 {
        if self.angle == 0 {
            return 0.0;
        }

        let width = self.canvas_size.x;
        if self.preserve_aspect {
            width / ((2.0 * std::f32::consts::PI) * (self.angle as f32 / 360.0))
        } else {
            (width * 0.5) / ((self.angle as f32).clamp(-180.0, 180.0) * 0.5 * DEG_TO_RAD).sin()
        }
    }

    /// How big a UI quad may get before it should be subdivided to follow
    /// the curve smoothly.
    ///
    /// Not consumed by the curving path; published for hosts that subdivide
    /// their own geometry.
    pub fn tessellation_size(&self, modified_by_quality: bool) -> Vec2 {
        let mut size = self.canvas_size;
        if self.angle != 0 {
            size /= self.segments_by_angle(self.angle as f32);
        }

        let quality = if modified_by_quality {
            self.quality.clamp(0.01, 10.0)
        } else {
            1.0
        };
        size / quality
    }

    /// Segment count for the given arc.
    ///
    /// Arcs under 90 degrees get proportionally twice as many segments as a
    /// full circle would give them.
    pub fn segments_by_angle(&self, angle: f32) -> f32 {
        let angle = angle.abs();
        let base = self.base_circle_segments as f32;
        if angle <= 1.0 {
            1.0
        } else if angle < 90.0 {
            base * remap(angle, 0.0, 90.0, 0.01, 0.5)
        } else {
            base * remap(angle, 90.0, 360.0, 0.5, 1.0)
        }
    }

    /// True when elements of this canvas must render unmodified.
    ///
    /// An angle of exactly 1 is a legacy "off" sentinel, distinct from the
    /// flat pass-through at angle 0.
    pub fn is_curving_disabled(&self) -> bool {
        !self.enabled || self.angle == 1
    }

    /// Check the values a host may have typed in.
    ///
    /// The angle is deliberately left unchecked.
    pub fn validate(&self) -> CurveResult<()> {
        let size = self.canvas_size;
        if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(CurveError::InvalidCanvasSize {
                width: size.x,
                height: size.y,
            });
        }
        if !self.quality.is_finite() {
            return Err(CurveError::InvalidQuality(self.quality));
        }
        if self.base_circle_segments < 1 {
            return Err(CurveError::InvalidBaseSegments(self.base_circle_segments));
        }
        Ok(())
    }
}

/// Linear remap of `value` from `[from_min, from_max]` to `[to_min, to_max]`.
fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min)
}
