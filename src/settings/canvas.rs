//! Shared canvas handle

use std::sync::Arc;

use glam::Mat4;
use parking_lot::RwLock;

use super::CurveSettings;
use crate::error::CurveResult;

struct CanvasState {
    settings: CurveSettings,
    canvas_to_world: Mat4,
    revision: u64,
    enable_toggles: u64,
}

/// Consistent copy of a canvas taken under a single read lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSnapshot {
    pub settings: CurveSettings,
    pub canvas_to_world: Mat4,
    pub revision: u64,
    /// Number of `set_enabled` calls; a change means every element redraws
    /// from freshly built geometry.
    pub enable_toggles: u64,
}

/// Shared, cloneable handle to a curved canvas.
///
/// All elements of one canvas hold a clone of the same handle. Every edit
/// bumps the revision, which is how elements learn that their curved
/// geometry is stale. Edits must not race a curve pass; snapshots keep a
/// single pass from seeing a half-applied edit.
#[derive(Clone)]
pub struct CurvedCanvas {
    inner: Arc<RwLock<CanvasState>>,
}

impl CurvedCanvas {
    /// Create a canvas from validated settings.
    pub fn new(settings: CurveSettings, canvas_to_world: Mat4) -> CurveResult<Self> {
        settings.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(CanvasState {
                settings,
                canvas_to_world,
                revision: 0,
                enable_toggles: 0,
            })),
        })
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        let state = self.inner.read();
        CanvasSnapshot {
            settings: state.settings,
            canvas_to_world: state.canvas_to_world,
            revision: state.revision,
            enable_toggles: state.enable_toggles,
        }
    }

    pub fn settings(&self) -> CurveSettings {
        self.inner.read().settings
    }

    pub fn canvas_to_world(&self) -> Mat4 {
        self.inner.read().canvas_to_world
    }

    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    /// Edit the settings through a closure.
    ///
    /// The edit is applied to a copy and only committed if it validates.
    pub fn update(&self, f: impl FnOnce(&mut CurveSettings)) -> CurveResult<()> {
        let mut state = self.inner.write();
        let mut settings = state.settings;
        f(&mut settings);
        settings.validate()?;

        if settings != state.settings {
            state.settings = settings;
            state.revision += 1;
            log::debug!(
                "Canvas settings changed (revision {}): angle={} preserve_aspect={} size={:?}",
                state.revision,
                settings.angle,
                settings.preserve_aspect,
                settings.canvas_size
            );
        }
        Ok(())
    }

    pub fn set_angle(&self, angle: i32) {
        let mut state = self.inner.write();
        if state.settings.angle != angle {
            state.settings.angle = angle;
            state.revision += 1;
        }
    }

    /// Enable or disable curving for every element of this canvas.
    ///
    /// Always bumps the revision and the toggle count, so each element
    /// refetches its flat geometry on the next pass.
    pub fn set_enabled(&self, enabled: bool) {
        let mut state = self.inner.write();
        state.settings.enabled = enabled;
        state.revision += 1;
        state.enable_toggles += 1;
        log::debug!(
            "Canvas curving {}, redrawing elements",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    pub fn set_canvas_to_world(&self, canvas_to_world: Mat4) {
        let mut state = self.inner.write();
        if state.canvas_to_world != canvas_to_world {
            state.canvas_to_world = canvas_to_world;
            state.revision += 1;
        }
    }
}

impl std::fmt::Debug for CurvedCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read();
        f.debug_struct("CurvedCanvas")
            .field("settings", &state.settings)
            .field("revision", &state.revision)
            .finish()
    }
}
