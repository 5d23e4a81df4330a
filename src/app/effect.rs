use thiserror::Error;
use tracing::{debug, info};

use crate::{
    app::scheduler::{FrameRequest, FrameScheduler},
    domain::{palette::HueFamily, random::RandomSource},
    engine::{self, EffectState, FrameReport, Viewport},
    surface::Surface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    /// Holds the one outstanding frame request.
    Running(FrameRequest),
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("effect is already mounted")]
    AlreadyMounted,
    #[error("effect was unmounted and cannot be restarted")]
    NotRestartable,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectOptions {
    pub palette: HueFamily,
    pub tint: Option<f64>,
    pub class_name: Option<String>,
}

/// The mounted lightning overlay: owns the engine state and the surface it
/// draws on, and keeps exactly one frame request in flight while running.
#[derive(Debug)]
pub struct ThunderEffect<S> {
    options: EffectOptions,
    lifecycle: Lifecycle,
    mounted: bool,
    state: Option<EffectState>,
    surface: Option<S>,
}

impl<S: Surface> ThunderEffect<S> {
    pub fn new(options: EffectOptions) -> Self {
        Self {
            options,
            lifecycle: Lifecycle::Uninitialized,
            mounted: false,
            state: None,
            surface: None,
        }
    }

    /// Starts the frame loop on `surface`. A missing surface means the host
    /// cannot draw: the effect stays inert and nothing is scheduled.
    pub fn mount(
        &mut self,
        viewport: Viewport,
        surface: Option<S>,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<(), LifecycleError> {
        if self.lifecycle == Lifecycle::Stopped {
            return Err(LifecycleError::NotRestartable);
        }
        if self.mounted {
            return Err(LifecycleError::AlreadyMounted);
        }
        self.mounted = true;

        let Some(surface) = surface else {
            info!("drawing surface unsupported, lightning disabled");
            return Ok(());
        };

        self.state = Some(EffectState::new(viewport, self.options.palette));
        self.surface = Some(surface);
        let first = scheduler.request_frame();
        self.lifecycle = Lifecycle::Running(first);
        info!(
            width = viewport.width,
            height = viewport.height,
            palette = ?self.options.palette,
            tint = ?self.tint_filter(),
            "lightning mounted"
        );
        Ok(())
    }

    /// Runs one frame if `request` is the outstanding one. The next frame is
    /// requested before any drawing happens.
    pub fn on_frame(
        &mut self,
        request: FrameRequest,
        scheduler: &mut impl FrameScheduler,
        rng: &mut impl RandomSource,
    ) -> Option<FrameReport> {
        match self.lifecycle {
            Lifecycle::Running(pending) if pending == request => {}
            _ => {
                debug!(request = request.id(), "ignoring stale frame");
                return None;
            }
        }
        let (Some(state), Some(surface)) = (self.state.as_mut(), self.surface.as_mut()) else {
            return None;
        };

        self.lifecycle = Lifecycle::Running(scheduler.request_frame());
        Some(engine::step(state, surface, rng))
    }

    /// Cancels the outstanding frame, if any. Always ends in `Stopped`.
    pub fn unmount(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Lifecycle::Running(pending) = self.lifecycle {
            scheduler.cancel_frame(pending);
            info!(request = pending.id(), "lightning unmounted");
        }
        self.lifecycle = Lifecycle::Stopped;
        self.state = None;
        self.surface = None;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running(_))
    }

    pub fn options(&self) -> &EffectOptions {
        &self.options
    }

    pub fn state(&self) -> Option<&EffectState> {
        self.state.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn tint_filter(&self) -> Option<f64> {
        self.options.palette.tint_filter(self.options.tint)
    }
}
