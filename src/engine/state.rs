use serde::{Deserialize, Serialize};

use crate::domain::{bolt::Bolt, palette::HueFamily, random::RandomSource, random::random_int};

pub const INITIAL_SPAWN_INTERVAL: u32 = 50;
pub const SPAWN_INTERVAL: (i64, i64) = (100, 200);

/// Logical canvas size, fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    frames_since_spawn: u32,
    interval_frames: u32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            frames_since_spawn: 0,
            interval_frames: INITIAL_SPAWN_INTERVAL,
        }
    }
}

impl SpawnTimer {
    pub fn frames_since_spawn(&self) -> u32 {
        self.frames_since_spawn
    }

    pub fn interval_frames(&self) -> u32 {
        self.interval_frames
    }

    /// Counts one frame. Returns true when the threshold is reached; the
    /// counter then restarts and a fresh threshold is drawn.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> bool {
        self.frames_since_spawn = self.frames_since_spawn.saturating_add(1);
        if self.frames_since_spawn < self.interval_frames {
            return false;
        }
        self.frames_since_spawn = 0;
        self.interval_frames = random_int(rng, SPAWN_INTERVAL.0, SPAWN_INTERVAL.1) as u32;
        true
    }
}

/// Everything one effect instance mutates between frames.
#[derive(Debug, Clone)]
pub struct EffectState {
    pub viewport: Viewport,
    pub palette: HueFamily,
    pub bolts: Vec<Bolt>,
    pub timer: SpawnTimer,
    pub frame: u64,
}

impl EffectState {
    pub fn new(viewport: Viewport, palette: HueFamily) -> Self {
        Self {
            viewport,
            palette,
            bolts: Vec::new(),
            timer: SpawnTimer::default(),
            frame: 0,
        }
    }
}
