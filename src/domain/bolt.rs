use crate::domain::random::{RandomSource, random_int};

pub const HORIZONTAL_JITTER: (i64, i64) = (5, 30);
pub const VERTICAL_JITTER: (i64, i64) = (5, 25);
pub const PATH_LIMIT: (i64, i64) = (10, 35);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One jagged strike or branch. The path only ever grows; the engine drops
/// the bolt once it holds more points than `max_path_len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bolt {
    origin: Point,
    path: Vec<Point>,
    horizontal_jitter: i64,
    vertical_jitter: i64,
    max_path_len: usize,
    can_spawn_child: bool,
    pub has_rendered: bool,
}

impl Bolt {
    /// Root bolts come from the spawn timer and may branch once.
    pub fn root(origin: Point, rng: &mut impl RandomSource) -> Self {
        Self::create(origin, true, rng)
    }

    /// Children branch off a parent path point and never branch again.
    pub fn child(origin: Point, rng: &mut impl RandomSource) -> Self {
        Self::create(origin, false, rng)
    }

    fn create(origin: Point, can_spawn_child: bool, rng: &mut impl RandomSource) -> Self {
        let horizontal_jitter = random_int(rng, HORIZONTAL_JITTER.0, HORIZONTAL_JITTER.1);
        let vertical_jitter = random_int(rng, VERTICAL_JITTER.0, VERTICAL_JITTER.1);
        let max_path_len = random_int(rng, PATH_LIMIT.0, PATH_LIMIT.1) as usize;
        Self {
            origin,
            path: vec![origin],
            horizontal_jitter,
            vertical_jitter,
            max_path_len,
            can_spawn_child,
            has_rendered: false,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn horizontal_jitter(&self) -> i64 {
        self.horizontal_jitter
    }

    pub fn vertical_jitter(&self) -> i64 {
        self.vertical_jitter
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    pub fn can_spawn_child(&self) -> bool {
        self.can_spawn_child
    }

    pub fn last_point(&self) -> Point {
        self.path.last().copied().unwrap_or(self.origin)
    }

    /// Appends one jittered point below the current tip.
    pub fn extend(&mut self, rng: &mut impl RandomSource) {
        let last = self.last_point();
        let dx =
            random_int(rng, 0, self.horizontal_jitter) as f64 - self.horizontal_jitter as f64 / 2.0;
        let dy = random_int(rng, 0, self.vertical_jitter) as f64;
        self.path.push(Point::new(last.x + dx, last.y + dy));
    }

    pub fn exceeds_limit(&self) -> bool {
        self.path.len() > self.max_path_len
    }

    /// Consumes the one-time branching right. Returns whether it was still
    /// available.
    pub fn take_spawn_right(&mut self) -> bool {
        std::mem::replace(&mut self.can_spawn_child, false)
    }
}
