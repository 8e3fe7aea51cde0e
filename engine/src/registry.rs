//! Velocities of the balls currently on the surface, keyed by ball id.
use std::collections::BTreeMap;

use bouncer_shared::{BallId, SurfaceSize, Velocity};

/// Ball id to velocity. Mutating an id that is not registered is a no-op.
#[derive(Debug, Default)]
pub struct Registry {
    balls: BTreeMap<BallId, Velocity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BallId, velocity: Velocity) {
        self.balls.insert(id, velocity);
    }

    pub fn velocity(&self, id: BallId) -> Option<Velocity> {
        self.balls.get(&id).copied()
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.balls.contains_key(&id)
    }

    /// Negate vx. Returns false if the id is gone.
    pub fn reflect_x(&mut self, id: BallId) -> bool {
        match self.balls.get_mut(&id) {
            Some(v) => {
                v.reflect_x();
                true
            }
            None => false,
        }
    }

    /// Negate vy. Returns false if the id is gone.
    pub fn reflect_y(&mut self, id: BallId) -> bool {
        match self.balls.get_mut(&id) {
            Some(v) => {
                v.reflect_y();
                true
            }
            None => false,
        }
    }

    /// Double every velocity in place, capped at the surface extent.
    pub fn double_all(&mut self, bounds: SurfaceSize) {
        for v in self.balls.values_mut() {
            *v = v.doubled_within(bounds);
        }
    }

    pub fn ids(&self) -> Vec<BallId> {
        self.balls.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }
}
