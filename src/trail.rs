//! Rolling position history used to draw body paths.

use bevy::math::DVec2;
use std::collections::{HashMap, VecDeque};

use crate::ephemeris::{BodyId, BodyPositions};

/// Default number of points kept per body.
pub const DEFAULT_TRAIL_CAPACITY: usize = 2000;

/// Fixed-capacity FIFO of past positions, oldest first.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Append a point, evicting the oldest once over capacity.
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    pub fn newest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<DVec2> {
        self.points.front().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

}

/// Trails for every orbiting body, keyed by [`BodyId`]. The Sun has none.
///
/// Points are stored without the view offset so panning moves trails
/// together with the bodies.
#[derive(Clone, Debug)]
pub struct Trails {
    capacity: usize,
    buffers: HashMap<BodyId, TrailBuffer>,
}

impl Default for Trails {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

impl Trails {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffers: HashMap::new(),
        }
    }

    /// Append one point per orbiting body from a position snapshot.
    pub fn record(&mut self, snapshot: &BodyPositions) {
        let capacity = self.capacity;
        for (id, pos) in snapshot.iter().filter(|(id, _)| *id != BodyId::Sun) {
            self.buffers
                .entry(id)
                .or_insert_with(|| TrailBuffer::new(capacity))
                .push(pos - snapshot.view_offset);
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&TrailBuffer> {
        self.buffers.get(&id)
    }
}
