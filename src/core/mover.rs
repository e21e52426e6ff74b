// Copyright 2024 The dotbox Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use crate::core::{KeyEvent, KeyState, ObstacleId, World};
use crate::geom::{v2, Card, CardMask, Collider, Rect, Shape, Vec2};

/// A keyboard-driven body that moves through a `World` one tick at a time.
///
/// Velocity is the sum of the directions of the currently held keys, each
/// contributing `speed`. Each call to `step` moves the body along x and then
/// along y, fully reverting either move if it would leave the world or overlap
/// an obstacle.
#[derive(Clone, Debug)]
pub struct Mover {
    pos: Vec2,
    vel: Vec2,
    speed: f64,
    shape: Shape,
    collider: Collider,
    id: Option<ObstacleId>,
}

/// Outcome of a single `Mover::step`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct Step {
    /// Directions in which the attempted move was reverted this tick.
    pub blocked: CardMask,
    /// `true` if the position changed.
    pub moved: bool,
}

impl Step {
    /// Returns `true` if a move along either axis was reverted.
    pub fn is_blocked(&self) -> bool {
        !self.blocked.is_empty()
    }
}

impl Mover {
    /// Constructs a resting mover with the given `shape` at `pos`.
    ///
    /// `speed` is the velocity added per held key and must be non-negative.
    pub fn new(shape: Shape, pos: Vec2, speed: f64) -> Mover {
        assert!(speed.is_finite() && speed >= 0.0, "speed must be non-negative");
        Mover {
            pos,
            vel: Vec2::zero(),
            speed,
            collider: shape.place(pos),
            shape,
            id: None,
        }
    }

    /// Gives the mover an id, under which `World::advance` publishes it as an obstacle.
    pub fn with_id(mut self, id: ObstacleId) -> Mover {
        self.id = Some(id);
        self
    }

    #[inline]
    pub fn id(&self) -> Option<ObstacleId> {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the collider at the current position.
    #[inline]
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Returns the bounding box at the current position.
    pub fn bounds(&self) -> Rect {
        self.collider.bounds()
    }

    pub fn set_vel(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::zero();
    }

    /// Moves the mover to `pos` without any collision checks.
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.shape.place_into(pos, &mut self.collider);
    }

    /// Applies a directional key edge to the velocity.
    ///
    /// Auto-repeat events are ignored, otherwise holding a key would accumulate
    /// velocity without bound.
    pub fn handle_input(&mut self, event: KeyEvent) {
        if event.repeat {
            trace!("ignoring repeated {:?}", event.card);
            return;
        }
        let delta = Vec2::from(event.card) * self.speed;
        match event.state {
            KeyState::Pressed => self.vel += delta,
            KeyState::Released => self.vel -= delta,
        }
    }

    /// Advances the mover by one tick of its velocity, one axis at a time.
    pub fn step(&mut self, world: &World) -> Step {
        let start = self.pos;
        let mut blocked = CardMask::empty();
        if self.vel.x != 0.0 && !self.try_move(world, v2(self.vel.x, 0.0), World::within_x) {
            blocked[Card::along_x(self.vel.x)] = true;
        }
        if self.vel.y != 0.0 && !self.try_move(world, v2(0.0, self.vel.y), World::within_y) {
            blocked[Card::along_y(self.vel.y)] = true;
        }
        Step { blocked, moved: self.pos != start }
    }

    fn try_move(&mut self, world: &World, delta: Vec2, in_bounds: fn(&World, &Rect) -> bool) -> bool {
        let old_pos = self.pos;
        self.pos += delta;
        self.shape.place_into(self.pos, &mut self.collider);
        if in_bounds(world, &self.collider.bounds()) && !world.hits_obstacle(&self.collider, self.id) {
            true
        } else {
            trace!("reverting move by {:?} from {:?}", delta, old_pos);
            self.pos = old_pos;
            self.shape.place_into(self.pos, &mut self.collider);
            false
        }
    }
}
