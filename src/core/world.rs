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

use fnv::{FnvHashMap, FnvHashSet};
use log::debug;

use crate::core::{Mover, Step};
use crate::error::{check_dims, InvalidShapeError};
use crate::geom::{collides, v2, Collider, Rect, Vec2};

/// Identifier used to register an obstacle with a `World`.
pub type ObstacleId = u64;

/// A bounded area holding the obstacles that movers must not penetrate.
///
/// The world spans `[0, width] x [0, height]`. Obstacles are stored by id so that
/// dynamic obstacles (including other movers) can be updated between steps.
/// Static obstacles and published movers share one id space.
#[derive(Clone, Debug)]
pub struct World {
    dims: Vec2,
    obstacles: FnvHashMap<ObstacleId, Collider>,
    // ids of obstacles owned by published movers
    mover_ids: FnvHashSet<ObstacleId>,
}

impl World {
    /// Constructs an empty world with the given dimensions, which must be positive.
    pub fn new(width: f64, height: f64) -> Result<World, InvalidShapeError> {
        check_dims(width, height)?;
        debug!("created {} x {} world", width, height);
        Ok(World {
            dims: v2(width, height),
            obstacles: FnvHashMap::default(),
            mover_ids: FnvHashSet::default(),
        })
    }

    /// Returns the width of the world.
    #[inline]
    pub fn width(&self) -> f64 {
        self.dims.x
    }

    /// Returns the height of the world.
    #[inline]
    pub fn height(&self) -> f64 {
        self.dims.y
    }

    /// Returns the width and height of the world.
    #[inline]
    pub fn dims(&self) -> Vec2 {
        self.dims
    }

    /// Returns the world area as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.dims.x, self.dims.y)
    }

    /// Registers an obstacle under `id`.
    ///
    /// Panics if `id` is already in use, by a static obstacle or a published mover.
    pub fn add_obstacle(&mut self, id: ObstacleId, collider: Collider) {
        debug!("adding obstacle {} ({:?})", id, collider.kind());
        assert!(self.obstacles.insert(id, collider).is_none(), "obstacle id {} already in use", id);
    }

    /// Replaces the collider of an existing obstacle.
    ///
    /// Panics if `id` is not registered.
    pub fn update_obstacle(&mut self, id: ObstacleId, collider: Collider) {
        let slot = self.obstacles.get_mut(&id).unwrap_or_else(|| panic!("obstacle id {} not found", id));
        *slot = collider;
    }

    /// Removes an obstacle, returning its collider if it was registered.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Option<Collider> {
        let removed = self.obstacles.remove(&id);
        self.mover_ids.remove(&id);
        if removed.is_some() {
            debug!("removed obstacle {}", id);
        }
        removed
    }

    /// Returns the collider registered under `id`.
    pub fn obstacle(&self, id: ObstacleId) -> Option<&Collider> {
        self.obstacles.get(&id)
    }

    /// Iterates over all obstacles, in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = (ObstacleId, &Collider)> {
        self.obstacles.iter().map(|(&id, collider)| (id, collider))
    }

    /// Returns the number of registered obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Returns `true` if `rect` lies within the world horizontally.
    pub fn within_x(&self, rect: &Rect) -> bool {
        rect.left() >= 0.0 && rect.right() <= self.dims.x
    }

    /// Returns `true` if `rect` lies within the world vertically.
    pub fn within_y(&self, rect: &Rect) -> bool {
        rect.top() >= 0.0 && rect.bottom() <= self.dims.y
    }

    /// Returns `true` if the bounding box of `collider` lies within the world.
    pub fn contains(&self, collider: &Collider) -> bool {
        let bounds = collider.bounds();
        self.within_x(&bounds) && self.within_y(&bounds)
    }

    /// Returns `true` if `collider` overlaps any obstacle other than `exclude`.
    pub fn hits_obstacle(&self, collider: &Collider, exclude: Option<ObstacleId>) -> bool {
        self.obstacles
            .iter()
            .any(|(&id, obstacle)| Some(id) != exclude && collides(collider, obstacle))
    }

    /// Returns the ids of all obstacles overlapping `collider`, other than `exclude`, in ascending order.
    pub fn overlapping(&self, collider: &Collider, exclude: Option<ObstacleId>) -> Vec<ObstacleId> {
        let mut result: Vec<ObstacleId> = self
            .obstacles
            .iter()
            .filter(|&(&id, obstacle)| Some(id) != exclude && collides(collider, obstacle))
            .map(|(&id, _)| id)
            .collect();
        result.sort();
        result
    }

    /// Returns `true` if `collider` lies within the world and overlaps no obstacle other than `exclude`.
    pub fn fits(&self, collider: &Collider, exclude: Option<ObstacleId>) -> bool {
        self.contains(collider) && !self.hits_obstacle(collider, exclude)
    }

    /// Steps each mover once, in slice order.
    ///
    /// A mover that has an id is published as an obstacle right after its own step,
    /// so movers later in the slice collide with its position for the current tick.
    /// Publish movers once before the first call so that earlier movers also see
    /// later ones on the first tick.
    pub fn advance(&mut self, movers: &mut [Mover]) -> Vec<Step> {
        let mut steps = Vec::with_capacity(movers.len());
        for mover in movers.iter_mut() {
            steps.push(mover.step(self));
            self.publish(mover);
        }
        steps
    }

    /// Registers or updates `mover` as an obstacle under its id. Movers without an id are ignored.
    ///
    /// Panics if the id is already used by an obstacle added with `add_obstacle`.
    pub fn publish(&mut self, mover: &Mover) {
        if let Some(id) = mover.id() {
            if !self.mover_ids.contains(&id) {
                assert!(!self.obstacles.contains_key(&id), "obstacle id {} already in use", id);
                debug!("publishing mover {}", id);
                self.mover_ids.insert(id);
            }
            self.obstacles.insert(id, mover.collider().clone());
        }
    }
}
