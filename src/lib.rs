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

//! Discrete 2D collision detection and per-axis motion for keyboard-driven
//! game entities.
//!
//! Entities (`Mover`s) carry one of three shapes: an axis-aligned rectangle, a
//! mask of stacked rectangles approximating a silhouette, or a circle. Each tick
//! a mover applies its velocity along x and then along y, reverting either move
//! if it would leave the `World` or overlap an obstacle.
//!
//! ```
//! use dotbox::{Mover, World, KeyEvent};
//! use dotbox::geom::{v2, Card, Rect, Collider, Shape};
//!
//! let mut world = World::new(640.0, 480.0).unwrap();
//! world.add_obstacle(0, Collider::rect(Rect::new(300.0, 40.0, 40.0, 400.0)).unwrap());
//!
//! let mut dot = Mover::new(Shape::square(20.0).unwrap(), v2(270.0, 100.0), 10.0);
//! dot.handle_input(KeyEvent::pressed(Card::PlusX));
//! dot.step(&world);
//! assert_eq!(dot.pos(), v2(280.0, 100.0));
//! let step = dot.step(&world);
//! assert!(step.blocked[Card::PlusX]);
//! assert_eq!(dot.pos(), v2(280.0, 100.0));
//! ```

pub mod camera;
pub mod config;
mod core;
pub mod error;
pub mod geom;
pub mod pump;

pub use crate::core::*;
