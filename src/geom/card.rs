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

use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::geom::{v2, Vec2};

/// Represents the four cardinal directions in 2D screen space.
///
/// Since `y` grows downward, `MinusY` is "up" and `PlusY` is "down".
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Card {
    /// Negative X direction (left).
    MinusX,

    /// Negative Y direction (up).
    MinusY,

    /// Positive X direction (right).
    PlusX,

    /// Positive Y direction (down).
    PlusY,
}

impl Card {
    // direction of a non-zero displacement along x
    pub(crate) fn along_x(delta: f64) -> Card {
        if delta < 0.0 {
            Card::MinusX
        } else {
            Card::PlusX
        }
    }

    // direction of a non-zero displacement along y
    pub(crate) fn along_y(delta: f64) -> Card {
        if delta < 0.0 {
            Card::MinusY
        } else {
            Card::PlusY
        }
    }
}

impl From<Card> for Vec2 {
    fn from(card: Card) -> Vec2 {
        match card {
            Card::MinusX => v2(-1.0, 0.0),
            Card::MinusY => v2(0.0, -1.0),
            Card::PlusX => v2(1.0, 0.0),
            Card::PlusY => v2(0.0, 1.0),
        }
    }
}

/// A map from `Card` to `bool`, used to report which directions of motion were blocked.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct CardMask {
    flags: [bool; 4],
}

impl CardMask {
    /// Creates a `CardMask` with all values set to `false`.
    #[inline]
    pub fn empty() -> CardMask {
        CardMask { flags: [false; 4] }
    }

    /// Returns `true` if no direction is set.
    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(|&flag| !flag)
    }
}

impl Default for CardMask {
    fn default() -> CardMask {
        CardMask::empty()
    }
}

impl From<Card> for CardMask {
    fn from(card: Card) -> CardMask {
        let mut result = CardMask::empty();
        result[card] = true;
        result
    }
}

impl Index<Card> for CardMask {
    type Output = bool;

    #[inline]
    fn index(&self, index: Card) -> &bool {
        &self.flags[index as usize]
    }
}

impl IndexMut<Card> for CardMask {
    #[inline]
    fn index_mut(&mut self, index: Card) -> &mut bool {
        &mut self.flags[index as usize]
    }
}

impl Debug for CardMask {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "CardMask {{ MinusX: {}, MinusY: {}, PlusX: {}, PlusY: {} }}",
            self[Card::MinusX],
            self[Card::MinusY],
            self[Card::PlusX],
            self[Card::PlusY]
        )
    }
}
