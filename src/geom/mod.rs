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

//! Module containing geometry primitives.

mod card;
mod shape;
mod vec;

pub use self::card::*;
pub use self::shape::*;
pub use self::vec::*;

/// An axis-aligned rectangle placed by its top-left corner.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: f64,
    /// The y coordinate of the top edge.
    pub y: f64,
    /// The width.
    pub w: f64,
    /// The height.
    pub h: f64,
}

impl Rect {
    /// Constructs a new rectangle from its top-left corner and its dimensions.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    /// Returns the lowest x coordinate of the rectangle.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Returns the highest x coordinate of the rectangle.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Returns the lowest y coordinate of the rectangle.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Returns the highest y coordinate of the rectangle.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        v2(self.x, self.y)
    }

    /// Returns the width and height.
    #[inline]
    pub fn dims(&self) -> Vec2 {
        v2(self.w, self.h)
    }

    /// Returns the center point.
    pub fn center(&self) -> Vec2 {
        v2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// A circle placed by its center.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Circle {
    /// The center point.
    pub center: Vec2,
    /// The radius.
    pub r: f64,
}

impl Circle {
    /// Constructs a new circle.
    #[inline]
    pub fn new(center: Vec2, r: f64) -> Circle {
        Circle { center, r }
    }

    /// Returns the bounding box of the circle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.center.x - self.r, self.center.y - self.r, self.r * 2.0, self.r * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(rect.left(), 1.0);
        assert_eq!(rect.top(), 2.0);
        assert_eq!(rect.right(), 5.0);
        assert_eq!(rect.bottom(), 8.0);
        assert_eq!(rect.center(), v2(3.0, 5.0));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 1.0, 1.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -1.0, 6.0, 3.0));
    }

    #[test]
    fn test_circle_bounds() {
        let circle = Circle::new(v2(10.0, 10.0), 10.0);
        assert_eq!(circle.bounds(), Rect::new(0.0, 0.0, 20.0, 20.0));
    }
}
