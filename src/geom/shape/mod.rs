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

use std::mem;
use std::slice;

use crate::error::{check_dims, InvalidShapeError};
use crate::geom::{v2, Circle, Rect, Vec2};

mod predicates;
#[cfg(test)]
mod tests;

pub use self::predicates::{circle_circle, circle_rect, closest_point, mask_mask, rect_rect};

/// Enumeration of kinds of shapes used for collision tests.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Ordered stack of axis-aligned rectangles approximating a silhouette.
    Mask,
    /// Circle.
    Circle,
}

/// Represents a validated shape, without any position.
///
/// Rectangles and masks are placed by their top-left corner, circles by their center.
#[derive(PartialEq, Clone, Debug)]
pub struct Shape {
    repr: ShapeRepr,
}

#[derive(PartialEq, Clone, Debug)]
enum ShapeRepr {
    Rect(Vec2),
    // rows as (width, height), stacked top to bottom; `width` is the widest row
    Mask { rows: Vec<Vec2>, width: f64 },
    Circle(f64),
}

impl Shape {
    /// Constructs a new axis-aligned rectangle shape with the given `dims` (width and height).
    ///
    /// Dimensions must be positive and finite.
    pub fn rect(dims: Vec2) -> Result<Shape, InvalidShapeError> {
        check_dims(dims.x, dims.y)?;
        Ok(Shape { repr: ShapeRepr::Rect(dims) })
    }

    /// Constructs a new axis-aligned square shape with the given `width`.
    #[inline]
    pub fn square(width: f64) -> Result<Shape, InvalidShapeError> {
        Shape::rect(v2(width, width))
    }

    /// Constructs a new circle shape with the given `radius`.
    pub fn circle(radius: f64) -> Result<Shape, InvalidShapeError> {
        if !radius.is_finite() {
            Err(InvalidShapeError::NonFinite)
        } else if radius <= 0.0 {
            Err(InvalidShapeError::NonPositiveRadius(radius))
        } else {
            Ok(Shape { repr: ShapeRepr::Circle(radius) })
        }
    }

    /// Constructs a new mask shape from rows of `(width, height)` dims.
    ///
    /// When placed, the rows are stacked top to bottom in the given order, each one
    /// centered horizontally within the widest row.
    pub fn mask(rows: Vec<Vec2>) -> Result<Shape, InvalidShapeError> {
        if rows.is_empty() {
            return Err(InvalidShapeError::EmptyMask);
        }
        for row in &rows {
            check_dims(row.x, row.y)?;
        }
        let width = rows.iter().map(|row| row.x).fold(0.0, f64::max);
        Ok(Shape { repr: ShapeRepr::Mask { rows, width } })
    }

    /// Returns the kind of shape.
    pub fn kind(&self) -> ShapeKind {
        match self.repr {
            ShapeRepr::Rect(_) => ShapeKind::Rect,
            ShapeRepr::Mask { .. } => ShapeKind::Mask,
            ShapeRepr::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Returns the width and height of the shape's bounding box.
    pub fn dims(&self) -> Vec2 {
        match self.repr {
            ShapeRepr::Rect(dims) => dims,
            ShapeRepr::Mask { ref rows, width } => v2(width, rows.iter().map(|row| row.y).sum()),
            ShapeRepr::Circle(r) => v2(r * 2.0, r * 2.0),
        }
    }

    /// Places the shape at `pos`, producing a collider ready for overlap tests.
    pub fn place(&self, pos: Vec2) -> Collider {
        let mut collider = Collider {
            repr: ColliderRepr::Rect(Rect::default()),
        };
        self.place_into(pos, &mut collider);
        collider
    }

    // Recomputes `collider` for `pos`, reusing its row buffer when both are masks.
    pub(crate) fn place_into(&self, pos: Vec2, collider: &mut Collider) {
        match self.repr {
            ShapeRepr::Rect(dims) => {
                collider.repr = ColliderRepr::Rect(Rect::new(pos.x, pos.y, dims.x, dims.y));
            }
            ShapeRepr::Circle(r) => {
                collider.repr = ColliderRepr::Circle(Circle::new(pos, r));
            }
            ShapeRepr::Mask { ref rows, width } => {
                let mut rects = match mem::replace(&mut collider.repr, ColliderRepr::Rect(Rect::default())) {
                    ColliderRepr::Mask(rects) => rects,
                    _ => Vec::with_capacity(rows.len()),
                };
                rects.clear();
                let mut offset = 0.0;
                for row in rows {
                    rects.push(Rect::new(pos.x + (width - row.x) * 0.5, pos.y + offset, row.x, row.y));
                    offset += row.y;
                }
                collider.repr = ColliderRepr::Mask(rects);
            }
        }
    }
}

/// A shape placed in the world, with concrete geometry.
///
/// Colliders are produced by `Shape::place`, so their geometry is never degenerate.
#[derive(PartialEq, Clone, Debug)]
pub struct Collider {
    repr: ColliderRepr,
}

#[derive(PartialEq, Clone, Debug)]
enum ColliderRepr {
    Rect(Rect),
    Mask(Vec<Rect>),
    Circle(Circle),
}

/// Borrowed view of a collider's geometry, e.g. for drawing hitboxes.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Geometry<'a> {
    /// A single rectangle.
    Rect(Rect),
    /// The placed rows of a mask, top to bottom.
    Mask(&'a [Rect]),
    /// A circle.
    Circle(Circle),
}

impl Collider {
    /// Shorthand for validating `rect` and placing it as a rectangle collider.
    pub fn rect(rect: Rect) -> Result<Collider, InvalidShapeError> {
        Ok(Shape::rect(rect.dims())?.place(rect.pos()))
    }

    /// Shorthand for validating `circle` and placing it as a circle collider.
    pub fn circle(circle: Circle) -> Result<Collider, InvalidShapeError> {
        Ok(Shape::circle(circle.r)?.place(circle.center))
    }

    /// Returns the kind of shape.
    pub fn kind(&self) -> ShapeKind {
        match self.repr {
            ColliderRepr::Rect(_) => ShapeKind::Rect,
            ColliderRepr::Mask(_) => ShapeKind::Mask,
            ColliderRepr::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Returns the placed geometry.
    pub fn geometry(&self) -> Geometry<'_> {
        match self.repr {
            ColliderRepr::Rect(rect) => Geometry::Rect(rect),
            ColliderRepr::Mask(ref rects) => Geometry::Mask(rects),
            ColliderRepr::Circle(circle) => Geometry::Circle(circle),
        }
    }

    /// Returns the axis-aligned bounding box of the collider.
    pub fn bounds(&self) -> Rect {
        match self.repr {
            ColliderRepr::Rect(rect) => rect,
            // masks always have at least one row
            ColliderRepr::Mask(ref rects) => rects[1..].iter().fold(rects[0], |acc, rect| acc.union(rect)),
            ColliderRepr::Circle(circle) => circle.bounds(),
        }
    }
}

/// Returns `true` if `a` and `b` overlap.
///
/// Shapes that only touch along an edge or at a single point do not overlap.
/// Rectangles are treated as one-row masks when tested against masks.
pub fn collides(a: &Collider, b: &Collider) -> bool {
    match (&a.repr, &b.repr) {
        (ColliderRepr::Rect(a), ColliderRepr::Rect(b)) => rect_rect(a, b),
        (ColliderRepr::Rect(a), ColliderRepr::Mask(b)) => mask_mask(slice::from_ref(a), b),
        (ColliderRepr::Mask(a), ColliderRepr::Rect(b)) => mask_mask(a, slice::from_ref(b)),
        (ColliderRepr::Mask(a), ColliderRepr::Mask(b)) => mask_mask(a, b),
        (ColliderRepr::Circle(a), ColliderRepr::Rect(b)) | (ColliderRepr::Rect(b), ColliderRepr::Circle(a)) => {
            circle_rect(a, b)
        }
        (ColliderRepr::Circle(a), ColliderRepr::Mask(b)) | (ColliderRepr::Mask(b), ColliderRepr::Circle(a)) => {
            b.iter().any(|rect| circle_rect(a, rect))
        }
        (ColliderRepr::Circle(a), ColliderRepr::Circle(b)) => circle_circle(a, b),
    }
}
