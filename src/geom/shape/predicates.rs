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

use crate::geom::{v2, Circle, Rect, Vec2};

// This module contains the pairwise overlap predicates behind `collides`.
// All comparisons are exact: shapes that only touch do not overlap.

/// Separating-axis test for two rectangles.
///
/// The rectangles are disjoint if one lies entirely on one side of the other,
/// with touching edges counted as disjoint.
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    true
}

// Per-row test used for masks, in overlap form rather than separating form.
fn row_row(a: &Rect, b: &Rect) -> bool {
    a.x + a.w > b.x && a.x < b.x + b.w && a.y + a.h > b.y && a.y < b.y + b.h
}

/// Returns `true` if any row of `a` overlaps any row of `b`.
pub fn mask_mask(a: &[Rect], b: &[Rect]) -> bool {
    a.iter().any(|row_a| b.iter().any(|row_b| row_row(row_a, row_b)))
}

/// Returns the point of `rect` closest to the center of `circle`.
///
/// If the center lies inside the rectangle, the center itself is returned.
pub fn closest_point(circle: &Circle, rect: &Rect) -> Vec2 {
    v2(
        clamp(circle.center.x, rect.left(), rect.right()),
        clamp(circle.center.y, rect.top(), rect.bottom()),
    )
}

fn clamp(val: f64, min: f64, max: f64) -> f64 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Returns `true` if `circle` overlaps `rect`.
pub fn circle_rect(circle: &Circle, rect: &Rect) -> bool {
    circle.center.dist_sq(&closest_point(circle, rect)) < circle.r * circle.r
}

/// Returns `true` if the two circles overlap.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let total_r = a.r + b.r;
    a.center.dist_sq(&b.center) < total_r * total_r
}
