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

use crate::error::InvalidShapeError;
use crate::geom::*;

// rows of the 20x20 round dot silhouette
fn dot_mask() -> Shape {
    let rows = [
        (6.0, 1.0),
        (10.0, 1.0),
        (14.0, 1.0),
        (16.0, 2.0),
        (18.0, 2.0),
        (20.0, 6.0),
        (18.0, 2.0),
        (16.0, 2.0),
        (14.0, 1.0),
        (10.0, 1.0),
        (6.0, 1.0),
    ];
    Shape::mask(rows.iter().map(|&(w, h)| v2(w, h)).collect()).unwrap()
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Collider {
    Collider::rect(Rect::new(x, y, w, h)).unwrap()
}

fn circle(x: f64, y: f64, r: f64) -> Collider {
    Collider::circle(Circle::new(v2(x, y), r)).unwrap()
}

#[test]
fn test_invalid_shapes() {
    assert_eq!(
        Shape::rect(v2(0.0, 5.0)),
        Err(InvalidShapeError::NonPositiveDims { width: 0.0, height: 5.0 })
    );
    assert_eq!(Shape::square(-1.0).unwrap_err(), InvalidShapeError::NonPositiveDims { width: -1.0, height: -1.0 });
    assert_eq!(Shape::circle(0.0), Err(InvalidShapeError::NonPositiveRadius(0.0)));
    assert_eq!(Shape::circle(std::f64::NAN), Err(InvalidShapeError::NonFinite));
    assert_eq!(Shape::mask(vec![]), Err(InvalidShapeError::EmptyMask));
    assert_eq!(
        Shape::mask(vec![v2(4.0, 1.0), v2(4.0, 0.0)]),
        Err(InvalidShapeError::NonPositiveDims { width: 4.0, height: 0.0 })
    );
}

#[test]
fn test_shape_dims() {
    assert_eq!(Shape::rect(v2(4.0, 6.0)).unwrap().dims(), v2(4.0, 6.0));
    assert_eq!(Shape::circle(10.0).unwrap().dims(), v2(20.0, 20.0));
    assert_eq!(dot_mask().dims(), v2(20.0, 20.0));
    assert_eq!(dot_mask().kind(), ShapeKind::Mask);
}

#[test]
fn test_mask_rows_stack_and_center() {
    let collider = dot_mask().place(v2(100.0, 50.0));
    let rows = match collider.geometry() {
        Geometry::Mask(rows) => rows.to_vec(),
        other => panic!("expected mask geometry, got {:?}", other),
    };
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0], Rect::new(107.0, 50.0, 6.0, 1.0));
    assert_eq!(rows[3], Rect::new(102.0, 53.0, 16.0, 2.0));
    assert_eq!(rows[5], Rect::new(100.0, 57.0, 20.0, 6.0));
    assert_eq!(rows[10], Rect::new(107.0, 69.0, 6.0, 1.0));
    assert_eq!(collider.bounds(), Rect::new(100.0, 50.0, 20.0, 20.0));
}

#[test]
fn test_replacing_mask_reuses_rows() {
    let shape = dot_mask();
    let mut collider = shape.place(v2(0.0, 0.0));
    shape.place_into(v2(10.0, 20.0), &mut collider);
    assert_eq!(collider, shape.place(v2(10.0, 20.0)));
}

#[test]
fn test_rect_rect_symmetric() {
    let cases = [
        (rect(0.0, 0.0, 20.0, 20.0), rect(10.0, 10.0, 20.0, 20.0)),
        (rect(0.0, 0.0, 20.0, 20.0), rect(20.0, 0.0, 20.0, 20.0)),
        (rect(0.0, 0.0, 20.0, 20.0), rect(5.0, 25.0, 2.0, 2.0)),
        (rect(0.0, 0.0, 100.0, 100.0), rect(40.0, 40.0, 2.0, 2.0)),
    ];
    for &(ref a, ref b) in cases.iter() {
        assert_eq!(collides(a, b), collides(b, a));
    }
}

#[test]
fn test_touching_rects_do_not_collide() {
    let a = rect(0.0, 0.0, 20.0, 20.0);
    assert!(!collides(&a, &rect(20.0, 0.0, 20.0, 20.0)));
    assert!(!collides(&a, &rect(0.0, 20.0, 20.0, 20.0)));
    assert!(!collides(&a, &rect(-20.0, -20.0, 20.0, 20.0)));
    assert!(collides(&a, &rect(19.0, 0.0, 20.0, 20.0)));
    assert!(collides(&a, &rect(5.0, 5.0, 1.0, 1.0)));
}

// The rect and mask predicates are written in separating and overlap form
// respectively; they must agree, including on touching edges.
#[test]
fn test_rect_and_mask_boundary_conventions_agree() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    let others = [
        Rect::new(20.0, 0.0, 5.0, 5.0),
        Rect::new(-5.0, 0.0, 5.0, 5.0),
        Rect::new(0.0, 20.0, 5.0, 5.0),
        Rect::new(0.0, -5.0, 5.0, 5.0),
        Rect::new(19.5, 19.5, 5.0, 5.0),
        Rect::new(20.0, 20.0, 5.0, 5.0),
    ];
    for b in others.iter() {
        assert_eq!(rect_rect(&a, b), mask_mask(&[a], &[*b]));
    }
}

#[test]
fn test_mask_mask() {
    let a = dot_mask().place(v2(0.0, 0.0));
    // bounding boxes overlap at the corners, silhouettes do not
    assert!(!collides(&a, &dot_mask().place(v2(17.0, 17.0))));
    assert!(collides(&a, &dot_mask().place(v2(19.0, 0.0))));
    assert!(!collides(&a, &dot_mask().place(v2(20.0, 0.0))));
    assert!(collides(&a, &rect(5.0, 5.0, 1.0, 1.0)));
    assert!(!collides(&rect(0.0, 0.0, 3.0, 3.0), &a));
}

#[test]
fn test_closest_point_inside_rect() {
    let c = Circle::new(v2(100.0, 100.0), 10.0);
    let r = Rect::new(90.0, 90.0, 40.0, 40.0);
    assert_eq!(closest_point(&c, &r), v2(100.0, 100.0));
    assert!(circle_rect(&c, &r));
    assert!(collides(&circle(100.0, 100.0, 10.0), &rect(90.0, 90.0, 40.0, 40.0)));
}

#[test]
fn test_closest_point_outside_rect() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(closest_point(&Circle::new(v2(-5.0, 5.0), 1.0), &r), v2(0.0, 5.0));
    assert_eq!(closest_point(&Circle::new(v2(15.0, 15.0), 1.0), &r), v2(10.0, 10.0));
    assert_eq!(closest_point(&Circle::new(v2(5.0, -3.0), 1.0), &r), v2(5.0, 0.0));
}

#[test]
fn test_circle_rect_touching() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(!collides(&circle(15.0, 5.0, 5.0), &r));
    assert!(collides(&circle(14.0, 5.0, 5.0), &r));
    assert!(collides(&r, &circle(14.0, 5.0, 5.0)));
    // corner: distance 5 from (10, 10)
    assert!(!collides(&circle(13.0, 14.0, 5.0), &r));
    assert!(collides(&circle(13.0, 14.0, 5.1), &r));
}

#[test]
fn test_circle_circle() {
    let a = circle(0.0, 0.0, 10.0);
    assert!(!collides(&a, &circle(30.0, 40.0, 40.0)));
    assert!(collides(&a, &circle(30.0, 40.0, 40.5)));
    assert!(!collides(&a, &circle(0.0, 20.0, 10.0)));
    assert!(collides(&a, &circle(0.0, 19.0, 10.0)));
    assert!(collides(&a, &a.clone()));
}

#[test]
fn test_circle_mask() {
    let mask = dot_mask().place(v2(0.0, 0.0));
    // the top-left corner of the bounding box is empty in the silhouette
    assert!(!collides(&circle(-1.0, -1.0, 3.0), &mask));
    assert!(collides(&circle(10.0, -1.0, 2.0), &mask));
    assert!(collides(&mask, &circle(10.0, -1.0, 2.0)));
}
