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

//! Scrolling camera for levels larger than the visible area.

use crate::geom::{Rect, Vec2};

/// A view rectangle that follows a target inside a level.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Camera {
    view: Rect,
}

impl Camera {
    /// Constructs a camera with a view of the given size, positioned at the origin.
    pub fn new(width: f64, height: f64) -> Camera {
        Camera {
            view: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Returns the visible area, in level coordinates.
    #[inline]
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Returns the offset to add to level coordinates to get screen coordinates.
    pub fn offset(&self) -> Vec2 {
        -self.view.pos()
    }

    /// Centers the view on `target`, keeping the view inside a level of size `level`.
    ///
    /// If the level is smaller than the view along an axis, the view is pinned to 0 on that axis.
    pub fn follow(&mut self, target: &Rect, level: Vec2) {
        let center = target.center();
        self.view.x = clamp_view(center.x - self.view.w * 0.5, self.view.w, level.x);
        self.view.y = clamp_view(center.y - self.view.h * 0.5, self.view.h, level.y);
    }
}

fn clamp_view(pos: f64, view: f64, level: f64) -> f64 {
    pos.min(level - view).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;

    const LEVEL: Vec2 = Vec2 { x: 960.0, y: 720.0 };

    #[test]
    fn test_follow_centers_target() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.follow(&Rect::new(470.0, 350.0, 20.0, 20.0), LEVEL);
        assert_eq!(camera.view(), Rect::new(160.0, 120.0, 640.0, 480.0));
        assert_eq!(camera.offset(), v2(-160.0, -120.0));
    }

    #[test]
    fn test_follow_clamps_to_level() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.follow(&Rect::new(0.0, 0.0, 20.0, 20.0), LEVEL);
        assert_eq!(camera.view().pos(), v2(0.0, 0.0));
        camera.follow(&Rect::new(940.0, 700.0, 20.0, 20.0), LEVEL);
        assert_eq!(camera.view().pos(), v2(320.0, 240.0));
    }

    #[test]
    fn test_small_level_pins_view() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.follow(&Rect::new(200.0, 100.0, 20.0, 20.0), v2(400.0, 300.0));
        assert_eq!(camera.view().pos(), v2(0.0, 0.0));
    }
}
