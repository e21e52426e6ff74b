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

use std::error::Error;
use std::fmt;

/// Error returned when constructing a degenerate shape or world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidShapeError {
    /// A rectangle (or mask row, or world) with a zero or negative dimension.
    NonPositiveDims { width: f64, height: f64 },
    /// A circle with a zero or negative radius.
    NonPositiveRadius(f64),
    /// A mask with no rows.
    EmptyMask,
    /// A dimension or radius that is NaN or infinite.
    NonFinite,
}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidShapeError::NonPositiveDims { width, height } => {
                write!(f, "dims must be positive, got {} x {}", width, height)
            }
            InvalidShapeError::NonPositiveRadius(r) => write!(f, "radius must be positive, got {}", r),
            InvalidShapeError::EmptyMask => write!(f, "mask must have at least one row"),
            InvalidShapeError::NonFinite => write!(f, "shape dimensions must be finite"),
        }
    }
}

impl Error for InvalidShapeError {}

pub(crate) fn check_dims(width: f64, height: f64) -> Result<(), InvalidShapeError> {
    if !width.is_finite() || !height.is_finite() {
        Err(InvalidShapeError::NonFinite)
    } else if width <= 0.0 || height <= 0.0 {
        Err(InvalidShapeError::NonPositiveDims { width, height })
    } else {
        Ok(())
    }
}
