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

//! Settings for building a world and its frame pump, loadable from JSON.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::core::{Mover, World};
use crate::error::{check_dims, InvalidShapeError};
use crate::geom::{Shape, Vec2};
use crate::pump::{FrameCap, FramePump};

/// Size of the scrolling camera's view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub width: f64,
    pub height: f64,
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the world (or level, when a camera is used).
    pub world_width: f64,
    /// Height of the world.
    pub world_height: f64,
    /// Velocity added per held direction key.
    pub speed: f64,
    /// Frame rate cap; `None` or 0 runs uncapped.
    pub frame_rate: Option<u32>,
    /// Scrolling camera, for worlds larger than the window.
    pub camera: Option<CameraConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: 640.0,
            world_height: 480.0,
            speed: 10.0,
            frame_rate: Some(60),
            camera: None,
        }
    }
}

/// Error returned when loading a `Config`.
#[derive(Debug)]
pub enum ConfigError {
    /// The input was not valid JSON for a `Config`.
    Parse(serde_json::Error),
    /// The world or camera dimensions are degenerate.
    InvalidShape(InvalidShapeError),
    /// The speed is negative or not finite.
    InvalidSpeed(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::InvalidShape(e) => write!(f, "invalid config dimensions: {}", e),
            ConfigError::InvalidSpeed(speed) => write!(f, "speed must be non-negative, got {}", speed),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidShape(e) => Some(e),
            ConfigError::InvalidSpeed(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<InvalidShapeError> for ConfigError {
    fn from(e: InvalidShapeError) -> Self {
        ConfigError::InvalidShape(e)
    }
}

impl Config {
    /// Parses and validates a config. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks dimensions and speed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dims(self.world_width, self.world_height)?;
        if let Some(camera) = self.camera {
            check_dims(camera.width, camera.height)?;
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    /// Builds an empty world of the configured size.
    pub fn world(&self) -> Result<World, InvalidShapeError> {
        World::new(self.world_width, self.world_height)
    }

    /// Builds a resting mover at `pos` with the configured speed.
    pub fn mover(&self, shape: Shape, pos: Vec2) -> Mover {
        Mover::new(shape, pos, self.speed)
    }

    /// Builds a frame pump with the configured frame cap and camera.
    pub fn frame_pump(&self) -> FramePump {
        let mut pump = FramePump::new();
        if let Some(cap) = self.frame_rate.and_then(FrameCap::from_fps) {
            pump = pump.with_cap(cap);
        }
        if let Some(camera) = self.camera {
            pump = pump.with_camera(Camera::new(camera.width, camera.height));
        }
        pump
    }
}
