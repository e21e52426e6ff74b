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

//! Frame pump tying a `World` and its movers to a host that supplies input,
//! drawing and time.

use std::time::Duration;

use log::{debug, info};

use crate::camera::Camera;
use crate::core::{KeyEvent, Mover, World};
use crate::geom::{Collider, Vec2};

/// An event delivered by the host.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum HostEvent {
    /// The window was closed.
    Quit,
    /// A directional key edge.
    Key(KeyEvent),
}

/// The presentation service surrounding the simulation.
///
/// The host owns the window, the renderer and the clock; the frame pump only
/// consumes them through this trait.
pub trait Host {
    /// Returns the next pending event, or `None` once this frame's events are drained.
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Draws `collider` translated by `offset`.
    fn draw(&mut self, collider: &Collider, offset: Vec2);

    /// Shows the frame drawn so far.
    fn present(&mut self);

    /// Time elapsed since some fixed point, e.g. host start-up.
    fn now(&self) -> Duration;

    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// A fixed time budget per frame.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct FrameCap {
    budget: Duration,
}

impl FrameCap {
    /// Caps the frame rate at `fps` frames per second. Returns `None` if `fps` is 0.
    pub fn from_fps(fps: u32) -> Option<FrameCap> {
        if fps == 0 {
            None
        } else {
            Some(FrameCap {
                budget: Duration::from_secs(1) / fps,
            })
        }
    }

    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns how long to sleep after a frame that took `elapsed`, or `None` if the budget is used up.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed < self.budget {
            Some(self.budget - elapsed)
        } else {
            None
        }
    }
}

/// Frame counting for the average frame rate.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct FrameStats {
    /// Number of frames completed.
    pub frames: u64,
    /// Time from the start of the first frame to the end of the last.
    pub elapsed: Duration,
}

impl FrameStats {
    /// Average frames per second, or 0 if no time has elapsed.
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// Runs the poll, step, draw, present and sleep cycle.
#[derive(Clone, Debug, Default)]
pub struct FramePump {
    cap: Option<FrameCap>,
    camera: Option<Camera>,
    stats: FrameStats,
    started: Option<Duration>,
}

impl FramePump {
    /// An uncapped pump without a camera.
    pub fn new() -> FramePump {
        FramePump::default()
    }

    pub fn with_cap(mut self, cap: FrameCap) -> FramePump {
        self.cap = Some(cap);
        self
    }

    /// Makes the view follow the player, drawing everything relative to it.
    pub fn with_camera(mut self, camera: Camera) -> FramePump {
        self.camera = Some(camera);
        self
    }

    pub fn cap(&self) -> Option<FrameCap> {
        self.cap
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Runs one frame. Key events go to `movers[player]`.
    ///
    /// Returns `false`, without stepping or drawing, if the host asked to quit.
    pub fn tick<H: Host>(&mut self, host: &mut H, world: &mut World, movers: &mut [Mover], player: usize) -> bool {
        let frame_start = host.now();
        let started = *self.started.get_or_insert(frame_start);

        while let Some(event) = host.poll_event() {
            match event {
                HostEvent::Quit => {
                    info!("quit after {} frames", self.stats.frames);
                    return false;
                }
                HostEvent::Key(key) => {
                    if let Some(mover) = movers.get_mut(player) {
                        mover.handle_input(key);
                    }
                }
            }
        }

        world.advance(movers);

        let offset = match self.camera {
            Some(ref mut camera) => {
                if let Some(mover) = movers.get(player) {
                    camera.follow(&mover.bounds(), world.dims());
                }
                camera.offset()
            }
            None => Vec2::zero(),
        };

        let mut obstacle_ids: Vec<_> = world
            .obstacles()
            .map(|(id, _)| id)
            .filter(|&id| movers.iter().all(|mover| mover.id() != Some(id)))
            .collect();
        obstacle_ids.sort();
        for id in obstacle_ids {
            if let Some(obstacle) = world.obstacle(id) {
                host.draw(obstacle, offset);
            }
        }
        for mover in movers.iter() {
            host.draw(mover.collider(), offset);
        }
        host.present();
        self.stats.frames += 1;

        if let Some(cap) = self.cap {
            let elapsed = host.now().checked_sub(frame_start).unwrap_or_default();
            match cap.remaining(elapsed) {
                Some(rest) => host.sleep(rest),
                None => debug!("frame took {:?}, over the {:?} budget", elapsed, cap.budget()),
            }
        }
        self.stats.elapsed = host.now().checked_sub(started).unwrap_or_default();
        true
    }

    /// Runs frames until the host asks to quit, returning the final frame statistics.
    pub fn run<H: Host>(&mut self, host: &mut H, world: &mut World, movers: &mut [Mover], player: usize) -> FrameStats {
        info!("starting frame pump with {} movers", movers.len());
        while self.tick(host, world, movers, player) {}
        self.stats
    }
}
