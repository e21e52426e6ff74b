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

use crate::geom::Card;

/// Whether a key went down or came up.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A discrete directional key edge, as delivered by the host.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct KeyEvent {
    /// The direction the key stands for.
    pub card: Card,
    /// Whether the key went down or came up.
    pub state: KeyState,
    /// `true` if the host generated this event by key auto-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    /// A non-repeat key-down event.
    pub fn pressed(card: Card) -> KeyEvent {
        KeyEvent { card, state: KeyState::Pressed, repeat: false }
    }

    /// A non-repeat key-up event.
    pub fn released(card: Card) -> KeyEvent {
        KeyEvent { card, state: KeyState::Released, repeat: false }
    }

    /// Marks the event as an auto-repeat.
    pub fn repeated(mut self) -> KeyEvent {
        self.repeat = true;
        self
    }
}
