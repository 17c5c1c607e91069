//! Per-frame input snapshot fed to the engine by the button poller.

use crate::cursor::Direction;

/// Push events that fired during one control-loop tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub rotate: bool,
    pub confirm: bool,
}

impl FrameInput {
    /// Snapshot with a single directional push.
    pub fn moving(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::North => input.north = true,
            Direction::South => input.south = true,
            Direction::East => input.east = true,
            Direction::West => input.west = true,
        }
        input
    }

    /// Snapshot with only the rotate button pushed.
    pub fn rotating() -> Self {
        Self {
            rotate: true,
            ..Self::default()
        }
    }

    /// Snapshot with only the confirm push.
    pub fn confirming() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    /// The one direction handled this frame. Simultaneous pushes resolve
    /// north, south, west, east in that order.
    pub fn direction(&self) -> Option<Direction> {
        if self.north {
            Some(Direction::North)
        } else if self.south {
            Some(Direction::South)
        } else if self.west {
            Some(Direction::West)
        } else if self.east {
            Some(Direction::East)
        } else {
            None
        }
    }

    /// True when nothing fired.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Turns level-sampled button states into push events, so a held button
/// produces exactly one event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    previous: FrameInput,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the buttons currently held down; returns what was pushed since
    /// the last call.
    pub fn update(&mut self, held: FrameInput) -> FrameInput {
        let prev = self.previous;
        self.previous = held;
        FrameInput {
            north: held.north && !prev.north,
            south: held.south && !prev.south,
            east: held.east && !prev.east,
            west: held.west && !prev.west,
            rotate: held.rotate && !prev.rotate,
            confirm: held.confirm && !prev.confirm,
        }
    }
}
