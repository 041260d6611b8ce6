//! Platform abstraction layer
//!
//! Input reaches the core as discrete events pulled from an `EventSource`;
//! the actual window/input backend lives outside this crate. Keys the game
//! does not react to are dropped at the source.

use std::collections::VecDeque;

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerClick(Vec2),
    /// Window close request
    Quit,
}

/// Source of pending input events, drained once per tick
pub trait EventSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Replays a pre-recorded list of (tick, event) pairs. Used by the demo
/// binary and tests in place of a real input backend.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<(u64, InputEvent)>,
    tick: u64,
}

impl ScriptedEvents {
    /// Events must be sorted by tick
    pub fn new(events: impl IntoIterator<Item = (u64, InputEvent)>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            tick: 0,
        }
    }

    /// Move to the next tick; events scheduled later stay queued.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Option<InputEvent> {
        match self.queue.front() {
            Some((due, _)) if *due <= self.tick => self.queue.pop_front().map(|(_, event)| event),
            _ => None,
        }
    }
}
