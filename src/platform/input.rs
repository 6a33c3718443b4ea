//! Input events
//!
//! Hosts push events as they arrive; the frame loop drains them before the
//! next update so the particle collection is never mutated mid-update.

use std::collections::VecDeque;

use glam::Vec2;

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Spawn `count` particles around `at`
    Spawn { at: Vec2, count: usize },
    /// Stop the simulation
    Close,
}

/// FIFO of pending input events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue a spawn request (pointer click)
    pub fn spawn_at(&mut self, at: Vec2, count: usize) {
        self.push(InputEvent::Spawn { at, count });
    }

    pub fn close(&mut self) {
        self.push(InputEvent::Close);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order() {
        let mut queue = EventQueue::new();
        queue.spawn_at(Vec2::new(1.0, 2.0), 10);
        queue.close();
        assert_eq!(queue.len(), 2);

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Spawn {
                    at: Vec2::new(1.0, 2.0),
                    count: 10
                },
                InputEvent::Close,
            ]
        );
        assert!(queue.is_empty());
    }
}
