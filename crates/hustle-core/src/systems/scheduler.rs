//! Deferred continuations - a timer queue polled once per tick.
//!
//! The sleep fade is the main client: falling asleep schedules a wake
//! continuation a few seconds out instead of blocking the tick loop on the
//! fade animation.

use crate::events::EventKey;

/// Work to run when its timer expires.
#[derive(Debug, Clone, PartialEq)]
pub enum Continuation {
    /// Finish a sleep: apply energy, clock and counter effects for the
    /// slept minutes, then show the wake-up message.
    Wake { minutes: f32 },
    /// Re-enter the event dispatcher with a stored key.
    Dispatch(EventKey),
}

#[derive(Debug, Clone)]
struct Pending {
    remaining: f32,
    task: Continuation,
}

/// Single-threaded deferred-task queue.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_seconds: f32, task: Continuation) {
        self.queue.push(Pending {
            remaining: delay_seconds.max(0.0),
            task,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Advance timers by `dt` and return the continuations that came due,
    /// in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<Continuation> {
        for pending in &mut self.queue {
            pending.remaining -= dt;
        }

        let mut due = Vec::new();
        let mut index = 0;
        while index < self.queue.len() {
            if self.queue[index].remaining <= 0.0 {
                due.push(self.queue.remove(index).task);
            } else {
                index += 1;
            }
        }
        due
    }
}
