//! Frame events
//!
//! Entities don't call the audio system or the level sequencer directly.
//! They push events into per-frame queues that the frame driver drains
//! after the update sweep:
//! 1. Entity detects something (attack lands, flag reached) → sends event
//! 2. Audio system drains cue events → plays sounds
//! 3. Sequencer drains transition events → rebuilds the level
//!
//! This keeps level control an injected capability instead of a global the
//! entity code reaches for.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete audio cues. Fire-and-forget: the core raises them, the audio
/// bank decides what (if anything) actually plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Jump,
    Dash,
    Slash,
    PlayerDeath,
    EnemyHurt,
    Shot,
    BossLaugh,
    CheckpointReached,
    HealthPickup,
    CoinPickup,
    LevelMusic(usize),
}

/// Level transition requests. Only the sequencer acts on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The flag was reached: move to the next level
    Advance,
    /// Rebuild the current level from scratch
    Restart,
}

/// Container for all per-frame event queues.
pub struct Events {
    /// Audio cues raised this frame
    pub cues: EventQueue<Cue>,
    /// Level transition requests raised this frame
    pub transitions: EventQueue<Transition>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            cues: EventQueue::new(),
            transitions: EventQueue::new(),
        }
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.cues.clear();
        self.transitions.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}
