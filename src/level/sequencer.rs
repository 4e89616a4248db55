//! Level sequencer
//!
//! Owns the ordered level list, the active index and the terminal state.
//! `advance` and `restart` are the only ways the registry's contents get
//! replaced; both are driven by `Transition` events the frame driver
//! collects, never called from inside entity code.

use super::LevelData;

/// Where the campaign stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    InProgress,
    /// Advanced past the last level. Terminal; nothing updates further.
    Complete,
}

pub struct Sequencer {
    levels: Vec<LevelData>,
    current: usize,
    progress: Progress,
}

impl Sequencer {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self {
            levels,
            current: 0,
            progress: Progress::InProgress,
        }
    }

    /// The active level's data, if the campaign is still running.
    pub fn current(&self) -> Option<&LevelData> {
        if self.progress == Progress::Complete {
            return None;
        }
        self.levels.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.progress == Progress::Complete
    }

    /// Move to the next level. Past the end the campaign completes; this is
    /// the one condition that stays terminal by design.
    pub fn advance(&mut self) {
        self.current += 1;
        if self.current >= self.levels.len() {
            self.progress = Progress::Complete;
            println!("No more levels - thanks for playing!");
        } else {
            println!("Loading level {} ({})", self.current + 1, self.levels[self.current].name);
        }
    }

    /// Stay on the current level (the caller rebuilds the registry).
    pub fn restart(&mut self) {
        if self.progress == Progress::InProgress {
            println!(
                "Restarting level {} ({})",
                self.current + 1,
                self.levels[self.current].name
            );
        }
    }
}
