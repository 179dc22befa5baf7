//! Timed dialogs
//!
//! Scripted messages that pop up a fixed time into the game. While one is
//! showing the game is halted (people and traffic freeze) until the player
//! presses the acknowledge key. Dialogs fire in the order they become due.

use crate::config::DialogSettings;
use crate::game::{Events, SoundCue};
use crate::ui::FrameInput;

#[derive(Debug, Clone, PartialEq)]
pub struct TimedDialog {
    /// Seconds after the game loop started
    pub after_secs: f64,
    pub text: String,
    triggered: bool,
    done: bool,
}

impl TimedDialog {
    pub fn new(after_secs: f64, text: impl Into<String>) -> Self {
        Self {
            after_secs,
            text: text.into(),
            triggered: false,
            done: false,
        }
    }

    pub fn is_due(&self, elapsed: f64) -> bool {
        !self.done && elapsed >= self.after_secs
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogQueue {
    pending: Vec<TimedDialog>,
}

impl DialogQueue {
    pub fn new(dialogs: &[DialogSettings]) -> Self {
        Self {
            pending: dialogs
                .iter()
                .map(|d| TimedDialog::new(d.after_secs, d.text.clone()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The dialog on screen right now
    pub fn active(&self, elapsed: f64) -> Option<&TimedDialog> {
        self.pending.iter().find(|d| d.is_due(elapsed))
    }

    /// Advance the queue. Returns whether the game should stay halted.
    pub fn update(&mut self, input: &FrameInput, events: &mut Events) -> bool {
        let elapsed = input.elapsed;
        let Some(dialog) = self.pending.iter_mut().find(|d| d.is_due(elapsed)) else {
            return false;
        };

        if !dialog.triggered {
            dialog.triggered = true;
            events.sounds.send(SoundCue::Dialog);
            log::info!("Dialog at {:.1}s: {}", elapsed, dialog.text.lines().next().unwrap_or_default());
        }
        if input.acknowledge_pressed {
            dialog.done = true;
        }

        self.pending.retain(|d| !d.done);
        self.active(elapsed).is_some()
    }
}
