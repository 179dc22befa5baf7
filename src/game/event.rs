//! Event System
//!
//! The simulation never plays sounds itself. Entities and the overlay queue
//! events during the tick; the host loop drains them after the frame's
//! updates and turns sound cues into audio.
//!
//! Example flow:
//! 1. A coin lands -> queues `SoundCue::Coin1`
//! 2. The host drains `events.sounds` -> plays the clip

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
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Short sound effects triggered by gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A passenger stepped out of the taxi
    Arrived,
    /// A person was picked up by the cursor
    Jump,
    /// Coin landed (two variants picked at random)
    Coin1,
    Coin2,
    /// Taxi pulls in from the left edge
    Taxi,
    /// Build menu button
    Select,
    /// Building placed
    Confirm,
    /// Preview cancelled
    Cancel,
    /// Dialog popped up
    Dialog,
}

impl SoundCue {
    pub const ALL: [SoundCue; 9] = [
        SoundCue::Arrived,
        SoundCue::Jump,
        SoundCue::Coin1,
        SoundCue::Coin2,
        SoundCue::Taxi,
        SoundCue::Select,
        SoundCue::Confirm,
        SoundCue::Cancel,
        SoundCue::Dialog,
    ];

    /// File stem under `assets/sounds/`
    pub fn file_stem(&self) -> &'static str {
        match self {
            SoundCue::Arrived => "arrived",
            SoundCue::Jump => "jump",
            SoundCue::Coin1 => "coin1",
            SoundCue::Coin2 => "coin2",
            SoundCue::Taxi => "taxi",
            SoundCue::Select => "select",
            SoundCue::Confirm => "confirm",
            SoundCue::Cancel => "cancel",
            SoundCue::Dialog => "ui1",
        }
    }
}

/// A building went up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedEvent {
    pub kind: super::BuildingKind,
    pub x: f32,
    pub cost: f64,
}

/// Container for all game events.
pub struct Events {
    /// Sounds to play after this frame's updates
    pub sounds: EventQueue<SoundCue>,

    /// Buildings placed this frame
    pub placed: EventQueue<PlacedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            sounds: EventQueue::new(),
            placed: EventQueue::new(),
        }
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();
        events.sounds.send(SoundCue::Confirm);
        assert_eq!(events.sounds.len(), 1);
        assert!(events.placed.is_empty());

        let drained: Vec<_> = events.sounds.drain().collect();
        assert_eq!(drained, vec![SoundCue::Confirm]);
        assert!(events.sounds.is_empty());
    }

    #[test]
    fn test_every_cue_has_a_distinct_file() {
        let mut stems: Vec<_> = SoundCue::ALL.iter().map(|c| c.file_stem()).collect();
        stems.sort();
        stems.dedup();
        assert_eq!(stems.len(), SoundCue::ALL.len());
    }
}
