//! User feedback side effects: toasts and haptic pulses.
//!
//! The controller causes these but does not present them. The host app
//! plugs in its own [`Feedback`]; calls are fire-and-forget.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    /// Long-press that entered sortable mode.
    LongPress,
    /// A row moved.
    Move,
}

pub trait Feedback: Send + Sync {
    fn toast(&self, message: &str);
    fn haptic(&self, kind: HapticKind);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn toast(&self, _message: &str) {}
    fn haptic(&self, _kind: HapticKind) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Toast(String),
    Haptic(HapticKind),
}

/// Keeps every event in order. Useful for tests and previews.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    events: Mutex<Vec<FeedbackEvent>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FeedbackEvent> {
        self.lock().clone()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                FeedbackEvent::Toast(m) => Some(m.clone()),
                FeedbackEvent::Haptic(_) => None,
            })
            .collect()
    }

    pub fn haptics(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, FeedbackEvent::Haptic(_)))
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FeedbackEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Feedback for RecordingFeedback {
    fn toast(&self, message: &str) {
        self.lock().push(FeedbackEvent::Toast(message.to_string()));
    }

    fn haptic(&self, kind: HapticKind) {
        self.lock().push(FeedbackEvent::Haptic(kind));
    }
}
