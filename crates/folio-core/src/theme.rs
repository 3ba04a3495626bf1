//! Theme mode and the publish/subscribe store that owns it.
//!
//! The store is the only writer of the process-wide theme flag. Everything
//! else (the transition pulse, widgets, the status bar) subscribes and
//! reacts; subscribers are notified synchronously from `set`.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// Light/dark presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Broadcast to subscribers whenever the theme flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEvent {
    pub mode: ThemeMode,
}

/// Owner of the current theme mode.
///
/// `set` notifies every live subscriber synchronously and reports whether
/// the value actually changed; setting the current mode again is a no-op
/// and produces no event.
pub struct ThemeStore {
    mode: ThemeMode,
    subscribers: Vec<Sender<ThemeEvent>>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            subscribers: Vec::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Register a subscriber. Dropped receivers are pruned on the next
    /// notification, so teardown on the consumer side is just `drop`.
    pub fn subscribe(&mut self) -> Receiver<ThemeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Set the theme mode, notifying subscribers on change.
    ///
    /// Returns true if the mode changed.
    pub fn set(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        tracing::debug!(theme = mode.as_str(), "theme changed");

        let event = ThemeEvent { mode };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        true
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_mode() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        let rx = store.subscribe();

        assert!(store.set(ThemeMode::Dark));
        assert_eq!(rx.try_recv().unwrap().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_no_event_without_change() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        let rx = store.subscribe();

        assert!(!store.set(ThemeMode::Light));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        let rx = store.subscribe();
        drop(rx);

        // Must not panic, and the dead sender is removed.
        store.set(ThemeMode::Dark);
        assert_eq!(store.subscribers.len(), 0);
    }

    #[test]
    fn test_mode_roundtrip() {
        assert_eq!(ThemeMode::from_str("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_str("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_str("sepia"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
