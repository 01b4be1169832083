//! Transient status messages.
//!
//! The status banner holds at most one message at a time. Showing a new
//! message replaces the slot outright, so a pending hide of the previous
//! message can never clip the new one: each message is judged only against
//! its own expiry instant. The owner decides when "now" is by feeding
//! [`StatusMessage::is_expired_at`] through a tick event.

use chrono::{DateTime, Duration, Utc};

/// Classification of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class applied to the banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient banner message with a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: DateTime<Utc>,
}

impl StatusMessage {
    /// Create a message shown at `now` and visible for `visible_for`.
    #[must_use]
    pub fn show(
        text: impl Into<String>,
        kind: StatusKind,
        now: DateTime<Utc>,
        visible_for: Duration,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now + visible_for,
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message classification.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Whether the message should be hidden as of `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_second(s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, s).unwrap()
    }

    #[test]
    fn test_expires_after_visible_window() {
        let message = StatusMessage::show(
            "Purchase added",
            StatusKind::Success,
            at_second(0),
            Duration::seconds(3),
        );

        assert!(!message.is_expired_at(at_second(0)));
        assert!(!message.is_expired_at(at_second(2)));
        assert!(message.is_expired_at(at_second(3)));
        assert!(message.is_expired_at(at_second(10)));
    }

    #[test]
    fn test_replacement_outlives_predecessors_window() {
        // First message shown at t=0 would have been hidden at t=3; the
        // replacement shown at t=1 must still be visible then.
        let _first = StatusMessage::show(
            "Purchase added",
            StatusKind::Success,
            at_second(0),
            Duration::seconds(3),
        );
        let second = StatusMessage::show(
            "Device is out of stock",
            StatusKind::Error,
            at_second(1),
            Duration::seconds(3),
        );

        assert!(!second.is_expired_at(at_second(3)));
        assert!(second.is_expired_at(at_second(4)));
    }

    #[test]
    fn test_kind_css_classes() {
        assert_eq!(StatusKind::Success.css_class(), "success");
        assert_eq!(StatusKind::Error.css_class(), "error");
    }
}
