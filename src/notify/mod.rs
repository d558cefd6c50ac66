//! Notification sinks
//!
//! Collection managers report user-visible events ("Added to cart!") through
//! a `NotificationSink` injected at construction. The sink is fire-and-forget:
//! the core never waits for or inspects a response.
//!
//! # Implementations
//!
//! - [`TerminalNotifier`]: prints each notification as a colored status line
//! - [`ToastBuffer`]: keeps notifications visible for a fixed time, for a
//!   renderer that draws toasts
//! - [`RecordingNotifier`]: keeps every notification, for tests
//! - [`NullNotifier`]: discards everything

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// How long a toast stays visible unless configured otherwise
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(2);

/// A user-visible message with an optional icon hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub icon: Option<String>,
}

impl Notification {
    /// Plain success notification; renderers pick their own default icon
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Status line: the icon hint, or a green check mark, then the message
    #[must_use]
    pub fn render(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.message),
            None => format!("{} {}", "✓".green(), self.message),
        }
    }
}

/// Receiver of fire-and-forget notifications
///
/// # Examples
///
/// ```
/// use tourdesk::notify::{Notification, NotificationSink, RecordingNotifier};
///
/// let sink = RecordingNotifier::new();
/// sink.notify(Notification::success("Added to cart!"));
/// assert_eq!(sink.messages(), vec!["Added to cart!".to_string()]);
/// ```
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Terminal implementation - one colored line per notification
///
/// Writes to stdout by default. Write errors (a closed pipe) are ignored.
pub struct TerminalNotifier {
    quiet: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_quiet(false)
    }

    /// Notifier that prints nothing when `quiet` is set
    #[must_use]
    pub fn with_quiet(quiet: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), quiet)
    }

    /// Notifier printing to the given writer
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>, quiet: bool) -> Self {
        Self {
            quiet,
            out: Mutex::new(out),
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        if self.quiet {
            return;
        }
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{}", notification.render());
    }
}

/// Time-bounded toast queue
///
/// Notifications stay visible for the configured TTL after they fire.
///
/// # Examples
///
/// ```
/// use tourdesk::notify::{Notification, NotificationSink, ToastBuffer};
///
/// let toasts = ToastBuffer::new();
/// toasts.notify(Notification::success("Removed from cart!"));
/// assert_eq!(toasts.visible().len(), 1);
/// ```
pub struct ToastBuffer {
    toasts: Mutex<Vec<(Notification, Instant)>>,
    ttl: Duration,
}

impl ToastBuffer {
    /// Create a toast buffer with the default TTL (2 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Notifications that have not expired yet, oldest first
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        let now = Instant::now();
        let toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);

        toasts
            .iter()
            .filter(|(_, at)| now.duration_since(*at) < self.ttl)
            .map(|(notification, _)| notification.clone())
            .collect()
    }

    /// Most recent notification that has not expired
    #[must_use]
    pub fn latest(&self) -> Option<Notification> {
        let now = Instant::now();
        let toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);

        toasts
            .iter()
            .rev()
            .find(|(_, at)| now.duration_since(*at) < self.ttl)
            .map(|(notification, _)| notification.clone())
    }

    /// Take every unexpired notification, oldest first, leaving the buffer empty
    pub fn drain(&self) -> Vec<Notification> {
        let now = Instant::now();
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);

        toasts
            .drain(..)
            .filter(|(_, at)| now.duration_since(*at) < self.ttl)
            .map(|(notification, _)| notification)
            .collect()
    }

    pub fn clear(&self) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for ToastBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastBuffer {
    fn notify(&self, notification: Notification) {
        let now = Instant::now();
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.retain(|(_, at)| now.duration_since(*at) < self.ttl);
        toasts.push((notification, now));
    }
}

/// Sink that keeps every notification in order
#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages only, in emission order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Sink that drops every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl NotificationSink for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer handle that keeps what was written readable after boxing
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_notifier_prints_rendered_line() {
        let buffer = SharedBuffer::default();
        let notifier = TerminalNotifier::with_writer(Box::new(buffer.clone()), false);

        notifier.notify(Notification::success("Removed from favorites!").with_icon("💔"));
        assert_eq!(buffer.contents(), "💔 Removed from favorites!\n");
    }

    #[test]
    fn test_terminal_notifier_quiet_prints_nothing() {
        let buffer = SharedBuffer::default();
        let notifier = TerminalNotifier::with_writer(Box::new(buffer.clone()), true);

        notifier.notify(Notification::success("Added to cart!"));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_render_default_icon() {
        colored::control::set_override(false);
        assert_eq!(Notification::success("Added to cart!").render(), "✓ Added to cart!");
    }

    #[test]
    fn test_notification_with_icon() {
        let notification = Notification::success("Added to favorites!").with_icon("❤️");
        assert_eq!(notification.message, "Added to favorites!");
        assert_eq!(notification.icon.as_deref(), Some("❤️"));
    }

    #[test]
    fn test_toast_buffer_keeps_order() {
        let toasts = ToastBuffer::new();
        toasts.notify(Notification::success("first"));
        toasts.notify(Notification::success("second"));

        let visible = toasts.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].message, "first");
        assert_eq!(toasts.latest().unwrap().message, "second");
    }

    #[test]
    fn test_toast_buffer_default_ttl() {
        assert_eq!(ToastBuffer::new().ttl(), Duration::from_secs(2));
    }

    #[test]
    fn test_toast_buffer_expires() {
        let toasts = ToastBuffer::with_ttl(Duration::from_millis(50));
        toasts.notify(Notification::success("short-lived"));
        assert_eq!(toasts.visible().len(), 1);

        std::thread::sleep(Duration::from_millis(100));
        assert!(toasts.visible().is_empty());
        assert!(toasts.latest().is_none());
    }

    #[test]
    fn test_toast_buffer_drain_empties() {
        let toasts = ToastBuffer::new();
        toasts.notify(Notification::success("one"));
        toasts.notify(Notification::success("two"));

        let drained: Vec<String> = toasts.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(drained, vec!["one", "two"]);
        assert!(toasts.drain().is_empty());
    }

    #[test]
    fn test_toast_buffer_drain_skips_expired() {
        let toasts = ToastBuffer::with_ttl(Duration::from_millis(50));
        toasts.notify(Notification::success("stale"));
        std::thread::sleep(Duration::from_millis(100));
        assert!(toasts.drain().is_empty());
    }

    #[test]
    fn test_toast_buffer_clear() {
        let toasts = ToastBuffer::new();
        toasts.notify(Notification::success("gone"));
        toasts.clear();
        assert!(toasts.visible().is_empty());
    }

    #[test]
    fn test_recording_notifier() {
        let sink = RecordingNotifier::new();
        assert!(sink.is_empty());

        sink.notify(Notification::success("one"));
        sink.notify(Notification::success("two").with_icon("💔"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["one".to_string(), "two".to_string()]);
        assert_eq!(sink.notifications()[1].icon.as_deref(), Some("💔"));
    }

    #[test]
    fn test_null_notifier_accepts_everything() {
        let sink: Arc<dyn NotificationSink> = Arc::new(NullNotifier);
        sink.notify(Notification::success("ignored"));
    }
}
