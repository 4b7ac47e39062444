//! Transient user-facing status messages.

/// Notification kind, mirroring the success/error toast taxonomy of the
/// browser original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

/// Writes tagged status lines to stderr.
///
/// Success messages are suppressed in quiet mode; errors are always shown,
/// since no failure may be silently swallowed.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    quiet: bool,
}

impl Notifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn notify(&self, kind: Kind, message: &str) {
        match kind {
            Kind::Success => self.success(message),
            Kind::Error => self.error(message),
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("ok: {message}");
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
