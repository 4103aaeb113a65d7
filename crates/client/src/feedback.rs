//! User-facing notices
//!
//! The transport never renders anything; it and its callers describe
//! feedback as data and hand it to whatever sink the surface provides — a
//! toast in a page, colored lines in a terminal, plain log records headless.

use std::time::Duration;

/// How long a rendering surface keeps a transient notice visible
pub const TOAST_DISMISS: Duration = Duration::from_secs(3);

/// Dismissal window for the heavier page-level messages
pub const MESSAGE_DISMISS: Duration = Duration::from_secs(5);

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Sucesso,
    Erro,
    Aviso,
    Info,
}

/// One user-facing message
///
/// Notices stack: each is delivered independently and never replaces an
/// earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn sucesso(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Sucesso, text)
    }

    pub fn erro(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Erro, text)
    }

    pub fn aviso(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Aviso, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }
}

/// Rendering seam for notices
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Busy indicator shown while a call is in flight
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Keeps the indicator up for its lifetime; dropping hides it, so an early
/// return cannot leave the overlay on screen
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

/// Show the indicator until the returned guard drops
pub fn begin_loading(indicator: &dyn LoadingIndicator) -> LoadingGuard<'_> {
    indicator.show();
    LoadingGuard { indicator }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Headless sink: notices become log records
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Sucesso | NoticeKind::Info => tracing::info!("{}", notice.text),
            NoticeKind::Aviso => tracing::warn!("{}", notice.text),
            NoticeKind::Erro => tracing::error!("{}", notice.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_kinds() {
        assert_eq!(Notice::sucesso("ok").kind, NoticeKind::Sucesso);
        assert_eq!(Notice::erro("x").kind, NoticeKind::Erro);
        assert_eq!(Notice::aviso("x").kind, NoticeKind::Aviso);
        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
    }

    #[test]
    fn toast_window_is_shorter_than_message_window() {
        assert!(TOAST_DISMISS < MESSAGE_DISMISS);
    }
}
