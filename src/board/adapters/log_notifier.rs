//! Notifier that forwards notices to `tracing`.

use crate::board::ports::{BoardNotifier, Notice, NoticeLevel};

/// Emits each notice as a `tracing` event: successes at `info`, errors at
/// `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl BoardNotifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level() {
            NoticeLevel::Success => tracing::info!(notice = notice.message(), "board notice"),
            NoticeLevel::Error => tracing::warn!(notice = notice.message(), "board notice"),
        }
    }
}
