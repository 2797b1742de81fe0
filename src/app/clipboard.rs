use std::time::Duration;

use anyhow::{Context, Result};

pub(super) const COPY_LABEL: &str = "Copy Code";
pub(super) const COPIED_LABEL: &str = "Copied!";
pub(super) const COPY_CONFIRMATION: Duration = Duration::from_millis(2000);

pub(super) trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first use.
#[derive(Default)]
pub(super) struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn ensure(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("clipboard is unavailable")?);
        }
        self.inner
            .as_mut()
            .context("clipboard handle missing after initialization")
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.ensure()?
            .set_text(text.to_owned())
            .context("clipboard rejected the text")
    }
}

/// Label state of the copy button. Times are seconds on the UI clock.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct CopyFeedback {
    copied_at: Option<f64>,
}

impl CopyFeedback {
    pub(super) fn mark_copied(&mut self, now: f64) {
        self.copied_at = Some(now);
    }

    pub(super) fn clear(&mut self) {
        self.copied_at = None;
    }

    pub(super) fn is_confirming(&self, now: f64) -> bool {
        self.copied_at
            .is_some_and(|copied_at| now - copied_at < COPY_CONFIRMATION.as_secs_f64())
    }

    pub(super) fn label(&self, now: f64) -> &'static str {
        if self.is_confirming(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

/// Copies `text`, updating the feedback only on success.
pub(super) fn copy_with_feedback(
    clipboard: &mut dyn Clipboard,
    feedback: &mut CopyFeedback,
    text: &str,
    now: f64,
) -> Result<()> {
    clipboard.set_text(text)?;
    feedback.mark_copied(now);
    Ok(())
}
