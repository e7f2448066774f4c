use crate::core::page::{Element, UiContext};
use crate::core::timers::{PageTask, TimerQueue};
use crate::core::{Clipboard, ConfigProvider};
use std::sync::Arc;

pub const COPIED_CLASS: &str = "copied";
pub const COPIED_LABEL: &str = "✓ Copied!";
const FALLBACK_FIELD_ID: &str = "copy-fallback";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedWithFallback,
    Failed,
    /// The page has no copy button or code block.
    NotWired,
}

pub struct CodeCopyControl {
    clipboard: Arc<dyn Clipboard>,
    revert_ms: u64,
}

impl CodeCopyControl {
    pub fn new(clipboard: Arc<dyn Clipboard>, revert_ms: u64) -> Self {
        Self {
            clipboard,
            revert_ms,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(
        clipboard: Arc<dyn Clipboard>,
        config: &C,
    ) -> Self {
        Self::new(clipboard, config.copy_revert_ms())
    }

    pub async fn copy(
        &self,
        ctx: &mut UiContext,
        timers: &mut TimerQueue<PageTask>,
        now_ms: u64,
    ) -> CopyOutcome {
        let Some(text) = ctx.code_copy.as_ref().map(|w| w.code_content.text.clone()) else {
            return CopyOutcome::NotWired;
        };

        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                if let Some(widget) = ctx.code_copy.as_mut() {
                    let original_label =
                        std::mem::replace(&mut widget.copy_text.text, COPIED_LABEL.to_string());
                    widget.button.add_class(COPIED_CLASS);
                    widget.copy_icon.set_style("display", "none");
                    timers.schedule(
                        now_ms,
                        self.revert_ms,
                        PageTask::RevertCopied {
                            label: Some(original_label),
                        },
                    );
                }
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::debug!("Clipboard API failed, using legacy copy: {}", e);
                self.fallback_copy(ctx, timers, now_ms, text)
            }
        }
    }

    /// Copies through an invisible, selected text field. The field is always
    /// removed again.
    fn fallback_copy(
        &self,
        ctx: &mut UiContext,
        timers: &mut TimerQueue<PageTask>,
        now_ms: u64,
        text: String,
    ) -> CopyOutcome {
        let mut field = Element::with_id(FALLBACK_FIELD_ID).with_attribute("tag", "textarea");
        field.value = text;
        field.set_style("position", "fixed");
        field.set_style("opacity", "0");
        field.selected = true;
        let selection = field.value.clone();
        ctx.body_children.push(field);

        let outcome = match self.clipboard.exec_copy(&selection) {
            Ok(()) => {
                if let Some(widget) = ctx.code_copy.as_mut() {
                    widget.button.add_class(COPIED_CLASS);
                }
                timers.schedule(now_ms, self.revert_ms, PageTask::RevertCopied { label: None });
                CopyOutcome::CopiedWithFallback
            }
            Err(e) => {
                tracing::error!("Failed to copy: {}", e);
                CopyOutcome::Failed
            }
        };

        ctx.body_children
            .retain(|child| child.id.as_deref() != Some(FALLBACK_FIELD_ID));
        outcome
    }
}
