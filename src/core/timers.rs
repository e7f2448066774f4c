use crate::core::code_copy::COPIED_CLASS;
use crate::core::page::UiContext;
use std::collections::BTreeMap;

/// Deferred page mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTask {
    /// Put a skill bar back to its target width after the reset.
    RestoreBarWidth { bar_id: String, width: String },
    /// Clear the copy confirmation; `label` is restored when the label and
    /// icon were swapped.
    RevertCopied { label: Option<String> },
}

impl PageTask {
    pub fn apply(self, ctx: &mut UiContext) {
        match self {
            PageTask::RestoreBarWidth { bar_id, width } => {
                if let Some(bar) = ctx
                    .skill_bars
                    .iter_mut()
                    .find(|bar| bar.id.as_deref() == Some(bar_id.as_str()))
                {
                    bar.set_style("width", width);
                }
            }
            PageTask::RevertCopied { label } => {
                let Some(widget) = ctx.code_copy.as_mut() else {
                    return;
                };
                widget.button.remove_class(COPIED_CLASS);
                if let Some(label) = label {
                    widget.copy_icon.set_style("display", "inline");
                    widget.copy_text.text = label;
                }
            }
        }
    }
}

/// Deterministic stand-in for host timers. Deadlines are absolute
/// milliseconds on the page clock; tasks scheduled for the same deadline
/// fire in scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(u64, u64), T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: T) {
        let key = (now_ms.saturating_add(delay_ms), self.next_seq);
        self.next_seq += 1;
        self.pending.insert(key, task);
    }

    /// Removes and returns every task whose deadline is at or before `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<T> {
        let later = self.pending.split_off(&(now_ms.saturating_add(1), 0));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
