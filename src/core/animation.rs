use crate::core::page::UiContext;
use crate::core::timers::{PageTask, TimerQueue};
use crate::core::visibility::VisibilityTracker;
use crate::core::ConfigProvider;
use std::collections::BTreeMap;

/// Linear count-up driven by animation-frame timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    start: i64,
    end: i64,
    duration_ms: f64,
    started_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms: duration_ms as f64,
            started_at: None,
        }
    }

    /// The first frame fixes the start time. The final frame shows exactly
    /// `end`.
    pub fn frame(&mut self, timestamp_ms: f64) -> CounterFrame {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let progress = ((timestamp_ms - started_at) / self.duration_ms).clamp(0.0, 1.0);

        if progress < 1.0 {
            let span = (self.end - self.start) as f64;
            CounterFrame {
                value: (progress * span + self.start as f64).floor() as i64,
                finished: false,
            }
        } else {
            CounterFrame {
                value: self.end,
                finished: true,
            }
        }
    }
}

/// Counts `.stat-number` elements up to their `data-target` once each.
#[derive(Debug, Clone)]
pub struct StatCounterAnimator {
    tracker: VisibilityTracker,
    duration_ms: u64,
    running: BTreeMap<String, CounterAnimation>,
}

impl StatCounterAnimator {
    pub fn new(threshold: f64, duration_ms: u64) -> Self {
        Self {
            tracker: VisibilityTracker::new(threshold),
            duration_ms,
            running: BTreeMap::new(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.visibility_threshold(), config.counter_duration_ms())
    }

    /// Starts the counter for `stat_id` on its first qualifying visibility
    /// report. Returns whether an animation started.
    pub fn on_visibility(&mut self, ctx: &UiContext, stat_id: &str, ratio: f64) -> bool {
        let Some(stat) = ctx
            .stats
            .iter()
            .find(|stat| stat.id.as_deref() == Some(stat_id))
        else {
            return false;
        };
        if !self.tracker.should_trigger(stat_id, ratio) {
            return false;
        }

        let raw_target = stat.attribute("data-target").unwrap_or_default();
        match raw_target.trim().parse::<i64>() {
            Ok(target) => {
                self.running.insert(
                    stat_id.to_string(),
                    CounterAnimation::new(0, target, self.duration_ms),
                );
                true
            }
            Err(e) => {
                tracing::error!("Invalid stat target '{}' on {}: {}", raw_target, stat_id, e);
                false
            }
        }
    }

    pub fn on_animation_frame(&mut self, ctx: &mut UiContext, timestamp_ms: f64) {
        self.running.retain(|stat_id, animation| {
            let frame = animation.frame(timestamp_ms);
            if let Some(stat) = ctx
                .stats
                .iter_mut()
                .find(|stat| stat.id.as_deref() == Some(stat_id.as_str()))
            {
                stat.text = frame.value.to_string();
            }
            !frame.finished
        });
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }
}

/// Replays each skill bar's fill the first time it scrolls into view.
#[derive(Debug, Clone)]
pub struct SkillBarAnimator {
    tracker: VisibilityTracker,
    restore_delay_ms: u64,
}

impl SkillBarAnimator {
    pub fn new(threshold: f64, restore_delay_ms: u64) -> Self {
        Self {
            tracker: VisibilityTracker::new(threshold),
            restore_delay_ms,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.visibility_threshold(), config.bar_restore_delay_ms())
    }

    /// Bars are re-created on every skills render.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    pub fn on_visibility(
        &mut self,
        ctx: &mut UiContext,
        timers: &mut TimerQueue<PageTask>,
        now_ms: u64,
        bar_id: &str,
        ratio: f64,
    ) -> bool {
        let Some(bar) = ctx
            .skill_bars
            .iter_mut()
            .find(|bar| bar.id.as_deref() == Some(bar_id))
        else {
            return false;
        };
        if !self.tracker.should_trigger(bar_id, ratio) {
            return false;
        }

        let width = bar.style_value("width").unwrap_or_default().to_string();
        bar.set_style("width", "0%");
        timers.schedule(
            now_ms,
            self.restore_delay_ms,
            PageTask::RestoreBarWidth {
                bar_id: bar_id.to_string(),
                width,
            },
        );
        true
    }
}
