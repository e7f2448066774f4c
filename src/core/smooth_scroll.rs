use crate::core::page::{ScrollBehavior, ScrollRequest, UiContext};
use crate::core::ConfigProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub scrolled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollHandler {
    offset_px: f64,
}

impl Default for SmoothScrollHandler {
    fn default() -> Self {
        Self { offset_px: 80.0 }
    }
}

impl SmoothScrollHandler {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            offset_px: config.scroll_offset_px(),
        }
    }

    /// Handles a click on an in-page anchor (`href="#id"`). Default
    /// navigation is always suppressed; the viewport only moves when the
    /// target exists.
    pub fn on_anchor_click(&self, ctx: &mut UiContext, href: &str) -> ClickOutcome {
        let target_top = href
            .strip_prefix('#')
            .filter(|id| !id.is_empty())
            .and_then(|id| ctx.section_by_id(id))
            .map(|target| target.offset_top);

        match target_top {
            Some(top) => {
                ctx.viewport.scroll_to(ScrollRequest {
                    top: top - self.offset_px,
                    behavior: ScrollBehavior::Smooth,
                });
                ClickOutcome {
                    default_prevented: true,
                    scrolled: true,
                }
            }
            None => {
                tracing::debug!("Anchor target '{}' not found", href);
                ClickOutcome {
                    default_prevented: true,
                    scrolled: false,
                }
            }
        }
    }
}
