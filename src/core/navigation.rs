use crate::core::page::UiContext;
use crate::core::ConfigProvider;

pub const MENU_OPEN_CLASS: &str = "active";
pub const ACTIVE_LINK_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationController {
    scrolled_threshold_px: f64,
    section_offset_px: f64,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            section_offset_px: 100.0,
        }
    }
}

impl NavigationController {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            scrolled_threshold_px: config.scrolled_threshold_px(),
            section_offset_px: config.section_offset_px(),
        }
    }

    pub fn toggle_mobile_menu(&self, ctx: &mut UiContext) {
        if ctx.hamburger.is_none() {
            return;
        }
        ctx.nav_menu.toggle_class(MENU_OPEN_CLASS);
    }

    pub fn close_mobile_menu_on_link_click(&self, ctx: &mut UiContext) {
        ctx.nav_menu.remove_class(MENU_OPEN_CLASS);
    }

    /// Scroll handler: records the offset, then refreshes navbar state and
    /// the active link.
    pub fn on_scroll(&self, ctx: &mut UiContext, scroll_y: f64) {
        ctx.viewport.scroll_y = scroll_y;
        self.update_navbar_on_scroll(ctx);
        self.update_active_nav_link(ctx);
    }

    pub fn update_navbar_on_scroll(&self, ctx: &mut UiContext) {
        if ctx.viewport.scroll_y > self.scrolled_threshold_px {
            ctx.navbar.add_class(SCROLLED_CLASS);
        } else {
            ctx.navbar.remove_class(SCROLLED_CLASS);
        }
    }

    /// Highlights the link of every section whose band
    /// `[top - offset, top - offset + height)` contains the scroll offset.
    /// Sections are visited in page order, so the last match wins.
    pub fn update_active_nav_link(&self, ctx: &mut UiContext) {
        let scroll_y = ctx.viewport.scroll_y;
        let matching: Vec<String> = ctx
            .sections
            .iter()
            .filter_map(|section| {
                let id = section.id.as_deref()?;
                let top = section.offset_top - self.section_offset_px;
                (scroll_y >= top && scroll_y < top + section.offset_height)
                    .then(|| id.to_string())
            })
            .collect();

        for section_id in matching {
            for link in ctx.nav_links.iter_mut() {
                link.remove_class(ACTIVE_LINK_CLASS);
            }
            match ctx.nav_link_for(&section_id) {
                Some(link) => link.add_class(ACTIVE_LINK_CLASS),
                None => tracing::debug!("No nav link for section '{}'", section_id),
            }
        }
    }
}
