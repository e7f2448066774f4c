use portfolio_client::core::app::Action;
use portfolio_client::core::code_copy::{CopyOutcome, COPIED_CLASS, COPIED_LABEL};
use portfolio_client::core::page::{ScrollBehavior, ScrollRequest};
use portfolio_client::core::smooth_scroll::ClickOutcome;
use portfolio_client::{
    App, ClientConfig, Event, MemoryClipboard, Outcome, ReqwestHttpClient, Target, UiContext,
};
use std::sync::Arc;

const SNIPPET: &str = "cargo install portfolio-client";

fn page() -> UiContext {
    UiContext::new()
        .with_section("home", 0.0, 700.0)
        .with_section("about", 700.0, 900.0)
        .with_section("contact", 1600.0, 600.0)
        .with_nav_link("#home")
        .with_nav_link("#about")
        .with_nav_link("#contact")
        .with_stat("projects-count", "100")
        .with_code_copy(SNIPPET)
}

fn app_with(clipboard: Arc<MemoryClipboard>) -> App {
    App::new(
        &ClientConfig::default(),
        page(),
        Arc::new(ReqwestHttpClient::new()),
        clipboard,
    )
}

#[tokio::test]
async fn test_scroll_updates_navbar_and_active_link() {
    let mut app = app_with(Arc::new(MemoryClipboard::new()));

    app.dispatch(&Event::scroll(650.0)).await;

    assert!(app.ctx.navbar.has_class("scrolled"));
    let active: Vec<_> = app
        .ctx
        .nav_links
        .iter()
        .filter(|link| link.has_class("active"))
        .map(|link| link.attribute("href").unwrap())
        .collect();
    assert_eq!(active, vec!["#about"]);

    app.dispatch(&Event::scroll(10.0)).await;
    assert!(!app.ctx.navbar.has_class("scrolled"));
    assert!(app.ctx.nav_links[0].has_class("active"));
    assert!(!app.ctx.nav_links[1].has_class("active"));
}

#[tokio::test]
async fn test_nav_link_click_closes_menu_and_scrolls() {
    let mut app = app_with(Arc::new(MemoryClipboard::new()));

    app.dispatch(&Event::click(Target::Hamburger)).await;
    assert!(app.ctx.nav_menu.has_class("active"));

    let outcomes = app
        .dispatch(&Event::click(Target::NavLink {
            href: "#contact".to_string(),
        }))
        .await;

    assert_eq!(
        outcomes,
        vec![
            Outcome::Handled(Action::CloseMobileMenu),
            Outcome::Clicked(ClickOutcome {
                default_prevented: true,
                scrolled: true
            }),
        ]
    );
    assert!(!app.ctx.nav_menu.has_class("active"));
    assert_eq!(
        app.ctx.viewport.last_scroll_request,
        Some(ScrollRequest {
            top: 1520.0,
            behavior: ScrollBehavior::Smooth
        })
    );
}

#[tokio::test]
async fn test_stat_counter_counts_to_target() {
    let mut app = app_with(Arc::new(MemoryClipboard::new()));
    let visible = Event::intersect(Target::Stat {
        id: "projects-count".to_string(),
        ratio: 0.9,
    });

    app.dispatch(&visible).await;
    app.animation_frame(16.0);
    assert_eq!(app.ctx.stats[0].text, "0");

    let mut t = 16.0;
    let mut previous = 0;
    while t < 2100.0 {
        t += 16.0;
        app.animation_frame(t);
        let shown: i64 = app.ctx.stats[0].text.parse().unwrap();
        assert!(shown >= previous && shown <= 100);
        previous = shown;
    }
    assert_eq!(app.ctx.stats[0].text, "100");

    let outcomes = app.dispatch(&visible).await;
    assert_eq!(
        outcomes,
        vec![Outcome::Animated {
            action: Action::AnimateStat,
            started: false
        }]
    );
}

#[tokio::test]
async fn test_copy_uses_clipboard_and_reverts() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let mut app = app_with(clipboard.clone());

    let outcomes = app.dispatch(&Event::click(Target::CopyButton)).await;

    assert_eq!(outcomes, vec![Outcome::Copied(CopyOutcome::Copied)]);
    assert_eq!(clipboard.contents().as_deref(), Some(SNIPPET));
    let widget = app.ctx.code_copy.as_ref().unwrap();
    assert!(widget.button.has_class(COPIED_CLASS));
    assert_eq!(widget.copy_text.text, COPIED_LABEL);
    assert_eq!(widget.copy_icon.style_value("display"), Some("none"));

    app.advance(1999);
    assert!(app.ctx.code_copy.as_ref().unwrap().button.has_class(COPIED_CLASS));

    app.advance(1);
    let widget = app.ctx.code_copy.as_ref().unwrap();
    assert!(!widget.button.has_class(COPIED_CLASS));
    assert_eq!(widget.copy_text.text, "Copy");
    assert_eq!(widget.copy_icon.style_value("display"), Some("inline"));
}

#[tokio::test]
async fn test_copy_falls_back_to_legacy_command() {
    let clipboard = Arc::new(MemoryClipboard::with_support(false, true));
    let mut app = app_with(clipboard.clone());

    let outcomes = app.dispatch(&Event::click(Target::CopyButton)).await;

    assert_eq!(outcomes, vec![Outcome::Copied(CopyOutcome::CopiedWithFallback)]);
    assert_eq!(clipboard.contents().as_deref(), Some(SNIPPET));
    assert!(app.ctx.body_children.is_empty());
    let widget = app.ctx.code_copy.as_ref().unwrap();
    assert!(widget.button.has_class(COPIED_CLASS));
    assert_eq!(widget.copy_text.text, "Copy");

    app.advance(2000);
    assert!(!app.ctx.code_copy.as_ref().unwrap().button.has_class(COPIED_CLASS));
}

#[tokio::test]
async fn test_copy_failure_leaves_state_unchanged() {
    let clipboard = Arc::new(MemoryClipboard::with_support(false, false));
    let mut app = app_with(clipboard.clone());
    let before = app.ctx.code_copy.clone();

    let outcomes = app.dispatch(&Event::click(Target::CopyButton)).await;

    assert_eq!(outcomes, vec![Outcome::Copied(CopyOutcome::Failed)]);
    assert!(clipboard.contents().is_none());
    assert!(app.ctx.body_children.is_empty());
    assert_eq!(app.ctx.code_copy, before);
    assert_eq!(app.pending_timers(), 0);
}

#[tokio::test]
async fn test_copy_without_widget_is_not_wired() {
    let mut app = App::new(
        &ClientConfig::default(),
        UiContext::new(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(MemoryClipboard::new()),
    );

    let outcomes = app.dispatch(&Event::click(Target::CopyButton)).await;
    assert_eq!(outcomes, vec![Outcome::Copied(CopyOutcome::NotWired)]);
}
