//! Composition root: wires controllers to page events through a static
//! binding table and owns the page clock.

use crate::core::animation::{SkillBarAnimator, StatCounterAnimator};
use crate::core::code_copy::{CodeCopyControl, CopyOutcome};
use crate::core::contact::{ContactFormController, SubmissionState};
use crate::core::navigation::NavigationController;
use crate::core::page::UiContext;
use crate::core::projects::{apply_projects, ProjectsRenderer};
use crate::core::skills::{apply_skills, SkillsRenderer};
use crate::core::smooth_scroll::{ClickOutcome, SmoothScrollHandler};
use crate::core::timers::{PageTask, TimerQueue};
use crate::core::{Clipboard, ConfigProvider, HttpClient};
use std::sync::Arc;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    DomContentLoaded,
    Click,
    Scroll,
    Submit,
    Intersect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadContent,
    ToggleMobileMenu,
    CloseMobileMenu,
    SmoothScroll,
    ScrollEffects,
    SubmitContact,
    CopyCode,
    AnimateSkillBar,
    AnimateStat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub event: EventKind,
    pub selector: &'static str,
    pub action: Action,
}

const fn bind(event: EventKind, selector: &'static str, action: Action) -> Binding {
    Binding {
        event,
        selector,
        action,
    }
}

/// Every event handler on the page. Order matters: a nav-link click
/// closes the menu before it scrolls.
pub const BINDINGS: &[Binding] = &[
    bind(EventKind::DomContentLoaded, "document", Action::LoadContent),
    bind(EventKind::Click, "#hamburger", Action::ToggleMobileMenu),
    bind(EventKind::Click, ".nav-link", Action::CloseMobileMenu),
    bind(EventKind::Click, ANCHOR_SELECTOR, Action::SmoothScroll),
    bind(EventKind::Scroll, "window", Action::ScrollEffects),
    bind(EventKind::Submit, "#contactForm", Action::SubmitContact),
    bind(EventKind::Click, "#copyCodeBtn", Action::CopyCode),
    bind(EventKind::Intersect, ".skill-progress", Action::AnimateSkillBar),
    bind(EventKind::Intersect, ".stat-number", Action::AnimateStat),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Document,
    Window { scroll_y: f64 },
    Hamburger,
    NavLink { href: String },
    Anchor { href: String },
    ContactForm,
    CopyButton,
    SkillBar { id: String, ratio: f64 },
    Stat { id: String, ratio: f64 },
}

impl Target {
    /// Selectors from [`BINDINGS`] this target matches.
    pub fn selectors(&self) -> &'static [&'static str] {
        match self {
            Target::Document => &["document"],
            Target::Window { .. } => &["window"],
            Target::Hamburger => &["#hamburger"],
            Target::NavLink { href } if href.starts_with('#') => &[".nav-link", ANCHOR_SELECTOR],
            Target::NavLink { .. } => &[".nav-link"],
            Target::Anchor { href } if href.starts_with('#') => &[ANCHOR_SELECTOR],
            Target::Anchor { .. } => &[],
            Target::ContactForm => &["#contactForm"],
            Target::CopyButton => &["#copyCodeBtn"],
            Target::SkillBar { .. } => &[".skill-progress"],
            Target::Stat { .. } => &[".stat-number"],
        }
    }

    fn href(&self) -> Option<&str> {
        match self {
            Target::NavLink { href } | Target::Anchor { href } => Some(href.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub target: Target,
}

impl Event {
    pub fn new(kind: EventKind, target: Target) -> Self {
        Self { kind, target }
    }

    pub fn loaded() -> Self {
        Self::new(EventKind::DomContentLoaded, Target::Document)
    }

    pub fn click(target: Target) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn scroll(scroll_y: f64) -> Self {
        Self::new(EventKind::Scroll, Target::Window { scroll_y })
    }

    pub fn submit() -> Self {
        Self::new(EventKind::Submit, Target::ContactForm)
    }

    pub fn intersect(target: Target) -> Self {
        Self::new(EventKind::Intersect, target)
    }
}

pub fn actions_for(event: &Event) -> impl Iterator<Item = Action> + '_ {
    let selectors = event.target.selectors();
    BINDINGS
        .iter()
        .filter(move |binding| binding.event == event.kind && selectors.contains(&binding.selector))
        .map(|binding| binding.action)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub skills_rendered: bool,
    pub projects_rendered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Handled(Action),
    Loaded(LoadReport),
    Clicked(ClickOutcome),
    Submitted(SubmissionState),
    Copied(CopyOutcome),
    Animated { action: Action, started: bool },
}

pub struct App {
    pub ctx: UiContext,
    navigation: NavigationController,
    smooth_scroll: SmoothScrollHandler,
    skills: SkillsRenderer,
    projects: ProjectsRenderer,
    contact: ContactFormController,
    code_copy: CodeCopyControl,
    skill_bars: SkillBarAnimator,
    stats: StatCounterAnimator,
    timers: TimerQueue<PageTask>,
    now_ms: u64,
}

impl App {
    pub fn new<C: ConfigProvider + ?Sized>(
        config: &C,
        ctx: UiContext,
        http: Arc<dyn HttpClient>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            ctx,
            navigation: NavigationController::from_config(config),
            smooth_scroll: SmoothScrollHandler::from_config(config),
            skills: SkillsRenderer::new(http.clone(), config.skills_url()),
            projects: ProjectsRenderer::new(http.clone(), config.projects_url()),
            contact: ContactFormController::new(http, config.contact_url()),
            code_copy: CodeCopyControl::from_config(clipboard, config),
            skill_bars: SkillBarAnimator::from_config(config),
            stats: StatCounterAnimator::from_config(config),
            timers: TimerQueue::new(),
            now_ms: 0,
        }
    }

    pub fn bindings() -> &'static [Binding] {
        BINDINGS
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn projects(&self) -> &ProjectsRenderer {
        &self.projects
    }

    /// Runs every bound action for `event`, in table order.
    pub async fn dispatch(&mut self, event: &Event) -> Vec<Outcome> {
        let actions: Vec<Action> = actions_for(event).collect();
        let mut outcomes = Vec::with_capacity(actions.len());
        for action in actions {
            outcomes.push(self.run(action, &event.target).await);
        }
        outcomes
    }

    async fn run(&mut self, action: Action, target: &Target) -> Outcome {
        match action {
            Action::LoadContent => Outcome::Loaded(self.load_content().await),
            Action::ToggleMobileMenu => {
                self.navigation.toggle_mobile_menu(&mut self.ctx);
                Outcome::Handled(action)
            }
            Action::CloseMobileMenu => {
                self.navigation.close_mobile_menu_on_link_click(&mut self.ctx);
                Outcome::Handled(action)
            }
            Action::SmoothScroll => {
                let href = target.href().unwrap_or_default();
                Outcome::Clicked(self.smooth_scroll.on_anchor_click(&mut self.ctx, href))
            }
            Action::ScrollEffects => {
                if let Target::Window { scroll_y } = target {
                    self.navigation.on_scroll(&mut self.ctx, *scroll_y);
                }
                Outcome::Handled(action)
            }
            Action::SubmitContact => {
                let state = match self.ctx.contact_form.as_mut() {
                    Some(form) => self.contact.submit(form).await,
                    None => SubmissionState::Idle,
                };
                Outcome::Submitted(state)
            }
            Action::CopyCode => {
                let outcome = self
                    .code_copy
                    .copy(&mut self.ctx, &mut self.timers, self.now_ms)
                    .await;
                Outcome::Copied(outcome)
            }
            Action::AnimateSkillBar => {
                let started = match target {
                    Target::SkillBar { id, ratio } => self.skill_bars.on_visibility(
                        &mut self.ctx,
                        &mut self.timers,
                        self.now_ms,
                        id,
                        *ratio,
                    ),
                    _ => false,
                };
                Outcome::Animated { action, started }
            }
            Action::AnimateStat => {
                let started = match target {
                    Target::Stat { id, ratio } => self.stats.on_visibility(&self.ctx, id, *ratio),
                    _ => false,
                };
                Outcome::Animated { action, started }
            }
        }
    }

    /// Page-load sequence: skills and projects are fetched concurrently and
    /// each grid is only touched when its own load succeeded.
    pub async fn load_content(&mut self) -> LoadReport {
        let (skills, projects) =
            tokio::join!(self.skills.load_skills(), self.projects.load_projects());

        let skills_rendered = match skills {
            Some(view) => {
                let applied = apply_skills(&mut self.ctx, view);
                if applied {
                    self.skill_bars.reset();
                }
                applied
            }
            None => false,
        };
        let projects_rendered = projects
            .map(|markup| apply_projects(&mut self.ctx, markup))
            .unwrap_or(false);

        if self.ctx.code_copy.is_none() {
            tracing::debug!("Code copy control not present on page");
        }

        LoadReport {
            skills_rendered,
            projects_rendered,
        }
    }

    /// Animation frame at page time `timestamp_ms`: fires due timers, then
    /// advances running counters.
    pub fn animation_frame(&mut self, timestamp_ms: f64) {
        self.now_ms = self.now_ms.max(timestamp_ms.max(0.0) as u64);
        for task in self.timers.take_due(self.now_ms) {
            task.apply(&mut self.ctx);
        }
        self.stats.on_animation_frame(&mut self.ctx, timestamp_ms);
    }

    pub fn advance(&mut self, delta_ms: u64) {
        let next = self.now_ms.saturating_add(delta_ms);
        self.animation_frame(next as f64);
    }
}
