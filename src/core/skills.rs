use crate::core::api::fetch_json;
use crate::core::escape::escape_html;
use crate::core::page::{Element, UiContext};
use crate::core::{HttpClient, Skill, SkillLevel};
use maud::{html, Markup, PreEscaped};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fixed rendering priority. Categories outside this list follow in
/// alphabetical order.
pub const CATEGORY_ORDER: [&str; 8] = [
    "Programming Languages",
    "Frameworks",
    "Database Systems",
    "Domain Expertise",
    "Technical Libraries",
    "Web Development",
    "Tools & Platforms",
    "Development Environment",
];

pub const DEFAULT_PROGRESS: u8 = 50;
pub const DEFAULT_COLOR: &str = "#6b7280";
pub const PROGRESS_CLASS: &str = "skill-progress";

pub fn progress_for(level: &str) -> u8 {
    SkillLevel::from_key(level)
        .map(SkillLevel::progress)
        .unwrap_or(DEFAULT_PROGRESS)
}

pub fn color_for(level: &str) -> &'static str {
    SkillLevel::from_key(level)
        .map(SkillLevel::color)
        .unwrap_or(DEFAULT_COLOR)
}

/// "advanced" -> "Advanced"; only the first character changes.
pub fn level_label(level: &str) -> String {
    let mut chars = level.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Groups skills by category, keeping response order within each group.
pub fn group_by_category(skills: &[Skill]) -> BTreeMap<&str, Vec<&Skill>> {
    let mut groups: BTreeMap<&str, Vec<&Skill>> = BTreeMap::new();
    for skill in skills {
        groups.entry(skill.category()).or_default().push(skill);
    }
    groups
}

pub fn category_render_order<'a>(groups: &BTreeMap<&'a str, Vec<&Skill>>) -> Vec<&'a str> {
    let fixed = CATEGORY_ORDER.iter().filter_map(|category| {
        groups
            .get_key_value(category)
            .filter(|(_, skills)| !skills.is_empty())
            .map(|(key, _)| *key)
    });

    // BTreeMap keys are already sorted.
    let remaining = groups
        .keys()
        .copied()
        .filter(|category| !CATEGORY_ORDER.contains(category));

    fixed.chain(remaining).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub id: String,
    pub width: String,
}

#[derive(Debug, Clone)]
pub struct SkillsView {
    pub markup: Markup,
    pub bars: Vec<SkillBar>,
}

impl SkillsView {
    pub fn html(&self) -> &str {
        &self.markup.0
    }
}

pub fn render_skills(skills: &[Skill]) -> SkillsView {
    let groups = group_by_category(skills);
    let order = category_render_order(&groups);
    tracing::debug!("Ordered categories: {:?}", order);

    let mut bars = Vec::new();
    let markup = html! {
        @for category in &order {
            div.skill-category-section {
                h3.skill-category-title { (PreEscaped(escape_html(category))) }
                div.skill-category-grid {
                    @for skill in groups.get(category).map(Vec::as_slice).unwrap_or_default() {
                        (render_skill_card(skill, &mut bars))
                    }
                }
            }
        }
    };

    SkillsView { markup, bars }
}

fn render_skill_card(skill: &Skill, bars: &mut Vec<SkillBar>) -> Markup {
    let progress = progress_for(&skill.level);
    let color = color_for(&skill.level);
    let bar = SkillBar {
        id: format!("skill-bar-{}", bars.len()),
        width: format!("{}%", progress),
    };

    let markup = html! {
        div.skill-card {
            div.skill-header {
                div.skill-name { (PreEscaped(escape_html(&skill.name))) }
                div.skill-level-badge style={ "background: " (color) "20; color: " (color) ";" } {
                    (PreEscaped(escape_html(&level_label(&skill.level))))
                }
            }
            div.skill-bar-container {
                div.skill-bar {
                    div.skill-progress id=(bar.id) style={ "width: " (bar.width) "; background: " (color) ";" } {}
                }
                span.skill-percentage { (progress) "%" }
            }
        }
    };

    bars.push(bar);
    markup
}

pub struct SkillsRenderer {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl SkillsRenderer {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetches and renders the skills section. Failures are logged and
    /// yield `None` so the caller leaves the grid untouched.
    pub async fn load_skills(&self) -> Option<SkillsView> {
        match fetch_json::<Vec<Skill>>(self.client.as_ref(), &self.url).await {
            Ok(skills) => Some(render_skills(&skills)),
            Err(e) => {
                tracing::error!("Error loading skills: {}", e);
                None
            }
        }
    }
}

/// Replaces the grid content and registers the progress bars for the
/// scroll-in animation. Returns false when the page has no skills grid.
pub fn apply_skills(ctx: &mut UiContext, view: SkillsView) -> bool {
    let Some(grid) = ctx.skills_grid.as_mut() else {
        return false;
    };
    grid.inner_html = view.markup.into_string();

    ctx.skill_bars = view
        .bars
        .into_iter()
        .map(|bar| {
            let mut element = Element::with_id(bar.id).with_class(PROGRESS_CLASS);
            element.set_style("width", bar.width);
            element
        })
        .collect();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: Option<&str>, level: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.map(str::to_string),
            level: level.to_string(),
        }
    }

    #[test]
    fn test_level_tables() {
        let cases = [
            ("basic", 30, "#94a3b8"),
            ("beginner", 30, "#94a3b8"),
            ("intermediate", 60, "#3b82f6"),
            ("advanced", 85, "#10b981"),
            ("expert", 100, "#8b5cf6"),
            ("Expert", 50, "#6b7280"),
            ("guru", 50, "#6b7280"),
        ];
        for (level, progress, color) in cases {
            assert_eq!(progress_for(level), progress, "progress for {}", level);
            assert_eq!(color_for(level), color, "color for {}", level);
        }
    }

    #[test]
    fn test_level_label_capitalizes_first_char() {
        assert_eq!(level_label("advanced"), "Advanced");
        assert_eq!(level_label("éclair"), "Éclair");
        assert_eq!(level_label(""), "");
    }

    #[test]
    fn test_category_order_fixed_then_alphabetical() {
        let skills = vec![
            skill("Docker", Some("Tools & Platforms"), "advanced"),
            skill("Leadership", Some("Soft Skills"), "expert"),
            skill("Python", Some("Programming Languages"), "expert"),
            skill("Git", None, "advanced"),
            skill("Agile", Some("Methodologies"), "intermediate"),
            skill("FastAPI", Some("Frameworks"), "advanced"),
        ];
        let groups = group_by_category(&skills);

        assert_eq!(
            category_render_order(&groups),
            vec![
                "Programming Languages",
                "Frameworks",
                "Tools & Platforms",
                "Methodologies",
                "Other",
                "Soft Skills",
            ]
        );
    }

    #[test]
    fn test_grouping_preserves_arrival_order() {
        let skills = vec![
            skill("Rust", Some("Programming Languages"), "expert"),
            skill("Axum", Some("Frameworks"), "advanced"),
            skill("Go", Some("Programming Languages"), "intermediate"),
        ];
        let groups = group_by_category(&skills);
        let names: Vec<&str> = groups["Programming Languages"]
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_render_escapes_user_text() {
        let skills = vec![skill("<b>x</b>", Some("A & B"), "<script>")];
        let view = render_skills(&skills);
        let html = view.html();

        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_escapes_single_quotes() {
        let skills = vec![skill("it's", Some("Builder's Tools"), "expert")];
        let view = render_skills(&skills);
        let html = view.html();

        assert!(html.contains("it&#39;s"));
        assert!(html.contains("Builder&#39;s Tools"));
        assert!(!html.contains('\''));
    }

    #[test]
    fn test_render_bars_and_styles() {
        let skills = vec![
            skill("Rust", Some("Programming Languages"), "expert"),
            skill("SQL", Some("Database Systems"), "mystery"),
        ];
        let view = render_skills(&skills);

        assert_eq!(
            view.bars,
            vec![
                SkillBar {
                    id: "skill-bar-0".to_string(),
                    width: "100%".to_string()
                },
                SkillBar {
                    id: "skill-bar-1".to_string(),
                    width: "50%".to_string()
                },
            ]
        );
        let html = view.html();
        assert!(html.contains("width: 100%; background: #8b5cf6;"));
        assert!(html.contains("background: #6b728020; color: #6b7280;"));
        assert!(html.contains("Mystery"));
    }

    #[test]
    fn test_empty_skill_list_renders_nothing() {
        let view = render_skills(&[]);
        assert!(view.html().is_empty());
        assert!(view.bars.is_empty());
    }

    #[test]
    fn test_apply_replaces_grid_and_bars() {
        let mut ctx = UiContext::new().with_grids();
        let view = render_skills(&[skill("Rust", None, "advanced")]);

        assert!(apply_skills(&mut ctx, view));
        let grid = ctx.skills_grid.as_ref().unwrap();
        assert!(grid.inner_html.contains("skill-category-title"));
        assert_eq!(ctx.skill_bars.len(), 1);
        assert_eq!(ctx.skill_bars[0].style_value("width"), Some("85%"));

        let mut bare = UiContext::new();
        assert!(!apply_skills(&mut bare, render_skills(&[])));
    }
}
