use crate::core::api::fetch_json;
use crate::core::escape::escape_html;
use crate::core::page::UiContext;
use crate::core::{HttpClient, Project};
use maud::{html, Markup, PreEscaped};
use std::sync::Arc;

pub const CENTER_ODD_CLASS: &str = "center-odd";
const PLACEHOLDER_GLYPH: &str = "🐍";

/// True only for the final card of an odd-sized list.
pub fn is_last_odd(index: usize, total: usize) -> bool {
    total % 2 != 0 && index + 1 == total
}

pub fn render_project_card(project: &Project, index: usize, total: usize) -> Markup {
    let title = escape_html(&project.title);
    html! {
        div.project-card.center-odd[is_last_odd(index, total)] {
            div.project-image {
                @if let Some(src) = project.image() {
                    img src=(PreEscaped(escape_html(src))) alt=(PreEscaped(&title)) loading="lazy";
                } @else {
                    span { (PLACEHOLDER_GLYPH) }
                }
            }
            div.project-content {
                h3.project-title { (PreEscaped(&title)) }
                p.project-description { (PreEscaped(escape_html(&project.description))) }
                div.project-technologies {
                    @for tech in &project.technologies {
                        span.tech-tag { (PreEscaped(escape_html(tech))) }
                    }
                }
                div.project-links {
                    @if let Some(url) = project.github_link() {
                        a.project-link href=(PreEscaped(escape_html(url))) target="_blank" rel="noopener noreferrer" { "GitHub →" }
                    }
                    @if let Some(url) = project.live_link() {
                        a.project-link href=(PreEscaped(escape_html(url))) target="_blank" rel="noopener noreferrer" { "Live Demo →" }
                    }
                }
            }
        }
    }
}

pub fn render_projects(projects: &[Project]) -> Markup {
    let total = projects.len();
    html! {
        @for (index, project) in projects.iter().enumerate() {
            (render_project_card(project, index, total))
        }
    }
}

pub struct ProjectsRenderer {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl ProjectsRenderer {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetches and renders every project card. Failures are logged and
    /// yield `None` so the caller leaves the grid untouched.
    pub async fn load_projects(&self) -> Option<Markup> {
        match fetch_json::<Vec<Project>>(self.client.as_ref(), &self.url).await {
            Ok(projects) => {
                tracing::debug!("Rendering {} projects", projects.len());
                Some(render_projects(&projects))
            }
            Err(e) => {
                tracing::error!("Error loading projects: {}", e);
                None
            }
        }
    }

    /// Fetches `{projects}/{id}` and renders it as a standalone card.
    pub async fn load_project(&self, id: u64) -> Option<Markup> {
        let url = format!("{}/{}", self.url.trim_end_matches('/'), id);
        match fetch_json::<Project>(self.client.as_ref(), &url).await {
            Ok(project) => Some(render_project_card(&project, 0, 0)),
            Err(e) => {
                tracing::error!("Error loading project {}: {}", id, e);
                None
            }
        }
    }
}

/// Returns false when the page has no projects grid.
pub fn apply_projects(ctx: &mut UiContext, markup: Markup) -> bool {
    match ctx.projects_grid.as_mut() {
        Some(grid) => {
            grid.inner_html = markup.into_string();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, github: Option<&str>, live: Option<&str>) -> Project {
        Project {
            id: None,
            title: title.to_string(),
            description: format!("{} description", title),
            technologies: vec!["Rust".to_string(), "Tokio".to_string()],
            github_url: github.map(str::to_string),
            live_url: live.map(str::to_string),
            image_url: None,
        }
    }

    #[test]
    fn test_is_last_odd() {
        assert!(is_last_odd(2, 3));
        assert!(!is_last_odd(1, 3));
        assert!(!is_last_odd(3, 4));
        assert!(is_last_odd(0, 1));
        assert!(!is_last_odd(0, 0));
    }

    #[test]
    fn test_odd_list_centers_last_card_only() {
        let projects = vec![
            project("A", None, None),
            project("B", None, None),
            project("C", None, None),
        ];
        let html = render_projects(&projects).into_string();
        assert_eq!(html.matches("center-odd").count(), 1);
        let last_card = html.rfind("project-card").unwrap();
        assert!(html[last_card..].starts_with("project-card center-odd"));

        let even = render_projects(&projects[..2]).into_string();
        assert!(!even.contains("center-odd"));
    }

    #[test]
    fn test_links_follow_present_urls() {
        let both = render_project_card(
            &project("A", Some("https://github.com/a"), Some("https://a.dev")),
            0,
            2,
        )
        .into_string();
        assert!(both.contains("GitHub →"));
        assert!(both.contains("Live Demo →"));
        assert!(both.contains(r#"rel="noopener noreferrer""#));
        assert!(both.contains(r#"target="_blank""#));

        let github_only =
            render_project_card(&project("A", Some("https://github.com/a"), Some("")), 0, 2)
                .into_string();
        assert!(github_only.contains("GitHub →"));
        assert!(!github_only.contains("Live Demo"));
        assert_eq!(github_only.matches(r#"<a class="project-link""#).count(), 1);

        let live_only = render_project_card(&project("A", None, Some("https://a.dev")), 0, 2)
            .into_string();
        assert!(live_only.contains(r#"href="https://a.dev""#));
        assert!(!live_only.contains("GitHub"));
        assert_eq!(live_only.matches(r#"<a class="project-link""#).count(), 1);

        assert_eq!(both.matches(r#"<a class="project-link""#).count(), 2);

        let none = render_project_card(&project("A", None, None), 0, 2).into_string();
        assert_eq!(none.matches("<a ").count(), 0);
        assert!(none.contains(r#"<div class="project-links"></div>"#));
    }

    #[test]
    fn test_project_text_is_escaped() {
        let mut p = project("<img src=x onerror=alert(1)>", Some("https://x.dev/?a=1&b=\"2\""), None);
        p.technologies = vec!["C<T>".to_string()];
        let html = render_project_card(&p, 0, 2).into_string();

        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("C&lt;T&gt;"));
        assert!(html.contains("https://x.dev/?a=1&amp;b=&quot;2&quot;"));
    }

    #[test]
    fn test_image_slot_uses_image_url_when_present() {
        let mut p = project("Gallery", None, None);
        assert!(render_project_card(&p, 0, 2).into_string().contains("🐍"));

        p.image_url = Some("/static/gallery.png".to_string());
        let html = render_project_card(&p, 0, 2).into_string();
        assert!(html.contains(r#"<img src="/static/gallery.png" alt="Gallery""#));
        assert!(!html.contains("🐍"));
    }
}
