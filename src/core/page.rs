//! Headless model of the page the behavior layer drives.
//!
//! Controllers never reach for globals; they receive a [`UiContext`] that
//! owns every element they read or mutate, so tests can build one by hand.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub inner_html: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_layout(mut self, offset_top: f64, offset_height: f64) -> Self {
        self.offset_top = offset_top;
        self.offset_height = offset_height;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Replaces the whole class list, like assigning `className`.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub last_scroll_request: Option<ScrollRequest>,
}

impl Viewport {
    pub fn scroll_to(&mut self, request: ScrollRequest) {
        self.last_scroll_request = Some(request);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: Element,
    pub email: Element,
    pub subject: Element,
    pub message: Element,
    pub submit_button: Element,
    pub form_message: Element,
}

impl ContactForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            name: Element::with_id("name"),
            email: Element::with_id("email"),
            subject: Element::with_id("subject"),
            message: Element::with_id("message"),
            submit_button: Element::new()
                .with_attribute("type", "submit")
                .with_text(submit_label),
            form_message: Element::with_id("formMessage").with_class("form-message"),
        }
    }

    pub fn fill(&mut self, name: &str, email: &str, subject: &str, message: &str) {
        self.name.value = name.to_string();
        self.email.value = email.to_string();
        self.subject.value = subject.to_string();
        self.message.value = message.to_string();
    }

    /// Clears every input, like `form.reset()` on a form without defaults.
    pub fn reset(&mut self) {
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.subject,
            &mut self.message,
        ] {
            field.value.clear();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeCopyWidget {
    pub button: Element,
    pub copy_text: Element,
    pub copy_icon: Element,
    pub code_content: Element,
}

impl CodeCopyWidget {
    pub fn new(code: &str) -> Self {
        Self {
            button: Element::with_id("copyCodeBtn"),
            copy_text: Element::new().with_class("copy-text").with_text("Copy"),
            copy_icon: Element::new().with_class("copy-icon"),
            code_content: Element::with_id("codeContent").with_text(code),
        }
    }
}

/// Every element the controllers touch, constructed once per page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiContext {
    pub navbar: Element,
    pub hamburger: Option<Element>,
    pub nav_menu: Element,
    pub nav_links: Vec<Element>,
    pub sections: Vec<Element>,
    pub skills_grid: Option<Element>,
    pub skill_bars: Vec<Element>,
    pub projects_grid: Option<Element>,
    pub stats: Vec<Element>,
    pub contact_form: Option<ContactForm>,
    pub code_copy: Option<CodeCopyWidget>,
    /// Transient children appended to `<body>`.
    pub body_children: Vec<Element>,
    pub viewport: Viewport,
}

impl UiContext {
    /// A context with the standard page chrome and no optional widgets.
    pub fn new() -> Self {
        Self {
            navbar: Element::with_id("navbar"),
            hamburger: Some(Element::with_id("hamburger")),
            nav_menu: Element::with_id("navMenu"),
            ..Self::default()
        }
    }

    pub fn with_section(mut self, id: &str, offset_top: f64, offset_height: f64) -> Self {
        self.sections
            .push(Element::with_id(id).with_layout(offset_top, offset_height));
        self
    }

    pub fn with_nav_link(mut self, href: &str) -> Self {
        self.nav_links
            .push(Element::new().with_class("nav-link").with_attribute("href", href));
        self
    }

    pub fn with_stat(mut self, id: &str, target: &str) -> Self {
        self.stats.push(
            Element::with_id(id)
                .with_class("stat-number")
                .with_attribute("data-target", target)
                .with_text("0"),
        );
        self
    }

    pub fn with_grids(mut self) -> Self {
        self.skills_grid = Some(Element::with_id("skillsGrid"));
        self.projects_grid = Some(Element::with_id("projectsGrid"));
        self
    }

    pub fn with_contact_form(mut self, submit_label: &str) -> Self {
        self.contact_form = Some(ContactForm::new(submit_label));
        self
    }

    pub fn with_code_copy(mut self, code: &str) -> Self {
        self.code_copy = Some(CodeCopyWidget::new(code));
        self
    }

    pub fn nav_link_for(&mut self, section_id: &str) -> Option<&mut Element> {
        let href = format!("#{}", section_id);
        self.nav_links
            .iter_mut()
            .find(|link| link.attribute("href") == Some(href.as_str()))
    }

    pub fn section_by_id(&self, id: &str) -> Option<&Element> {
        self.sections
            .iter()
            .find(|section| section.id.as_deref() == Some(id))
    }
}
