pub mod animation;
pub mod api;
pub mod app;
pub mod code_copy;
pub mod contact;
pub mod escape;
pub mod navigation;
pub mod page;
pub mod projects;
pub mod skills;
pub mod smooth_scroll;
pub mod timers;
pub mod visibility;

pub use crate::domain::model::{
    ContactSubmission, HttpResponse, Project, Skill, SkillLevel, DEFAULT_CATEGORY,
};
pub use crate::domain::ports::{Clipboard, ConfigProvider, HttpClient};
pub use crate::utils::error::Result;
