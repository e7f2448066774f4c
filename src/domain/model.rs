use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub level: String,
}

impl Skill {
    /// Missing or empty categories fall into the "Other" bucket.
    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    pub fn skill_level(&self) -> Option<SkillLevel> {
        SkillLevel::from_key(&self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Basic,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Keys are matched case-sensitively, lowercase only.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "basic" => Some(Self::Basic),
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn progress(self) -> u8 {
        match self {
            Self::Basic | Self::Beginner => 30,
            Self::Intermediate => 60,
            Self::Advanced => 85,
            Self::Expert => 100,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Basic | Self::Beginner => "#94a3b8",
            Self::Intermediate => "#3b82f6",
            Self::Advanced => "#10b981",
            Self::Expert => "#8b5cf6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Project {
    pub fn github_link(&self) -> Option<&str> {
        non_empty(self.github_url.as_deref())
    }

    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_url.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Payload posted to the contact endpoint. Fields are stored trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Raw HTTP exchange result as seen by the behavior layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}
