use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CategoryId);
id_newtype!(AnnouncementId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderContext {
    Login,
    System,
    Project,
}

impl RenderContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderContext::Login => "login",
            RenderContext::System => "system",
            RenderContext::Project => "project",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub project: bool,
    #[serde(default)]
    pub login: bool,
}

impl Scope {
    pub fn allows(&self, context: RenderContext) -> bool {
        match context {
            RenderContext::Login => self.login,
            RenderContext::System => self.system,
            RenderContext::Project => self.project,
        }
    }
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub fallback: String,
    #[serde(default)]
    pub custom_classes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default = "active_by_default")]
    pub active: bool,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signals {
    pub authenticated: bool,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub category_custom_classes: String,
    #[serde(default)]
    pub wrapper_custom_classes: String,
    #[serde(default)]
    pub fix_project_width: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_allows_matching_context_only() {
        let scope = Scope {
            system: true,
            project: false,
            login: false,
        };
        assert!(scope.allows(RenderContext::System));
        assert!(!scope.allows(RenderContext::Project));
        assert!(!scope.allows(RenderContext::Login));
    }

    #[test]
    fn context_names_are_stable() {
        assert_eq!(RenderContext::Login.as_str(), "login");
        assert_eq!(RenderContext::System.as_str(), "system");
        assert_eq!(RenderContext::Project.as_str(), "project");
    }

    #[test]
    fn category_decodes_with_sparse_fields() {
        let category: Category =
            serde_json::from_str(r#"{"id": 3, "name": "ops"}"#).expect("category");
        assert_eq!(category.id, CategoryId(3));
        assert!(category.active);
        assert!(category.order.is_none());
        assert!(category.fallback.is_empty());
        assert!(!category.scope.system);
    }

    #[test]
    fn announcement_decodes_without_category_reference() {
        let announcement: Announcement =
            serde_json::from_str(r#"{"id": 9, "body": "orphaned"}"#).expect("announcement");
        assert!(announcement.category.is_none());
        assert!(announcement.active);
        assert!(announcement.since.is_none());
    }
}
