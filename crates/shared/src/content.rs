use serde::{Deserialize, Serialize};

use crate::domain::{AnnouncementId, CategoryId, RenderContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingItem {
    pub announcement_id: AnnouncementId,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BlockBody {
    Fallback {
        html: String,
    },
    Listing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<String>,
        items: Vec<ListingItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        footer: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub category_id: CategoryId,
    pub slug: String,
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleFragment>,
    pub body: BlockBody,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHints {
    #[serde(default)]
    pub align_left: bool,
    #[serde(default)]
    pub fixed_max_width: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalContent {
    pub context: RenderContext,
    pub classes: Vec<String>,
    pub layout: LayoutHints,
    pub blocks: Vec<ContentBlock>,
}
