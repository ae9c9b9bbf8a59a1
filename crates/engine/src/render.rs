use shared::content::{
    BlockBody, ContentBlock, FinalContent, LayoutHints, ListingItem, TitleFragment,
};
use shared::domain::{Announcement, Category, RenderContext, RenderOptions};
use tracing::debug;

use crate::Sanitizer;

pub const WRAPPER_CLASS: &str = "announce-wrapper";
pub const BLOCK_CLASS: &str = "announce-category";
pub const ALERT_CLASS: &str = "alert";
const SLUG_PREFIX: &str = "announce-cat-";

pub fn render_category(
    category: &Category,
    announcements: &[Announcement],
    options: &RenderOptions,
    sanitizer: &dyn Sanitizer,
) -> ContentBlock {
    let slug = category_slug(category);

    let mut classes = vec![BLOCK_CLASS.to_string()];
    classes.extend(class_tokens(&options.category_custom_classes));
    classes.push(slug.clone());
    classes.push(ALERT_CLASS.to_string());
    classes.extend(class_tokens(&category.custom_classes));

    let title = (!category.title.is_empty()).then(|| TitleFragment {
        icon: category.icon.clone().filter(|icon| !icon.is_empty()),
        text: category.title.clone(),
    });

    let body = if announcements.is_empty() {
        BlockBody::Fallback {
            html: sanitizer.sanitize(&category.fallback),
        }
    } else {
        debug!(
            category = category.id.0,
            count = announcements.len(),
            "rendering announcement listing"
        );
        BlockBody::Listing {
            header: nonempty(&category.header).map(|text| sanitizer.sanitize(text)),
            items: announcements
                .iter()
                .map(|announcement| ListingItem {
                    announcement_id: announcement.id,
                    html: sanitizer.sanitize(&announcement.body),
                })
                .collect(),
            footer: nonempty(&category.footer).map(|text| sanitizer.sanitize(text)),
        }
    };

    ContentBlock {
        category_id: category.id,
        slug,
        classes,
        title,
        body,
    }
}

pub fn compose(
    blocks: Vec<ContentBlock>,
    context: RenderContext,
    options: &RenderOptions,
) -> Option<FinalContent> {
    if blocks.is_empty() {
        return None;
    }

    let mut classes = vec![
        WRAPPER_CLASS.to_string(),
        format!("context-{}", context.as_str()),
    ];
    classes.extend(class_tokens(&options.wrapper_custom_classes));

    Some(FinalContent {
        context,
        classes,
        layout: LayoutHints {
            align_left: context == RenderContext::Login,
            fixed_max_width: options.fix_project_width && context == RenderContext::Project,
        },
        blocks,
    })
}

/// CSS-safe token derived from the category's machine name; falls back to the
/// record id when the name has no usable characters.
pub fn category_slug(category: &Category) -> String {
    let normalized = slugify(&category.name);
    if normalized.is_empty() {
        format!("{SLUG_PREFIX}{}", category.id.0)
    } else {
        format!("{SLUG_PREFIX}{normalized}")
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut gap = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }
    slug
}

/// Strips everything but alphanumerics, whitespace, hyphens, and underscores,
/// then collapses whitespace runs. A pure string transform for operator- and
/// record-supplied class lists, not an HTML sanitizer.
pub fn sanitize_classes(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&ch| ch.is_ascii_alphanumeric() || ch.is_whitespace() || ch == '-' || ch == '_')
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn class_tokens(raw: &str) -> Vec<String> {
    sanitize_classes(raw)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn nonempty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
