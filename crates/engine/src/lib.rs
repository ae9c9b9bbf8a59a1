use std::collections::{HashMap, HashSet};

use shared::content::FinalContent;
use shared::domain::{Announcement, Category, CategoryId, RenderContext, RenderOptions, Signals};
use tracing::debug;

pub mod context;
pub mod ordering;
pub mod render;

pub use context::{resolve_context, should_render};
pub use ordering::order_records;
pub use render::{category_slug, compose, render_category, sanitize_classes};

/// Seam for the host platform's trusted HTML sanitizer. Every free-text field
/// the pipeline emits (headers, footers, fallbacks, announcement bodies) is
/// routed through this exactly once.
pub trait Sanitizer {
    fn sanitize(&self, raw: &str) -> String;
}

/// Partitions announcements by their owning category. Announcements with no
/// category reference, or a reference matching no known category, are excluded
/// from every bucket. Buckets keep the input order, so grouping after sorting
/// preserves the sorted order.
pub fn group_by_category(
    categories: &[Category],
    announcements: &[Announcement],
) -> HashMap<CategoryId, Vec<Announcement>> {
    let known: HashSet<CategoryId> = categories.iter().map(|category| category.id).collect();
    let mut grouped: HashMap<CategoryId, Vec<Announcement>> = HashMap::new();
    for announcement in announcements {
        if let Some(category_id) = announcement.category {
            if known.contains(&category_id) {
                grouped
                    .entry(category_id)
                    .or_default()
                    .push(announcement.clone());
            }
        }
    }
    grouped
}

/// Keeps categories that are in scope for the context and have something to
/// show: at least one grouped announcement, or a configured fallback.
pub fn select<'a>(
    categories: &'a [Category],
    grouped: &HashMap<CategoryId, Vec<Announcement>>,
    context: RenderContext,
) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|category| {
            let has_announcements = grouped
                .get(&category.id)
                .map_or(false, |bucket| !bucket.is_empty());
            let keep = (has_announcements || !category.fallback.is_empty())
                && category.scope.allows(context);
            if !keep {
                debug!(
                    category = category.id.0,
                    "category empty or out of scope, skipped"
                );
            }
            keep
        })
        .collect()
}

pub fn run(
    categories: &[Category],
    announcements: &[Announcement],
    signals: &Signals,
    options: &RenderOptions,
    sanitizer: &dyn Sanitizer,
) -> Option<FinalContent> {
    let context = context::resolve_context(signals);
    if !context::should_render(signals, context) {
        debug!(
            context = context.as_str(),
            page = %signals.page,
            "page gate rejected, nothing to render"
        );
        return None;
    }

    let mut categories = categories.to_vec();
    let mut announcements = announcements.to_vec();
    ordering::order_records(&mut categories, |c| c.order, |c| c.id.0);
    ordering::order_records(&mut announcements, |a| a.order, |a| a.id.0);

    let grouped = group_by_category(&categories, &announcements);
    debug!(
        context = context.as_str(),
        categories = categories.len(),
        announcements = announcements.len(),
        "assembling announcement content"
    );

    let blocks = select(&categories, &grouped, context)
        .into_iter()
        .map(|category| {
            let attached = grouped
                .get(&category.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            render::render_category(category, attached, options, sanitizer)
        })
        .collect();

    render::compose(blocks, context, options)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
