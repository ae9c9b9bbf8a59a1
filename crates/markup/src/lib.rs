use std::fmt::Write as _;

use engine::Sanitizer;
use shared::content::{BlockBody, ContentBlock, FinalContent};

/// Attribute-safe escaping for identifiers and class strings the pipeline
/// builds itself. Distinct from the body sanitizer: this guards structural
/// attributes, not free-text content.
pub fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reference sanitizer standing in for the host platform's trusted HTML
/// filter: entity-escapes the text, then turns newlines into `<br>`.
pub struct EntitySanitizer;

impl Sanitizer for EntitySanitizer {
    fn sanitize(&self, raw: &str) -> String {
        escape_text(raw).replace("\r\n", "<br>").replace('\n', "<br>")
    }
}

pub fn render_html(content: &FinalContent) -> String {
    let style = if content.layout.fixed_max_width {
        " style=\"max-width: 800px;\""
    } else if content.layout.align_left {
        " style=\"text-align: left;\""
    } else {
        ""
    };

    let mut html = String::new();
    let _ = write!(
        html,
        "<div id=\"announce-wrapper\"{style} class=\"{}\">",
        escape_attr(&content.classes.join(" "))
    );
    for block in &content.blocks {
        render_block(&mut html, block);
    }
    html.push_str("</div>");
    html
}

fn render_block(out: &mut String, block: &ContentBlock) {
    let _ = write!(
        out,
        "<div id=\"{}\" class=\"{}\">",
        escape_attr(&block.slug),
        escape_attr(&block.classes.join(" "))
    );

    if let Some(title) = &block.title {
        out.push_str("<h4 class=\"alert-title announce-title\">");
        if let Some(icon) = &title.icon {
            let _ = write!(out, "<i class=\"{}\"></i> ", escape_attr(icon));
        }
        out.push_str(&escape_text(&title.text));
        out.push_str("</h4>");
    }

    // Body fragments are already sanitized by the pipeline's sanitizer seam
    // and are inserted as-is.
    match &block.body {
        BlockBody::Fallback { html } => {
            let _ = write!(out, "<p class=\"announce-fallback\">{html}</p>");
        }
        BlockBody::Listing {
            header,
            items,
            footer,
        } => {
            if let Some(header) = header {
                let _ = write!(out, "<p class=\"announce-hdr\">{header}</p>");
            }
            for item in items {
                let _ = write!(out, "<p class=\"announce-desc\">{}</p>", item.html);
            }
            if let Some(footer) = footer {
                let _ = write!(out, "<p class=\"announce-ftr\">{footer}</p>");
            }
        }
    }

    out.push_str("</div>");
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
