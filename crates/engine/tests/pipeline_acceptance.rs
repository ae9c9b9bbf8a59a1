use engine::{run, Sanitizer};
use shared::content::BlockBody;
use shared::domain::{Announcement, Category, RenderOptions, Signals};

struct Passthrough;

impl Sanitizer for Passthrough {
    fn sanitize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

fn decode_categories(raw: &str) -> Vec<Category> {
    serde_json::from_str(raw).expect("categories json")
}

fn decode_announcements(raw: &str) -> Vec<Announcement> {
    serde_json::from_str(raw).expect("announcements json")
}

#[test]
fn project_page_lists_announcements_in_order_acceptance() {
    let categories = decode_categories(
        r#"[{"id": 1, "name": "maintenance", "scope": {"project": true}}]"#,
    );
    let announcements = decode_announcements(
        r#"[
            {"id": 10, "category": 1, "order": 2, "body": "second notice"},
            {"id": 11, "category": 1, "order": 1, "body": "first notice"},
            {"id": 12, "category": 99, "body": "orphaned notice"},
            {"id": 13, "body": "unattached notice"}
        ]"#,
    );
    let signals = Signals {
        authenticated: true,
        project_id: Some(44),
        page: "index.php".into(),
        action: None,
    };

    let content = run(
        &categories,
        &announcements,
        &signals,
        &RenderOptions::default(),
        &Passthrough,
    )
    .expect("content");

    assert_eq!(content.classes, vec!["announce-wrapper", "context-project"]);
    assert_eq!(content.blocks.len(), 1);
    let block = &content.blocks[0];
    assert_eq!(block.slug, "announce-cat-maintenance");
    match &block.body {
        BlockBody::Listing { items, .. } => {
            let bodies: Vec<&str> = items.iter().map(|i| i.html.as_str()).collect();
            assert_eq!(bodies, vec!["first notice", "second notice"]);
        }
        BlockBody::Fallback { .. } => panic!("expected listing mode"),
    }
}

#[test]
fn login_page_falls_back_when_category_is_empty_acceptance() {
    let categories = decode_categories(
        r#"[{
            "id": 2,
            "name": "welcome",
            "title": "Welcome",
            "fallback": "Nothing yet",
            "header": "hidden in fallback mode",
            "scope": {"login": true}
        }]"#,
    );
    let signals = Signals {
        authenticated: false,
        project_id: None,
        page: "index.php".into(),
        action: None,
    };

    let content = run(
        &categories,
        &[],
        &signals,
        &RenderOptions::default(),
        &Passthrough,
    )
    .expect("content");

    assert!(content.layout.align_left);
    let block = &content.blocks[0];
    assert_eq!(block.title.as_ref().expect("title").text, "Welcome");
    match &block.body {
        BlockBody::Fallback { html } => assert_eq!(html, "Nothing yet"),
        BlockBody::Listing { .. } => panic!("expected fallback mode"),
    }
}

#[test]
fn out_of_scope_category_produces_no_output_acceptance() {
    let categories =
        decode_categories(r#"[{"id": 3, "name": "internal", "scope": {"system": false}}]"#);
    let announcements =
        decode_announcements(r#"[{"id": 20, "category": 3, "body": "staff only"}]"#);
    let signals = Signals {
        authenticated: true,
        project_id: None,
        page: "index.php".into(),
        action: None,
    };

    let content = run(
        &categories,
        &announcements,
        &signals,
        &RenderOptions::default(),
        &Passthrough,
    );
    assert!(content.is_none());
}

#[test]
fn empty_selection_emits_no_wrapper_acceptance() {
    let signals = Signals {
        authenticated: true,
        project_id: None,
        page: "index.php".into(),
        action: Some("myprojects".into()),
    };
    let content = run(
        &[],
        &[],
        &signals,
        &RenderOptions::default(),
        &Passthrough,
    );
    assert!(content.is_none());
}
