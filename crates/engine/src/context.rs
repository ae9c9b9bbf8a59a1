use shared::domain::{RenderContext, Signals};

pub const HOME_PAGE: &str = "index.php";
pub const PROJECT_SETUP_PAGE: &str = "ProjectSetup/index.php";
pub const PROJECT_LIST_ACTION: &str = "myprojects";

pub fn resolve_context(signals: &Signals) -> RenderContext {
    if !signals.authenticated {
        RenderContext::Login
    } else if signals.project_id.is_some() {
        RenderContext::Project
    } else {
        RenderContext::System
    }
}

/// Page-level gate: announcements only render on a small set of host pages
/// per context. Failing the gate is a no-op for the whole pipeline.
pub fn should_render(signals: &Signals, context: RenderContext) -> bool {
    match context {
        RenderContext::Login => true,
        RenderContext::System => {
            let action = signals.action.as_deref().unwrap_or("");
            signals.page == HOME_PAGE && (action.is_empty() || action == PROJECT_LIST_ACTION)
        }
        RenderContext::Project => {
            signals.page == HOME_PAGE || signals.page == PROJECT_SETUP_PAGE
        }
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
