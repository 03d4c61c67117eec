//! View-model envelope and the renderer collaborator.

/// maud-backed HTML renderer.
pub mod html;

pub use html::HtmlRenderer;

use crate::AppError;
use chrono::{Datelike, Utc};
use snippetbox_core::{Snippet, SnippetCreateForm};

/// Named page shapes the renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    View,
    Create,
}

impl View {
    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::View => "view",
            View::Create => "create",
        }
    }
}

/// Page-specific payload; exactly one per rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home { snippets: Vec<Snippet> },
    View { snippet: Snippet },
    Create { form: SnippetCreateForm },
}

/// Data handed to the renderer for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub current_year: i32,
    pub page: Page,
}

impl TemplateData {
    /// Wrap `page` with view-independent context stamped from the clock.
    pub fn new(page: Page) -> Self {
        Self {
            current_year: Utc::now().year(),
            page,
        }
    }

    /// View selected by the payload.
    pub fn view(&self) -> View {
        match self.page {
            Page::Home { .. } => View::Home,
            Page::View { .. } => View::View,
            Page::Create { .. } => View::Create,
        }
    }
}

/// Turns template data into a response body.
pub trait ViewRenderer: Send + Sync {
    /// Render the page described by `data`.
    ///
    /// # Errors
    /// Returns [`AppError::Render`] when the page cannot be produced; callers
    /// answer with 500 and never send a partial body.
    fn render(&self, data: &TemplateData) -> Result<String, AppError>;
}
