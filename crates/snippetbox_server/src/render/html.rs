//! HTML pages rendered with maud; all dynamic text is escaped.

use super::{Page, TemplateData, ViewRenderer};
use crate::AppError;
use chrono::{DateTime, Utc};
use maud::{html, Markup, DOCTYPE};
use snippetbox_core::{
    constants::ALLOWED_EXPIRES_DAYS,
    validation::{CONTENT_FIELD, EXPIRES_FIELD, TITLE_FIELD},
    Snippet, SnippetCreateForm,
};

const EMPTY_HOME_MESSAGE: &str = "There's nothing to see here... yet!";

/// Default renderer producing complete HTML documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, data: &TemplateData) -> Result<String, AppError> {
        let (title, main) = match &data.page {
            Page::Home { snippets } => ("Home".to_string(), home(snippets)),
            Page::View { snippet } => (format!("Snippet #{}", snippet.id), view(snippet)),
            Page::Create { form } => ("Create a New Snippet".to_string(), create(form)),
        };
        Ok(layout(&title, data.current_year, main).into_string())
    }
}

fn human_date(value: DateTime<Utc>) -> String {
    value.format("%d %b %Y at %H:%M").to_string()
}

fn expires_label(days: i64) -> String {
    match days {
        1 => "One Day".to_string(),
        7 => "One Week".to_string(),
        365 => "One Year".to_string(),
        other => format!("{} Days", other),
    }
}

fn layout(title: &str, current_year: i32, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                nav {
                    a href="/" { "Home" }
                    " "
                    a href="/snippet/create" { "Create snippet" }
                }
                main { (main) }
                footer { "Powered by Rust in " (current_year) }
            }
        }
    }
}

fn home(snippets: &[Snippet]) -> Markup {
    html! {
        h2 { "Latest Snippets" }
        @if snippets.is_empty() {
            p { (EMPTY_HOME_MESSAGE) }
        } @else {
            table {
                tr {
                    th { "Title" }
                    th { "Created" }
                    th { "ID" }
                }
                @for snippet in snippets {
                    tr {
                        td { a href=(snippet.view_path()) { (snippet.title) } }
                        td { (human_date(snippet.created)) }
                        td { "#" (snippet.id) }
                    }
                }
            }
        }
    }
}

fn view(snippet: &Snippet) -> Markup {
    html! {
        div.snippet {
            div.metadata {
                strong { (snippet.title) }
                span { "#" (snippet.id) }
            }
            pre { code { (snippet.content) } }
            div.metadata {
                time { "Created: " (human_date(snippet.created)) }
                " "
                time { "Expires: " (human_date(snippet.expires)) }
            }
        }
    }
}

fn field_error(form: &SnippetCreateForm, field: &str) -> Markup {
    html! {
        @if let Some(message) = form.error_for(field) {
            label.error { (message) }
        }
    }
}

fn create(form: &SnippetCreateForm) -> Markup {
    html! {
        form action="/snippet/create" method="POST" {
            div {
                label for="title" { "Title:" }
                (field_error(form, TITLE_FIELD))
                input type="text" id="title" name="title" value=(form.title);
            }
            div {
                label for="content" { "Content:" }
                (field_error(form, CONTENT_FIELD))
                textarea id="content" name="content" { (form.content) }
            }
            div {
                label { "Delete in:" }
                (field_error(form, EXPIRES_FIELD))
                @for days in ALLOWED_EXPIRES_DAYS.into_iter().rev() {
                    input type="radio" name="expires" value=(days) checked[form.expires == days];
                    " " (expires_label(days)) " "
                }
            }
            div {
                input type="submit" value="Publish snippet";
            }
        }
    }
}
