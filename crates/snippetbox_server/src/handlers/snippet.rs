//! Snippet HTTP handlers.

use super::ids::parse_snippet_id;
use crate::{
    error::HttpError,
    render::{Page, TemplateData},
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use snippetbox_core::{forms::RawSnippetForm, models::snippet::view_path, SnippetCreateForm};

fn render_page(state: &AppState, status: StatusCode, page: Page) -> Result<Response, HttpError> {
    let data = TemplateData::new(page);
    let body = state.renderer.render(&data)?;
    tracing::trace!(view = data.view().name(), status = status.as_u16(), "Rendered page");
    Ok((status, Html(body)).into_response())
}

/// Home page listing the latest snippets.
///
/// # Returns
/// The rendered `home` view with status 200.
///
/// # Errors
/// Returns a server error when the store or renderer fails.
pub async fn home(State(state): State<AppState>) -> Result<Response, HttpError> {
    let snippets = state.store.latest()?;
    render_page(&state, StatusCode::OK, Page::Home { snippets })
}

/// Show a single snippet.
///
/// Ids that are not positive integers are answered exactly like missing
/// snippets, without echoing the id back.
///
/// # Errors
/// Returns not found for a bad or unknown id, or a server error when the store
/// or renderer fails.
pub async fn snippet_view(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, HttpError> {
    let Ok(Path(raw_id)) = id else {
        return Err(HttpError::NotFound);
    };
    let id = parse_snippet_id(&raw_id).ok_or(HttpError::NotFound)?;
    let snippet = state.store.get(id)?.ok_or(HttpError::NotFound)?;
    render_page(&state, StatusCode::OK, Page::View { snippet })
}

/// Empty create form, pre-filled with the default expiry.
///
/// # Errors
/// Returns a server error when the renderer fails.
pub async fn snippet_create_form(State(state): State<AppState>) -> Result<Response, HttpError> {
    let form = SnippetCreateForm::default();
    render_page(&state, StatusCode::OK, Page::Create { form })
}

/// Accept a create submission.
///
/// A body that cannot be decoded, or an `expires` value that is not an
/// integer, is rejected with 400 before any validation runs. Repeated fields
/// keep their first value. Field errors
/// re-render the form with 422; a valid form is stored and redirected to its
/// view page with 303.
///
/// # Errors
/// Returns a client error for malformed input, or a server error when the
/// store or renderer fails.
pub async fn snippet_create(
    State(state): State<AppState>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, HttpError> {
    let Form(pairs) = body.map_err(|rejection| {
        tracing::debug!("Rejected create form body: {}", rejection);
        HttpError::Client(StatusCode::BAD_REQUEST)
    })?;
    let raw = RawSnippetForm::from_pairs(pairs);

    let expires = raw
        .parse_expires()
        .ok_or(HttpError::Client(StatusCode::BAD_REQUEST))?;

    let mut form = SnippetCreateForm::new(raw.title, raw.content, expires);
    form.validate();

    if !form.is_valid() {
        return render_page(&state, StatusCode::UNPROCESSABLE_ENTITY, Page::Create { form });
    }

    let id = state
        .store
        .insert(&form.title, &form.content, form.expires)?;
    tracing::info!(snippet_id = id, expires_days = form.expires, "Created snippet");

    Ok(Redirect::to(&view_path(id)).into_response())
}
