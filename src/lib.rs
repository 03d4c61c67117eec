//! Root crate facade for the Snippetbox server.

pub use snippetbox_core::{forms, validation};
pub use snippetbox_server::{
    config, create_app, error, handlers, models, render, resolve_bind_address, serve_router,
    AppError, AppState, Config, Database, HtmlRenderer, HttpError, Snippet, SnippetStore,
    TemplateData, ViewRenderer,
};
