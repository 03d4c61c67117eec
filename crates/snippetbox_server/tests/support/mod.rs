//! Shared integration-test server bootstrap helpers and fake collaborators.
#![allow(dead_code)]

use axum_test::TestServer;
use snippetbox_server::{
    create_app, render::TemplateData, AppError, AppState, Config, Database, HtmlRenderer, Snippet,
    SnippetStore, ViewRenderer,
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Arguments of one `insert` call seen by [`FakeStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertCall {
    pub title: String,
    pub content: String,
    pub expires_days: i64,
}

/// In-memory store with canned results and a log of insert calls.
pub struct FakeStore {
    snippets: Vec<Snippet>,
    next_id: u64,
    failing: bool,
    inserts: Mutex<Vec<InsertCall>>,
}

impl FakeStore {
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets,
            next_id: 1,
            failing: false,
            inserts: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_snippets(Vec::new())
    }

    /// Store whose inserts return `id`.
    pub fn returning_id(id: u64) -> Self {
        Self {
            next_id: id,
            ..Self::empty()
        }
    }

    /// Store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::empty()
        }
    }

    pub fn insert_calls(&self) -> Vec<InsertCall> {
        self.inserts.lock().expect("insert log").clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::Storage("store offline".to_string()));
        }
        Ok(())
    }
}

impl SnippetStore for FakeStore {
    fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        self.check()?;
        Ok(self.snippets.clone())
    }

    fn get(&self, id: u64) -> Result<Option<Snippet>, AppError> {
        self.check()?;
        Ok(self.snippets.iter().find(|snippet| snippet.id == id).cloned())
    }

    fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<u64, AppError> {
        self.check()?;
        self.inserts.lock().expect("insert log").push(InsertCall {
            title: title.to_string(),
            content: content.to_string(),
            expires_days,
        });
        Ok(self.next_id)
    }
}

/// Renderer that records every template data bag and delegates to HTML.
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: Mutex<Vec<TemplateData>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<TemplateData> {
        self.rendered.lock().expect("render log").clone()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, data: &TemplateData) -> Result<String, AppError> {
        self.rendered.lock().expect("render log").push(data.clone());
        HtmlRenderer.render(data)
    }
}

/// Renderer that always fails.
pub struct FailingRenderer;

impl ViewRenderer for FailingRenderer {
    fn render(&self, _data: &TemplateData) -> Result<String, AppError> {
        Err(AppError::Render("template missing".to_string()))
    }
}

pub fn test_config_for_db_path(db_path: &Path) -> Config {
    Config {
        port: 0,
        db_path: db_path.to_str().expect("db path").to_string(),
        max_form_size: 64 * 1024,
        latest_limit: 10,
    }
}

/// Server over fake collaborators, returning handles for inspection.
pub fn fake_server(store: FakeStore) -> (TestServer, Arc<FakeStore>, Arc<RecordingRenderer>) {
    let store = Arc::new(store);
    let renderer = Arc::new(RecordingRenderer::default());
    let config = test_config_for_db_path(Path::new("/nonexistent/snippetbox-test"));
    let state = AppState::with_collaborators(config, store.clone(), renderer.clone());
    let server = TestServer::new(create_app(state)).expect("server");
    (server, store, renderer)
}

/// Server whose renderer always fails.
pub fn failing_render_server(store: FakeStore) -> TestServer {
    let config = test_config_for_db_path(Path::new("/nonexistent/snippetbox-test"));
    let state = AppState::with_collaborators(config, Arc::new(store), Arc::new(FailingRenderer));
    TestServer::new(create_app(state)).expect("server")
}

pub fn test_server_for_config(config: Config) -> TestServer {
    let db = Database::new(config.db_path.as_str()).expect("open db");
    let state = AppState::new(config, db);
    TestServer::new(create_app(state)).expect("server")
}

/// Server over a real temporary database.
pub fn setup_test_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = test_config_for_db_path(&db_path);
    (test_server_for_config(config), temp_dir)
}
