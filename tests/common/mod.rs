#![allow(dead_code)]

use axum_test::TestServer;
use linktrail::infrastructure::persistence::MemoryLinkRepository;
use linktrail::routes::router;
use linktrail::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://host";

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), BASE_URL);
    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repository)
}

/// Extracts the identifier from a short link returned by `POST /links`.
pub fn identifier_of(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{BASE_URL}/"))
        .unwrap_or_else(|| panic!("unexpected short link {short_url}"))
        .to_string()
}
