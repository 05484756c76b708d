//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]


use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use bookgrader::api::{BookCreate, CatalogClient, Genre};
use bookgrader::config::ServerConfig;
use bookgrader::feed::StatsFeed;
use bookgrader::view::CatalogViewModel;

use self::mock_catalog::MockCatalog;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Server config pointing at a mock catalog.
pub fn server_config(mock: &MockCatalog) -> ServerConfig {
    ServerConfig {
        origin: mock.origin(),
        ..ServerConfig::default()
    }
}

/// Client wired to a mock catalog.
pub fn client_for(mock: &MockCatalog) -> CatalogClient {
    CatalogClient::new(&server_config(mock))
}

/// View model wired to a mock catalog.
pub fn view_model_for(mock: &MockCatalog) -> CatalogViewModel {
    CatalogViewModel::new(client_for(mock))
}

/// Feed connected to a mock catalog.
pub async fn feed_for(mock: &MockCatalog) -> StatsFeed {
    StatsFeed::connect(&mock.feed_url(), Duration::from_secs(2))
        .await
        .expect("Failed to connect stats feed")
}

/// A valid creation draft for a well-known book.
pub fn dune() -> BookCreate {
    BookCreate {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        description: "Desert planet epic".to_string(),
        year_published: 1965,
        pages: 412,
        genres: vec![Genre::ScienceFiction],
    }
}

/// Create a temporary config file with the given TOML contents.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Poll a condition until it holds or the timeout elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
