//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use default_backend::config::ResponderConfig;
use default_backend::http::HttpServer;
use default_backend::lifecycle::Shutdown;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A page root populated with the given `(file name, contents)` pairs.
pub fn page_root(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

/// Configuration serving pages from `root`.
pub fn config_for(root: &Path) -> ResponderConfig {
    let mut config = ResponderConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.pages.root = root.to_string_lossy().into_owned();
    config
}

/// A server running on an ephemeral port until dropped or shut down.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the server on an ephemeral localhost port.
#[allow(dead_code)]
pub async fn start_server(config: ResponderConfig) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never pools connections, so shutdown is not held open.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
