// Shared helpers for booting the card server against a throwaway source file.
use card_server::ServerConfig;
use std::net::Ipv4Addr;
use std::path::PathBuf;

// Unique path under the OS temp dir; the file itself is not created.
pub fn temp_source_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "card-server-{}-filtered_cards.json",
        uuid::Uuid::new_v4()
    ))
}

// Start a server on an ephemeral port inside the current test runtime and return its base URL.
pub async fn spawn_server(source_path: PathBuf) -> String {
    // Bind before spawning so the socket is already accepting when we return.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let config = ServerConfig {
        debug: false,
        host: Ipv4Addr::LOCALHOST.into(),
        port: addr.port(),
        source_path,
    };

    tokio::spawn(async move {
        card_server::run(listener, config)
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}

// Removes the source file when a test finishes, pass or fail.
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new() -> Self {
        Self {
            path: temp_source_path(),
        }
    }

    pub fn write(&self, contents: &str) {
        std::fs::write(&self.path, contents).expect("write source file");
    }
}

impl Drop for SourceFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
