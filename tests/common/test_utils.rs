use chatwire::{
    ChatClient,
    backend::Backend,
    config::{BackendConfig, Config},
    transcript::{MemorySink, Renderer},
};
use std::sync::Arc;
use tempfile::TempDir;

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.backend = BackendConfig {
        base_url: base_url.to_string(),
        ..BackendConfig::default()
    };
    config.output.terminal = false;
    config.logs.level = "debug".to_string();
    config
}

/// Create a client writing into a fresh in-memory region
pub fn create_memory_client(backend: Arc<dyn Backend>) -> (ChatClient, MemorySink) {
    let sink = MemorySink::new(Renderer::default());
    let client = ChatClient::new(backend, Arc::new(sink.clone()));
    (client, sink)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a config YAML file inside `dir`
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
backend:
  base_url: "http://chat.internal:9000"
  image_path: "/generate"
  timeout_secs: 30
user:
  username: "amy"
render:
  sender_label: "Sen"
  assistant_label: "BurakGPT"
  surface_errors: false
output:
  terminal: false
  transcript_path: "transcript.html"
logs:
  level: "debug"
"#;
