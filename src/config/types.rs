use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
    #[serde(default = "default_image_path")]
    pub image_path: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_username")]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_sender_label")]
    pub sender_label: String,
    #[serde(default = "default_assistant_label")]
    pub assistant_label: String,
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    /// Append a notice fragment when a request fails.
    #[serde(default = "default_surface_errors")]
    pub surface_errors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_terminal")]
    pub terminal: bool,
    #[serde(default)]
    pub transcript_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            image_path: default_image_path(),
            timeout_secs: None,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sender_label: default_sender_label(),
            assistant_label: default_assistant_label(),
            image_width: default_image_width(),
            surface_errors: default_surface_errors(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            terminal: default_terminal(),
            transcript_path: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_chat_path() -> String {
    "/chat".to_string()
}

fn default_image_path() -> String {
    "/image".to_string()
}

fn default_username() -> String {
    "guest".to_string()
}

fn default_sender_label() -> String {
    "Sender".to_string()
}

fn default_assistant_label() -> String {
    "Assistant".to_string()
}

fn default_image_width() -> u32 {
    300
}

fn default_surface_errors() -> bool {
    true
}

fn default_terminal() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}
