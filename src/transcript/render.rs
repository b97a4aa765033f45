use super::Fragment;
use crate::config::RenderConfig;

/// Turns fragments into HTML (transcript file, in-memory region) or plain
/// text (terminal).
#[derive(Debug, Clone)]
pub struct Renderer {
    sender_label: String,
    assistant_label: String,
    image_width: u32,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            sender_label: config.sender_label.clone(),
            assistant_label: config.assistant_label.clone(),
            image_width: config.image_width,
        }
    }

    pub fn html(&self, fragment: &Fragment) -> String {
        match fragment {
            Fragment::Exchange { prompt, reply, .. } => format!(
                "<p><b>{}:</b> {}</p><p><b>{}:</b> {}</p>",
                escape_html(&self.sender_label),
                escape_html(prompt),
                escape_html(&self.assistant_label),
                escape_html(reply),
            ),
            Fragment::Image { src, .. } => format!(
                "<img src=\"{}\" width=\"{}\">",
                escape_html(src),
                self.image_width
            ),
            Fragment::Notice { message } => {
                format!("<p class=\"error\">{}</p>", escape_html(message))
            }
        }
    }

    pub fn text(&self, fragment: &Fragment) -> String {
        match fragment {
            Fragment::Exchange { prompt, reply, .. } => format!(
                "{}: {}\n{}: {}\n",
                self.sender_label, prompt, self.assistant_label, reply
            ),
            Fragment::Image { src, .. } => format!("[image {}px] {}\n", self.image_width, src),
            Fragment::Notice { message } => format!("! {}\n", message),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
