/// One unit of content appended to an output region.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Exchange {
        username: String,
        prompt: String,
        reply: String,
    },
    Image {
        username: String,
        prompt: String,
        src: String,
    },
    Notice {
        message: String,
    },
}

impl Fragment {
    pub fn exchange(
        username: impl Into<String>,
        prompt: impl Into<String>,
        reply: impl Into<String>,
    ) -> Self {
        Self::Exchange {
            username: username.into(),
            prompt: prompt.into(),
            reply: reply.into(),
        }
    }

    pub fn image(
        username: impl Into<String>,
        prompt: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        Self::Image {
            username: username.into(),
            prompt: prompt.into(),
            src: src.into(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }

    pub fn is_notice(&self) -> bool {
        matches!(self, Self::Notice { .. })
    }
}
