/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    Image(String),
    User(String),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Self::Empty;
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Self::Chat(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim_start()),
            None => (rest, ""),
        };

        match name {
            "image" | "img" => Self::Image(arg.to_string()),
            "user" => {
                let username = arg.trim();
                if username.is_empty() {
                    Self::Invalid("usage: /user <name>".to_string())
                } else {
                    Self::User(username.to_string())
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            // "//text" sends a chat message starting with a slash
            _ if rest.starts_with('/') => Self::Chat(rest.to_string()),
            other => Self::Invalid(format!("unknown command '/{}', try /help", other)),
        }
    }
}

pub const HELP: &str = "\
<text>           send a chat prompt
/image <prompt>  request an image
/user <name>     change the username sent with requests
/help            show this help
/quit            wait for pending requests and exit
";
