//! Slash commands understood by the REPL

use genie_domain::{ArtifactType, InteractionMode, OutputTab};

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Mode(InteractionMode),
    Type(ArtifactType),
    Tab(OutputTab),
    Retry,
    Download,
    Reset,
    Transcript,
    History,
    Status,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line starting with `/`. The error is a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/retry" | "/r" => Ok(ReplCommand::Retry),
            "/download" | "/save" => Ok(ReplCommand::Download),
            "/reset" => Ok(ReplCommand::Reset),
            "/transcript" | "/t" => Ok(ReplCommand::Transcript),
            "/history" => Ok(ReplCommand::History),
            "/status" => Ok(ReplCommand::Status),
            "/mode" => Self::required(name, arg)?
                .parse()
                .map(ReplCommand::Mode)
                .map_err(|e| format!("{}", e)),
            "/type" => Self::required(name, arg)?
                .parse()
                .map(ReplCommand::Type)
                .map_err(|e| format!("{}", e)),
            "/tab" => Self::required(name, arg)?
                .parse()
                .map(ReplCommand::Tab)
                .map_err(|e| format!("{}", e)),
            _ => Err(format!("Unknown command: {}", name)),
        }
    }

    fn required<'a>(name: &str, arg: &'a str) -> Result<&'a str, String> {
        if arg.is_empty() {
            Err(format!("Usage: {} <value>", name))
        } else {
            Ok(arg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("/quit"), Ok(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/q"), Ok(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse(" /retry "), Ok(ReplCommand::Retry));
        assert_eq!(ReplCommand::parse("/reset"), Ok(ReplCommand::Reset));
        assert_eq!(ReplCommand::parse("/t"), Ok(ReplCommand::Transcript));
    }

    #[test]
    fn test_parse_with_argument() {
        assert_eq!(
            ReplCommand::parse("/mode chat"),
            Ok(ReplCommand::Mode(InteractionMode::Chat))
        );
        assert_eq!(
            ReplCommand::parse("/type  docker"),
            Ok(ReplCommand::Type(ArtifactType::Dockerfile))
        );
        assert_eq!(
            ReplCommand::parse("/tab explanation"),
            Ok(ReplCommand::Tab(OutputTab::Explanation))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ReplCommand::parse("/mode"),
            Err("Usage: /mode <value>".to_string())
        );
        assert!(ReplCommand::parse("/mode sideways").is_err());
        assert_eq!(
            ReplCommand::parse("/dance"),
            Err("Unknown command: /dance".to_string())
        );
    }
}
