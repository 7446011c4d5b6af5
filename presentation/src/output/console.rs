//! Console output formatter for prompt session results

use colored::Colorize;
use genie_application::{NetworkError, PromptSession, SubmitOutcome};
use genie_domain::{
    ChatHistory, ChatTurn, CommandResult, InteractionMode, OutputTab, PromptRecord, Role,
};

/// Formats session results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render what a submit or retry produced, or `None` when there is
    /// nothing to show (ignored input, or a denial already announced by the
    /// observer).
    pub fn format_outcome(
        session: &PromptSession,
        outcome: &SubmitOutcome,
        tab: Option<OutputTab>,
    ) -> Option<String> {
        match outcome {
            SubmitOutcome::Ignored | SubmitOutcome::Denied => None,
            SubmitOutcome::Failed(e) => Some(Self::format_error(e, session.mode())),
            SubmitOutcome::Succeeded | SubmitOutcome::EmptyResult => match session.mode() {
                InteractionMode::Command => {
                    let result = session.command_result()?;
                    Some(match tab {
                        Some(tab) => result.tab_content(tab).to_string(),
                        None => Self::format_command_result(result),
                    })
                }
                InteractionMode::Chat => session
                    .chat_history()
                    .last_assistant()
                    .map(Self::format_turn),
            },
        }
    }

    /// Both halves of a command result.
    pub fn format_command_result(result: &CommandResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Command"));
        if result.is_empty_result() {
            output.push_str(&format!("{}\n", result.display_code().yellow()));
        } else {
            output.push_str(&result.code);
            output.push('\n');
        }

        output.push_str(&Self::section_header("Explanation"));
        output.push_str(&result.explanation);
        output.push('\n');

        output
    }

    /// One chat turn with its role label.
    pub fn format_turn(turn: &ChatTurn) -> String {
        let label = match turn.role {
            Role::User => "You:".cyan().bold(),
            Role::Assistant => "Genie:".green().bold(),
        };
        format!("{} {}", label, turn.content)
    }

    /// The whole chat transcript in order.
    pub fn format_transcript(history: &ChatHistory) -> String {
        if history.is_empty() {
            return "(no messages yet)".dimmed().to_string();
        }
        history
            .as_ordered_sequence()
            .iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn format_error(error: &NetworkError, mode: InteractionMode) -> String {
        let headline = match mode {
            InteractionMode::Command => "Error generating response. Please try again.",
            InteractionMode::Chat => "Sorry, something went wrong. Please try again.",
        };
        format!("{}\n{}", headline.red().bold(), error.message().dimmed())
    }

    /// Prompt history, newest first.
    pub fn format_history(records: &[PromptRecord]) -> String {
        if records.is_empty() {
            return "No prompts yet.".dimmed().to_string();
        }

        let mut output = Self::section_header("Prompt History");
        for record in records {
            output.push_str(&format!(
                "{} {} {}\n  {}\n",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .dimmed(),
                format!("[{}]", record.artifact_type).yellow(),
                record.mode.to_string().dimmed(),
                record.prompt
            ));
        }
        output
    }

    pub fn format_corrected(corrected: &str) -> String {
        format!("{}{}\n", Self::section_header("Corrected"), corrected)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use genie_domain::{ArtifactType, UserId};

    #[test]
    fn test_command_result_sections() {
        let result = CommandResult::from_response("```yaml\nkind: Pod\n```", Some("A pod."));
        let output = ConsoleFormatter::format_command_result(&result);
        assert!(output.contains("Command"));
        assert!(output.contains("kind: Pod"));
        assert!(output.contains("A pod."));
        assert!(!output.contains("```"));
    }

    #[test]
    fn test_empty_result_shows_advisory() {
        let result = CommandResult::from_response("", None);
        let output = ConsoleFormatter::format_command_result(&result);
        assert!(output.contains("No command generated."));
        assert!(output.contains("No explanation available."));
    }

    #[test]
    fn test_transcript_order() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("first"), ChatTurn::assistant("second"));
        let output = ConsoleFormatter::format_transcript(&history);
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_history_lists_prompts() {
        let records = vec![PromptRecord {
            user_id: UserId::try_new("u1").unwrap(),
            prompt: "redis statefulset".to_string(),
            artifact_type: ArtifactType::Kubernetes,
            mode: InteractionMode::Command,
            created_at: Utc.with_ymd_and_hms(2025, 5, 6, 7, 8, 0).unwrap(),
        }];
        let output = ConsoleFormatter::format_history(&records);
        assert!(output.contains("redis statefulset"));
        assert!(output.contains("2025-05-06 07:08"));
        assert!(output.contains("kubernetes"));
    }

    #[test]
    fn test_error_message_by_mode() {
        let error = NetworkError::status(500, "");
        assert!(
            ConsoleFormatter::format_error(&error, InteractionMode::Chat)
                .contains("Sorry, something went wrong")
        );
        assert!(
            ConsoleFormatter::format_error(&error, InteractionMode::Command)
                .contains("HTTP 500")
        );
    }
}
