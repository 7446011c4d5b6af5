//! REPL (Read-Eval-Print Loop) for interactive prompting

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::output::download::save_download;
use colored::Colorize;
use genie_application::{PromptHistoryUseCase, PromptSession, SubmitOutcome};
use genie_domain::{ArtifactType, OutputTab};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive REPL over a [`PromptSession`]
pub struct ChatRepl {
    session: PromptSession,
    history: Option<PromptHistoryUseCase>,
    tab: OutputTab,
    download_dir: PathBuf,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: PromptSession) -> Self {
        Self {
            session,
            history: None,
            tab: OutputTab::default(),
            download_dir: PathBuf::from("."),
        }
    }

    /// Enable the /history command
    pub fn with_history(mut self, history: PromptHistoryUseCase) -> Self {
        self.history = Some(history);
        self
    }

    /// Set the directory /download writes to
    pub fn with_download_dir(mut self, dir: PathBuf) -> Self {
        self.download_dir = dir;
        self
    }

    /// Set the initial output tab
    pub fn with_tab(mut self, tab: OutputTab) -> Self {
        self.tab = tab;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("infragenie").join("repl_history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.prompt_label());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_prompt(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt_label(&self) -> String {
        format!(
            "{}:{}> ",
            self.session.mode(),
            self.session.artifact_type()
        )
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 InfraGenie                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        self.print_status();
        println!();
        Self::print_help();
    }

    fn print_status(&self) {
        println!("Mode: {}", self.session.mode().to_string().cyan());
        println!("Type: {}", self.session.artifact_type().to_string().cyan());
        let exchanges = self.session.chat_history().exchange_count();
        if exchanges > 0 {
            println!("Chat: {} exchange(s)", exchanges);
        }
        match self.session.current_user() {
            Some(user) => println!("Signed in as {}", user.to_string().green()),
            None => {
                let remaining = self.session.quota_remaining().unwrap_or(0);
                println!("Anonymous: {} free prompt(s) left", remaining);
            }
        }
    }

    fn print_help() {
        println!("Commands:");
        println!("  /mode <command|chat>   - Switch interaction mode");
        let types = ArtifactType::builtin()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  /type <name>           - Switch artifact type ({}, ...)", types);
        println!("  /tab <command|explanation> - Choose what /download saves");
        println!("  /retry                 - Resend the last failed request");
        println!("  /download              - Save the current result to a file");
        println!("  /transcript            - Show the chat transcript");
        println!("  /reset                 - Clear the chat transcript");
        println!("  /history               - List your previous prompts");
        println!("  /status                - Show mode, type and quota");
        println!("  /help                  - Show this help");
        println!("  /quit                  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
                return false;
            }
        };

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Status => self.print_status(),
            ReplCommand::Mode(mode) => {
                self.session.set_mode(mode);
                println!("Mode: {}", mode);
            }
            ReplCommand::Type(artifact) => {
                println!("Type: {}", artifact);
                self.session.set_artifact_type(artifact);
            }
            ReplCommand::Tab(tab) => {
                self.tab = tab;
                println!("Tab: {}", tab);
            }
            ReplCommand::Retry => match self.session.retry().await {
                Ok(outcome) => self.print_outcome(&outcome),
                Err(e) => println!("{}", e),
            },
            ReplCommand::Download => self.download(),
            ReplCommand::Reset => {
                self.session.reset_chat();
                println!("Chat transcript cleared.");
            }
            ReplCommand::Transcript => println!(
                "{}",
                ConsoleFormatter::format_transcript(self.session.chat_history())
            ),
            ReplCommand::History => self.show_history().await,
        }
        false
    }

    /// Submit one prompt as if it had been typed at the REPL.
    pub async fn process_prompt(&mut self, prompt: &str) {
        println!();
        self.session.set_input(prompt);
        let outcome = self.session.submit().await;
        self.print_outcome(&outcome);
    }

    fn print_outcome(&self, outcome: &SubmitOutcome) {
        if let Some(output) = ConsoleFormatter::format_outcome(&self.session, outcome, None) {
            println!("{}", output);
            if matches!(outcome, SubmitOutcome::Failed(_)) {
                println!("{}", "Type /retry to try again.".dimmed());
            }
            println!();
        }
    }

    fn download(&self) {
        let Some(artifact) = self.session.download(self.tab) else {
            println!("Nothing to download yet.");
            return;
        };
        match save_download(&self.download_dir, &artifact) {
            Ok(path) => println!("Saved {}", path.display().to_string().green()),
            Err(e) => eprintln!("Error: could not save {}: {}", artifact.file_name, e),
        }
    }

    async fn show_history(&self) {
        let Some(history) = &self.history else {
            println!("Prompt history is disabled.");
            return;
        };
        let user = self.session.current_user();
        if user.is_none() {
            println!("Sign in to keep a prompt history.");
            return;
        }
        match history.execute(user.as_ref()).await {
            Ok(records) => println!("{}", ConsoleFormatter::format_history(&records)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
