//! Prompt session use case.
//!
//! Owns the mode and artifact selection of one user session and sequences a
//! submission through quota, dispatch, extraction and telemetry:
//!
//! 1. [`QuotaGate`] decides whether the submission may proceed
//! 2. the [`RequestDispatcher`] sends the built request
//! 3. the response becomes a [`CommandResult`] or a chat exchange
//! 4. a [`PromptRecord`] goes to the [`TelemetrySink`] on a detached task
//!
//! The presentation layer renders from [`PromptSession::state`] and hears
//! about transitions through a [`SessionObserver`].

use crate::config::SessionConfig;
use crate::ports::identity_provider::IdentityProvider;
use crate::ports::prompt_store::{NoTelemetry, TelemetrySink};
use crate::ports::quota_store::QuotaStore;
use crate::ports::request_dispatcher::{NetworkError, RequestDispatcher};
use crate::ports::session_observer::{NoSessionObserver, SessionObserver};
use crate::quota_gate::QuotaGate;
use genie_domain::util::log_preview;
use genie_domain::{
    ArtifactType, ChatHistory, ChatTurn, CommandResult, DispatchRequest, DomainError,
    DownloadArtifact, InteractionMode, OutputTab, Prompt, PromptRecord, QuotaDecision,
    RawResponse, UserId, ViewState, extract_code,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from session actions that are rejected outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptSessionError {
    #[error("Retry is only available after a failed submission (current state: {state})")]
    RetryUnavailable { state: ViewState },

    #[error("No previous submission to retry")]
    NothingToRetry,
}

/// What happened to a submit or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank prompt; nothing was charged or sent.
    Ignored,
    /// Anonymous quota exhausted; nothing was sent.
    Denied,
    Succeeded,
    /// Command succeeded but no code came back.
    EmptyResult,
    Failed(NetworkError),
}

/// A request as it was dispatched, kept for retry.
#[derive(Debug, Clone)]
struct Submission {
    prompt: String,
    request: DispatchRequest,
}

/// One user's prompting session.
///
/// `submit` and `retry` take `&mut self`, so at most one dispatch is ever in
/// flight.
pub struct PromptSession {
    dispatcher: Arc<dyn RequestDispatcher>,
    identity: Arc<dyn IdentityProvider>,
    telemetry: Arc<dyn TelemetrySink>,
    observer: Arc<dyn SessionObserver>,
    gate: QuotaGate,
    config: SessionConfig,

    mode: InteractionMode,
    artifact: ArtifactType,
    input: String,
    state: ViewState,
    command_result: Option<CommandResult>,
    chat: ChatHistory,
    last_submission: Option<Submission>,
    last_error: Option<NetworkError>,
}

impl PromptSession {
    pub fn new(
        dispatcher: Arc<dyn RequestDispatcher>,
        quota_store: Arc<dyn QuotaStore>,
        identity: Arc<dyn IdentityProvider>,
        config: SessionConfig,
    ) -> Self {
        Self {
            dispatcher,
            identity,
            telemetry: Arc::new(NoTelemetry),
            observer: Arc::new(NoSessionObserver),
            gate: QuotaGate::new(config.quota.clone(), quota_store),
            config,
            mode: InteractionMode::default(),
            artifact: ArtifactType::default(),
            input: String::new(),
            state: ViewState::Idle,
            command_result: None,
            chat: ChatHistory::new(),
            last_submission: None,
            last_error: None,
        }
    }

    /// Set the sink that receives prompt records for signed-in users.
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Set the observer notified of state changes and quota notices.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_artifact_type(mut self, artifact: ArtifactType) -> Self {
        self.artifact = artifact;
        self
    }

    // ==================== Accessors ====================

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn artifact_type(&self) -> &ArtifactType {
        &self.artifact
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn command_result(&self) -> Option<&CommandResult> {
        self.command_result.as_ref()
    }

    pub fn chat_history(&self) -> &ChatHistory {
        &self.chat
    }

    pub fn last_error(&self) -> Option<&NetworkError> {
        self.last_error.as_ref()
    }

    pub fn current_user(&self) -> Option<UserId> {
        self.identity.current_user()
    }

    /// Free submissions left, or `None` for a signed-in user.
    pub fn quota_remaining(&self) -> Option<u32> {
        match self.identity.current_user() {
            Some(_) => None,
            None => Some(self.gate.remaining()),
        }
    }

    // ==================== Selection ====================

    /// Switch between Command and Chat.
    ///
    /// Clears the command result and returns a terminal state to `Idle`.
    /// The chat transcript survives.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode == mode {
            return;
        }
        debug!(from = %self.mode, to = %mode, "Switching mode");
        self.mode = mode;
        self.reset_output();
    }

    /// Change the artifact type. Same reset rules as [`set_mode`](Self::set_mode).
    pub fn set_artifact_type(&mut self, artifact: ArtifactType) {
        if self.artifact == artifact {
            return;
        }
        debug!(from = %self.artifact, to = %artifact, "Switching artifact type");
        self.artifact = artifact;
        self.reset_output();
    }

    /// Drop the chat transcript.
    pub fn reset_chat(&mut self) {
        self.chat.clear();
        if self.mode.keeps_history() {
            self.last_submission = None;
            self.last_error = None;
            if self.state.is_terminal() {
                self.set_state(ViewState::Idle);
            }
        }
    }

    fn reset_output(&mut self) {
        self.command_result = None;
        self.last_submission = None;
        self.last_error = None;
        if self.state.is_terminal() {
            self.set_state(ViewState::Idle);
        }
    }

    // ==================== Submission ====================

    /// Submit the current input in the current mode.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            return SubmitOutcome::Ignored;
        }
        let prompt = match Prompt::try_new(self.input.as_str()) {
            Ok(prompt) => prompt,
            Err(_) => {
                debug!("Ignoring blank prompt");
                return SubmitOutcome::Ignored;
            }
        };

        let user = self.identity.current_user();
        match self.gate.check(user.as_ref()) {
            QuotaDecision::Deny => {
                self.deny();
                return SubmitOutcome::Denied;
            }
            QuotaDecision::AllowWithWarning(message) => {
                self.observer.on_quota_warning(&message);
            }
            QuotaDecision::Allow => {}
        }

        let request = match self.mode {
            InteractionMode::Command => DispatchRequest::command(&prompt, self.artifact.clone()),
            InteractionMode::Chat => {
                DispatchRequest::chat(&self.chat, &prompt, self.artifact.clone())
            }
        };
        info!(
            mode = %self.mode,
            artifact = %self.artifact,
            signed_in = user.is_some(),
            "Submitting prompt: {}",
            log_preview(prompt.content(), 80)
        );

        let submission = Submission {
            prompt: prompt.into_content(),
            request,
        };
        self.last_submission = Some(submission.clone());
        self.run(submission, user).await
    }

    /// Resend the last failed request unchanged.
    ///
    /// Retrying is not charged against the quota.
    pub async fn retry(&mut self) -> Result<SubmitOutcome, PromptSessionError> {
        if !self.state.can_retry() {
            return Err(PromptSessionError::RetryUnavailable { state: self.state });
        }
        let submission = self
            .last_submission
            .clone()
            .ok_or(PromptSessionError::NothingToRetry)?;
        info!(endpoint = submission.request.endpoint(), "Retrying last request");
        let user = self.identity.current_user();
        Ok(self.run(submission, user).await)
    }

    fn deny(&mut self) {
        let message = DomainError::QuotaExceeded.to_string();
        info!("Anonymous quota exhausted; redirecting to sign-in");
        self.observer.on_quota_denied(&message);

        let observer = self.observer.clone();
        let delay = self.config.redirect_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            observer.on_auth_redirect();
        });

        if self.state.is_terminal() {
            self.set_state(ViewState::Idle);
        }
    }

    async fn run(&mut self, submission: Submission, user: Option<UserId>) -> SubmitOutcome {
        self.set_state(ViewState::Submitting);
        self.last_error = None;
        if matches!(submission.request, DispatchRequest::Command { .. }) {
            self.command_result = None;
        }

        debug!(endpoint = submission.request.endpoint(), "Dispatching request");
        let result = match self.dispatcher.send(&submission.request).await {
            Ok(raw) => self.apply_response(&submission, raw),
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => {
                self.set_state(ViewState::Succeeded);
                if self.config.record_success {
                    self.record(&submission, user);
                }
                outcome
            }
            Err(e) => {
                warn!(endpoint = submission.request.endpoint(), "Request failed: {}", e);
                self.apply_failure(&submission);
                self.last_error = Some(e.clone());
                self.set_state(ViewState::Failed);
                self.record(&submission, user);
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn apply_response(
        &mut self,
        submission: &Submission,
        raw: RawResponse,
    ) -> Result<SubmitOutcome, NetworkError> {
        match (&submission.request, raw) {
            (DispatchRequest::Command { .. }, RawResponse::Command { code, explanation }) => {
                let result = CommandResult::from_response(&code, explanation.as_deref());
                let outcome = if result.is_empty_result() {
                    debug!("Backend returned no code");
                    SubmitOutcome::EmptyResult
                } else {
                    SubmitOutcome::Succeeded
                };
                self.command_result = Some(result);
                Ok(outcome)
            }
            (DispatchRequest::Chat { .. }, RawResponse::Chat { response }) => {
                self.chat.append_exchange(
                    ChatTurn::user(submission.prompt.as_str()),
                    ChatTurn::assistant(response),
                );
                self.input.clear();
                Ok(SubmitOutcome::Succeeded)
            }
            (request, other) => Err(NetworkError::malformed(format!(
                "unexpected response for {}: {:?}",
                request.endpoint(),
                other
            ))),
        }
    }

    fn apply_failure(&mut self, submission: &Submission) {
        match submission.request {
            DispatchRequest::Chat { .. } => self.chat.append_exchange(
                ChatTurn::user(submission.prompt.as_str()),
                ChatTurn::error_placeholder(),
            ),
            _ => self.command_result = None,
        }
    }

    /// Fire-and-forget telemetry for a signed-in user.
    fn record(&self, submission: &Submission, user: Option<UserId>) {
        let Some(user) = user else {
            return;
        };
        let record = PromptRecord::now(
            user,
            submission.prompt.as_str(),
            submission.request.artifact().clone(),
            submission.request.mode().unwrap_or(self.mode),
        );
        let sink = self.telemetry.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.record(record).await {
                warn!("Failed to record prompt: {}", e);
            }
        });
    }

    fn set_state(&mut self, state: ViewState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.observer.on_state_change(state);
        if state.is_terminal() {
            self.observer.on_result_ready(state);
        }
    }

    // ==================== Output ====================

    /// Build the file to save for the current result.
    ///
    /// Command mode uses the chosen tab of the command result. Chat mode
    /// extracts code from the last real assistant reply and ignores `tab`;
    /// error placeholders are never saved.
    pub fn download(&self, tab: OutputTab) -> Option<DownloadArtifact> {
        let content = match self.mode {
            InteractionMode::Command => {
                let result = self.command_result.as_ref()?;
                if tab == OutputTab::Command && result.is_empty_result() {
                    return None;
                }
                result.tab_content(tab).to_string()
            }
            InteractionMode::Chat => {
                let turn = self.chat.last_reply()?;
                extract_code(&turn.content)
            }
        };
        if content.is_empty() {
            return None;
        }
        Some(DownloadArtifact::new(&self.artifact, content))
    }
}
