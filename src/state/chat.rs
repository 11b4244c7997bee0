#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use artifact::classify::{ArtifactId, Label, classify};
use artifact::payload::{ArtifactPayload, SlideData};
use artifact::progress::Progress;

/// Caption attached to an assistant message that carries a slide.
pub const SLIDE_CAPTION: &str = "I've generated a slide for you based on that.";

/// Caption when the service answered but produced nothing renderable and
/// supplied no text of its own.
pub const NO_SLIDE_CAPTION: &str = "I analyzed your request but couldn't generate a visual design.";

/// Caption for a failed generation request.
pub const FAILURE_CAPTION: &str = "Sorry, I encountered an error processing that.";

/// Title given to sessions created lazily on first send; the server renames
/// them once it has content to summarize.
pub const NEW_SESSION_TITLE: &str = "New Conversation";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire role strings; anything that is not a user message renders as
    /// the assistant.
    #[must_use]
    pub fn from_wire(role: &str) -> Self {
        if role == "user" { Self::User } else { Self::Assistant }
    }
}

/// What a message renders as. A message becomes `Artifact` only after its
/// payload resolved and passed the validity rule, so an artifact message
/// always has renderable content inline.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Text,
    Artifact(ArtifactPayload),
}

/// One entry in the session transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub kind: MessageKind,
    /// Persisted identifier, kept for resolved artifacts that have one.
    pub artifact_id: Option<ArtifactId>,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            kind: MessageKind::Text,
            artifact_id: None,
        }
    }

    #[must_use]
    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            kind: MessageKind::Text,
            artifact_id: None,
        }
    }

    #[must_use]
    pub fn assistant_artifact(
        content: impl Into<String>,
        artifact_id: Option<ArtifactId>,
        payload: ArtifactPayload,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            kind: MessageKind::Artifact(payload),
            artifact_id,
        }
    }
}

/// Generation lifecycle for the active session view. `Settled` re-enters
/// `Idle` on the next input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Lazy session creation is in flight; no generation has been issued.
    Sending,
    AwaitingGeneration,
    Settled,
}

impl Phase {
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Sending | Self::AwaitingGeneration)
    }
}

/// One-shot intent carried across the lazy-create navigation. The freshly
/// routed view consumes it exactly once and performs the generation; a page
/// reload finds nothing to re-trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPrompt {
    pub session_id: String,
    pub text: String,
}

/// State for the active session view. Owned exclusively by that view and
/// rebuilt from the server on every navigation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
    pub phase: Phase,
    pub progress: Progress,
}

impl ChatState {
    /// Tear down for a different session route. Any in-flight work for the
    /// previous session is treated as belonging to a dead view; async
    /// completions compare their session id against this one and bail.
    pub fn reset_for(&mut self, session_id: Option<String>) {
        self.session_id = session_id;
        self.messages.clear();
        self.phase = Phase::Idle;
        self.progress = Progress::default();
    }

    /// Optimistic send: the user message appears before anything is
    /// confirmed, and the view awaits generation.
    pub fn begin_send(&mut self, text: &str) {
        self.messages.push(Message::user(text));
        self.phase = Phase::AwaitingGeneration;
        self.progress = Progress::default();
    }

    /// Lazy session creation is in flight.
    pub fn begin_session_create(&mut self) {
        self.phase = Phase::Sending;
    }

    /// Apply a successful generation response: a valid payload appends an
    /// artifact message, anything else a plain-text caption. Either way the
    /// view settles.
    pub fn settle_success(&mut self, data: &SlideData) {
        match ArtifactPayload::from_wire(data) {
            Some(payload) => {
                let artifact_id = data.id.clone().map(ArtifactId::Generated);
                self.messages
                    .push(Message::assistant_artifact(SLIDE_CAPTION, artifact_id, payload));
            }
            None => {
                let caption = data.fallback_caption().unwrap_or(NO_SLIDE_CAPTION);
                self.messages.push(Message::assistant_text(caption));
            }
        }
        self.phase = Phase::Settled;
    }

    /// Apply a failed generation request. The session stays usable.
    pub fn settle_failure(&mut self) {
        self.messages.push(Message::assistant_text(FAILURE_CAPTION));
        self.phase = Phase::Settled;
    }

    /// Advance the cosmetic progress indicator by one stage.
    pub fn advance_progress(&mut self) {
        self.progress = self.progress.advanced();
    }
}

/// Rebuild one persisted message. `resolved` is the payload fetched for the
/// message's marker, if any. Resolution failure or an invalid payload
/// downgrades the message to plain text (marker stripped) instead of
/// surfacing a broken artifact.
#[must_use]
pub fn reconcile(role: &str, raw_content: &str, resolved: Option<&SlideData>) -> Message {
    let classification = classify(raw_content);
    let role = Role::from_wire(role);

    let downgrade = |content: String| Message {
        id: uuid::Uuid::new_v4().to_string(),
        role,
        content,
        kind: MessageKind::Text,
        artifact_id: None,
    };

    match classification.label {
        Label::Text => downgrade(classification.cleaned),
        Label::Artifact(id) => match resolved.and_then(ArtifactPayload::from_wire) {
            Some(payload) => Message {
                id: uuid::Uuid::new_v4().to_string(),
                role,
                content: classification.cleaned,
                kind: MessageKind::Artifact(payload),
                artifact_id: Some(id),
            },
            None => downgrade(classification.cleaned),
        },
    }
}
