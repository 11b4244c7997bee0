use super::*;

fn html_payload() -> SlideData {
    SlideData {
        id: Some("1a2b".to_owned()),
        html_code: Some("<html><body>slide</body></html>".to_owned()),
        ..SlideData::default()
    }
}

fn invalid_payload() -> SlideData {
    SlideData {
        action_title: Some("Unexpected Error".to_owned()),
        ..SlideData::default()
    }
}

// --- phase machine ---

#[test]
fn starts_idle() {
    let state = ChatState::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.messages.is_empty());
}

#[test]
fn begin_send_appends_user_message_and_awaits() {
    let mut state = ChatState::default();
    state.begin_send("Make a revenue chart");
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "Make a revenue chart");
    assert_eq!(state.phase, Phase::AwaitingGeneration);
    assert_eq!(state.progress.step(), 0);
}

#[test]
fn begin_send_resets_progress() {
    let mut state = ChatState::default();
    state.begin_send("first");
    state.advance_progress();
    state.advance_progress();
    state.settle_failure();
    state.begin_send("second");
    assert_eq!(state.progress.step(), 0);
}

#[test]
fn session_create_is_the_sending_phase() {
    let mut state = ChatState::default();
    state.begin_session_create();
    assert_eq!(state.phase, Phase::Sending);
    assert!(state.phase.is_busy());
}

#[test]
fn settled_is_not_busy() {
    let mut state = ChatState::default();
    state.begin_send("x");
    assert!(state.phase.is_busy());
    state.settle_failure();
    assert!(!state.phase.is_busy());
}

// --- generation resolution ---

#[test]
fn valid_payload_settles_as_artifact_message() {
    let mut state = ChatState::default();
    state.begin_send("chart please");
    state.settle_success(&html_payload());

    assert_eq!(state.phase, Phase::Settled);
    let reply = state.messages.last().expect("assistant reply");
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, SLIDE_CAPTION);
    assert!(matches!(reply.kind, MessageKind::Artifact(ArtifactPayload::HtmlDocument { .. })));
    assert_eq!(reply.artifact_id, Some(ArtifactId::Generated("1a2b".to_owned())));
}

#[test]
fn invalid_payload_settles_as_text_with_fallback_caption() {
    let mut state = ChatState::default();
    state.begin_send("x");
    let data = SlideData {
        conversation_text: Some("Here's what I'd suggest instead.".to_owned()),
        ..invalid_payload()
    };
    state.settle_success(&data);

    let reply = state.messages.last().expect("assistant reply");
    assert_eq!(reply.kind, MessageKind::Text);
    assert_eq!(reply.content, "Here's what I'd suggest instead.");
    assert_eq!(state.phase, Phase::Settled);
}

#[test]
fn invalid_payload_without_caption_uses_default() {
    let mut state = ChatState::default();
    state.begin_send("x");
    state.settle_success(&invalid_payload());
    assert_eq!(state.messages.last().expect("reply").content, NO_SLIDE_CAPTION);
}

#[test]
fn failure_settles_with_generic_text() {
    let mut state = ChatState::default();
    state.begin_send("x");
    state.settle_failure();
    let reply = state.messages.last().expect("reply");
    assert_eq!(reply.content, FAILURE_CAPTION);
    assert_eq!(reply.kind, MessageKind::Text);
    assert_eq!(state.phase, Phase::Settled);
}

#[test]
fn failure_always_leaves_the_awaiting_phase() {
    // The progress ticker keeps running only while the phase is
    // AwaitingGeneration; every failure path must exit it.
    let mut state = ChatState::default();
    state.begin_send("x");
    assert_eq!(state.phase, Phase::AwaitingGeneration);
    state.settle_failure();
    assert_ne!(state.phase, Phase::AwaitingGeneration);
    assert!(!state.phase.is_busy());

    let mut created = ChatState::default();
    created.begin_session_create();
    created.settle_failure();
    assert!(!created.phase.is_busy());
}

// --- navigation teardown ---

#[test]
fn reset_for_discards_everything() {
    let mut state = ChatState::default();
    state.session_id = Some("old".to_owned());
    state.begin_send("x");
    state.advance_progress();

    state.reset_for(Some("new".to_owned()));
    assert_eq!(state.session_id.as_deref(), Some("new"));
    assert!(state.messages.is_empty());
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.progress.step(), 0);
}

// --- history reconciliation ---

#[test]
fn plain_wire_message_stays_text() {
    let msg = reconcile("assistant", "Just some advice.", None);
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.kind, MessageKind::Text);
    assert_eq!(msg.content, "Just some advice.");
}

#[test]
fn user_role_maps_from_wire() {
    assert_eq!(reconcile("user", "hi", None).role, Role::User);
    assert_eq!(reconcile("ai", "hi", None).role, Role::Assistant);
}

#[test]
fn marker_with_valid_payload_becomes_artifact() {
    let msg = reconcile(
        "assistant",
        "Generated slide: Revenue #SLIDE_ID:1a2b",
        Some(&html_payload()),
    );
    assert!(matches!(msg.kind, MessageKind::Artifact(_)));
    assert_eq!(msg.content, "Generated slide: Revenue");
    assert_eq!(msg.artifact_id, Some(ArtifactId::Generated("1a2b".to_owned())));
}

#[test]
fn marker_with_invalid_payload_downgrades_to_text_without_marker() {
    // Empty title, no HTML: must render as plain text with the marker
    // stripped from the displayed content.
    let msg = reconcile(
        "assistant",
        "Generated slide: Broken #SLIDE_ID:ff",
        Some(&SlideData::default()),
    );
    assert_eq!(msg.kind, MessageKind::Text);
    assert_eq!(msg.content, "Generated slide: Broken");
    assert_eq!(msg.artifact_id, None);
}

#[test]
fn marker_with_failed_lookup_downgrades_to_text() {
    let msg = reconcile("assistant", "See #SLIDE_ID:abc", None);
    assert_eq!(msg.kind, MessageKind::Text);
    assert_eq!(msg.content, "See");
}

#[test]
fn legacy_caption_without_payload_downgrades_to_text() {
    // Legacy records carry no identifier, so there is never a payload to
    // resolve; the caption itself remains the display text.
    let msg = reconcile("assistant", "Generated slide: Old Deck", None);
    assert_eq!(msg.kind, MessageKind::Text);
    assert_eq!(msg.content, "Generated slide: Old Deck");
}

// --- pending prompt ---

#[test]
fn pending_prompt_matches_by_session() {
    let intent = PendingPrompt { session_id: "s1".to_owned(), text: "draw".to_owned() };
    assert_eq!(intent.session_id, "s1");
    assert_eq!(intent.text, "draw");
}
