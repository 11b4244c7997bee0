use super::*;

// --- marker extraction ---

#[test]
fn marker_is_detected_and_stripped() {
    let c = classify("Generated slide: Revenue Outlook #SLIDE_ID:1a2b3c");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Generated("1a2b3c".to_owned())));
    assert_eq!(c.cleaned, "Generated slide: Revenue Outlook");
}

#[test]
fn marker_mid_text_leaves_surrounding_text() {
    let c = classify("before #SLIDE_ID:ff after");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Generated("ff".to_owned())));
    assert_eq!(c.cleaned, "before  after");
}

#[test]
fn marker_id_is_lowercase_hex_only() {
    // Uppercase hex is outside the identifier alphabet; the id stops at it.
    let c = classify("x #SLIDE_ID:a1B2");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Generated("a1".to_owned())));
    assert_eq!(c.cleaned, "x B2");
}

#[test]
fn marker_without_id_is_not_a_marker() {
    let c = classify("see #SLIDE_ID: nothing");
    assert_eq!(c.label, Label::Text);
    assert_eq!(c.cleaned, "see #SLIDE_ID: nothing");
}

#[test]
fn first_marker_wins() {
    let c = classify("#SLIDE_ID:aa and #SLIDE_ID:bb");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Generated("aa".to_owned())));
    assert_eq!(c.cleaned, "and #SLIDE_ID:bb");
}

// --- legacy fallback ---

#[test]
fn legacy_caption_maps_to_legacy_variant() {
    let c = classify("Generated slide: Quarterly Report");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Legacy));
    assert_eq!(c.cleaned, "Generated slide: Quarterly Report");
}

#[test]
fn marker_takes_precedence_over_legacy_caption() {
    let c = classify("Generated slide: Report #SLIDE_ID:0f");
    assert_eq!(c.label, Label::Artifact(ArtifactId::Generated("0f".to_owned())));
}

// --- plain text ---

#[test]
fn plain_text_is_text() {
    let c = classify("Here is some advice about slide design.");
    assert_eq!(c.label, Label::Text);
    assert_eq!(c.cleaned, "Here is some advice about slide design.");
}

#[test]
fn empty_input_is_text() {
    let c = classify("");
    assert_eq!(c.label, Label::Text);
    assert_eq!(c.cleaned, "");
}

// --- has_marker ---

#[test]
fn has_marker_matches_classify() {
    assert!(has_marker("a #SLIDE_ID:deadbeef b"));
    assert!(!has_marker("Generated slide: no id here"));
    assert!(!has_marker("plain"));
}
