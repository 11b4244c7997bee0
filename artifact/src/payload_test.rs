use super::*;

fn wire(component: Option<&str>, html: Option<&str>, title: Option<&str>) -> SlideData {
    SlideData {
        component_code: component.map(ToOwned::to_owned),
        html_code: html.map(ToOwned::to_owned),
        action_title: title.map(ToOwned::to_owned),
        ..SlideData::default()
    }
}

// --- validity rule ---

#[test]
fn component_source_is_valid() {
    let payload = ArtifactPayload::from_wire(&wire(Some("export default function S() {}"), None, None));
    assert!(matches!(payload, Some(ArtifactPayload::ComponentSource { .. })));
}

#[test]
fn html_document_is_valid() {
    let payload = ArtifactPayload::from_wire(&wire(None, Some("<html></html>"), None));
    assert!(matches!(payload, Some(ArtifactPayload::HtmlDocument { .. })));
}

#[test]
fn title_alone_is_valid_chart_blocks() {
    let payload = ArtifactPayload::from_wire(&wire(None, None, Some("Revenue Outlook")));
    match payload {
        Some(ArtifactPayload::ChartBlocks { title, subtitle, blocks }) => {
            assert_eq!(title, "Revenue Outlook");
            assert_eq!(subtitle, "");
            assert!(blocks.is_empty());
        }
        other => panic!("expected chart blocks, got {other:?}"),
    }
}

#[test]
fn component_source_wins_over_html_and_title() {
    let payload = ArtifactPayload::from_wire(&wire(Some("code"), Some("<html/>"), Some("T")));
    assert!(matches!(payload, Some(ArtifactPayload::ComponentSource { .. })));
}

#[test]
fn html_wins_over_title() {
    let payload = ArtifactPayload::from_wire(&wire(None, Some("<html/>"), Some("T")));
    assert!(matches!(payload, Some(ArtifactPayload::HtmlDocument { .. })));
}

#[test]
fn empty_payload_is_invalid() {
    assert_eq!(ArtifactPayload::from_wire(&SlideData::default()), None);
}

#[test]
fn whitespace_only_content_is_invalid() {
    assert_eq!(ArtifactPayload::from_wire(&wire(Some("   "), Some("\n\t"), Some("  "))), None);
}

#[test]
fn sentinel_title_is_invalid() {
    assert_eq!(ArtifactPayload::from_wire(&wire(None, None, Some("Unexpected Error"))), None);
}

#[test]
fn sentinel_title_with_html_is_still_valid() {
    let payload = ArtifactPayload::from_wire(&wire(None, Some("<html/>"), Some("Unexpected Error")));
    assert!(matches!(payload, Some(ArtifactPayload::HtmlDocument { .. })));
}

// --- fallback caption ---

#[test]
fn fallback_prefers_conversation_text() {
    let data = SlideData {
        conversation_text: Some("Here is my thinking.".to_owned()),
        action_title: Some("Title".to_owned()),
        ..SlideData::default()
    };
    assert_eq!(data.fallback_caption(), Some("Here is my thinking."));
}

#[test]
fn fallback_uses_action_title_when_no_conversation_text() {
    let data = SlideData {
        action_title: Some("System Error".to_owned()),
        ..SlideData::default()
    };
    assert_eq!(data.fallback_caption(), Some("System Error"));
}

#[test]
fn fallback_never_surfaces_the_error_sentinel() {
    let data = SlideData {
        action_title: Some("Unexpected Error".to_owned()),
        ..SlideData::default()
    };
    assert_eq!(data.fallback_caption(), None);
}

#[test]
fn fallback_absent_when_both_empty() {
    let data = SlideData {
        conversation_text: Some("  ".to_owned()),
        ..SlideData::default()
    };
    assert_eq!(data.fallback_caption(), None);
}

// --- wire format ---

#[test]
fn deserializes_generation_response() {
    let json = r#"{
        "id": "1a2b",
        "actionTitle": "Churn Analysis",
        "subtitle": "Q3 deep dive",
        "htmlCode": null,
        "blocks": [
            {
                "type": "BAR",
                "title": "Churn by cohort",
                "description": "Monthly",
                "series": [
                    { "label": "Jan", "value": 4.2 },
                    { "label": "Feb", "value": 3.1 }
                ],
                "metric": { "value": "-1.1pp", "label": "MoM", "trend": "down" }
            },
            { "type": "METRIC", "title": "Net churn", "metric": { "value": "2.4%", "label": "Q3" } }
        ]
    }"#;

    let data: SlideData = serde_json::from_str(json).expect("valid payload json");
    assert_eq!(data.id.as_deref(), Some("1a2b"));
    assert_eq!(data.blocks.len(), 2);
    assert_eq!(data.blocks[0].kind, BlockKind::Bar);
    assert_eq!(data.blocks[0].series[1].label, "Feb");
    assert_eq!(data.blocks[1].kind, BlockKind::Metric);
    assert_eq!(data.blocks[1].metric.as_ref().map(|m| m.value.as_str()), Some("2.4%"));
    assert_eq!(data.blocks[1].metric.as_ref().and_then(|m| m.trend.as_deref()), None);
}

#[test]
fn unknown_fields_are_tolerated() {
    let json = r#"{ "actionTitle": "T", "layout": "GRID", "extra": 1 }"#;
    let data: SlideData = serde_json::from_str(json).expect("lenient decode");
    assert_eq!(data.action_title.as_deref(), Some("T"));
}
