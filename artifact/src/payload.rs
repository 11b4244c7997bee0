#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::consts::ERROR_TITLE;

/// Raw generation payload as returned by `POST /api/generate` and stored
/// (JSON-encoded in a string field) in artifact history records.
///
/// Every field is optional on the wire; validity is decided by
/// [`ArtifactPayload::from_wire`], never by deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideData {
    pub id: Option<String>,
    pub action_title: Option<String>,
    pub subtitle: Option<String>,
    pub conversation_text: Option<String>,
    pub html_code: Option<String>,
    pub component_code: Option<String>,
    pub blocks: Vec<Block>,
}

impl SlideData {
    /// Caption to show as a plain-text assistant reply when the payload
    /// carries no renderable artifact. The error sentinel is never a
    /// caption; a payload rejected for carrying it must not surface it.
    #[must_use]
    pub fn fallback_caption(&self) -> Option<&str> {
        non_empty(self.conversation_text.as_deref())
            .or_else(|| non_empty(self.action_title.as_deref()).filter(|t| *t != ERROR_TITLE))
    }
}

/// One chart or metric block inside a chart-blocks slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
    #[serde(default)]
    pub metric: Option<Metric>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockKind {
    Area,
    Line,
    Bar,
    Metric,
}

/// A labelled data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Headline figure attached to a block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub trend: Option<String>,
}

/// A validated, renderable artifact.
///
/// The variants are checked in order: component source wins over an HTML
/// document, which wins over chart blocks.
#[derive(Clone, Debug, PartialEq)]
pub enum ArtifactPayload {
    /// Model-generated component source for the scoped evaluator.
    ComponentSource { source: String },
    /// Self-contained HTML/CSS/script document for the isolated surface.
    HtmlDocument { html: String },
    /// Structured chart-blocks slide rendered by the host itself.
    ChartBlocks {
        title: String,
        subtitle: String,
        blocks: Vec<Block>,
    },
}

impl ArtifactPayload {
    /// Accept a wire payload only if it carries real renderable content:
    /// non-empty component source, non-empty HTML, or a title distinct from
    /// the error sentinel. Anything else is `None` and the surrounding
    /// message stays plain text rather than surfacing a broken render.
    #[must_use]
    pub fn from_wire(data: &SlideData) -> Option<Self> {
        if let Some(source) = non_empty(data.component_code.as_deref()) {
            return Some(Self::ComponentSource { source: source.to_owned() });
        }
        if let Some(html) = non_empty(data.html_code.as_deref()) {
            return Some(Self::HtmlDocument { html: html.to_owned() });
        }
        let title = non_empty(data.action_title.as_deref())?;
        if title == ERROR_TITLE {
            return None;
        }
        Some(Self::ChartBlocks {
            title: title.to_owned(),
            subtitle: data.subtitle.clone().unwrap_or_default(),
            blocks: data.blocks.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
