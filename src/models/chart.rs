//! Serializable subset of the ECharts option document.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartOption — Top-level option passed to `echarts.setOption`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub title: Title,
    pub tooltip: Tooltip,
    pub legend: Legend,
    pub x_axis: Vec<Axis>,
    pub y_axis: Vec<Axis>,
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphic: Vec<Graphic>,
}

impl ChartOption {
    pub fn series_of(&self, kind: SeriesKind) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub trigger: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            trigger: "axis".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Axis {
    pub fn category(name: &str, data: Vec<String>) -> Self {
        Self {
            kind: AxisType::Category,
            name: Some(name.to_string()),
            data,
            position: None,
        }
    }

    pub fn value(name: &str) -> Self {
        Self {
            kind: AxisType::Value,
            name: Some(name.to_string()),
            data: Vec::new(),
            position: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub name: String,
    pub data: Vec<f64>,
    pub item_style: ItemStyle,
    pub y_axis_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub color: String,
}

// ---------------------------------------------------------------------------
// Graphic — Watermark text element
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(rename = "type")]
    pub kind: String,
    pub left: u32,
    pub top: u32,
    pub style: GraphicStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicStyle {
    pub text: String,
    pub fill: String,
}
