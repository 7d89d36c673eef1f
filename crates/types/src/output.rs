//! Rows and chart payloads produced by a widget render pass

use serde::{Deserialize, Serialize};

/// Chart kinds understood by the dashboard chart block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartType {
    #[default]
    Pie,
    Bar,
}

/// Chart payload attached to an output row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub chart_id: String,
    pub chart_type: ChartType,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub chart_data: serde_json::Value,
}

impl ChartSpec {
    pub const DEFAULT_SIZE: u32 = 76;

    /// Chart with the default type and canvas size
    pub fn new(chart_id: impl Into<String>, chart_data: serde_json::Value) -> Self {
        Self {
            chart_id: chart_id.into(),
            chart_type: ChartType::default(),
            canvas_width: Self::DEFAULT_SIZE,
            canvas_height: Self::DEFAULT_SIZE,
            chart_data,
        }
    }

    pub fn with_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }
}

/// One line of widget output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// DOM id of the row element
    pub element_id: String,
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub chart: Option<ChartSpec>,
}
