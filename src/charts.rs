//! Chart builders producing ECharts option documents from snapshot frames.
//!
//! [`BarChart`] and [`LineChart`] are small builders with the cosmetic
//! defaults used across the dashboard. [`transactions_chart`] and
//! [`active_users_chart`] are the two panels rendered from a
//! `usageMetricsDailySnapshots` frame. Every numeric series is rounded to one
//! decimal place before it is handed to the chart.

use crate::error::Result;
use crate::format::{format_xaxis, round1};
use crate::frame::Frame;
use crate::models::{
    Axis, ChartOption, Graphic, GraphicStyle, ItemStyle, Legend, Series, SeriesKind, Title,
    Tooltip,
};
use crate::queries::metrics::columns;

const WATERMARK: &str = "PolyGraph";
const WATERMARK_TOP: u32 = 8;

fn base_option(title: &str, xaxis_name: &str, yaxis_name: &str, logo_position: u32) -> ChartOption {
    ChartOption {
        title: Title {
            text: title.to_string(),
        },
        tooltip: Tooltip::default(),
        legend: Legend::default(),
        x_axis: vec![Axis::category(xaxis_name, Vec::new())],
        y_axis: vec![Axis::value(yaxis_name)],
        series: Vec::new(),
        graphic: vec![Graphic {
            kind: "text".to_string(),
            left: logo_position,
            top: WATERMARK_TOP,
            style: GraphicStyle {
                text: WATERMARK.to_string(),
                fill: "#999999".to_string(),
            },
        }],
    }
}

fn push_series(option: &mut ChartOption, kind: SeriesKind, name: &str, color: &str, data: &[f64], axis: usize) {
    option.legend.data.push(name.to_string());
    option.series.push(Series {
        kind,
        name: name.to_string(),
        data: data.iter().copied().map(round1).collect(),
        item_style: ItemStyle {
            color: color.to_string(),
        },
        y_axis_index: axis,
    });
}

// ---------------------------------------------------------------------------
// BarChart
// ---------------------------------------------------------------------------

pub struct BarChart {
    option: ChartOption,
}

impl BarChart {
    pub fn new(title: &str, xaxis_name: &str, yaxis_name: &str, logo_position: u32) -> Self {
        Self {
            option: base_option(title, xaxis_name, yaxis_name, logo_position),
        }
    }

    pub fn add_xaxis(&mut self, labels: Vec<String>) -> &mut Self {
        self.option.x_axis[0].data = labels;
        self
    }

    pub fn add_yaxis(&mut self, series_name: &str, color: &str, data: &[f64]) -> &mut Self {
        push_series(&mut self.option, SeriesKind::Bar, series_name, color, data, 0);
        self
    }

    /// Add a secondary value axis on the right-hand side.
    pub fn extend_axis(&mut self, name: &str) -> &mut Self {
        let mut axis = Axis::value(name);
        axis.position = Some("right".to_string());
        self.option.y_axis.push(axis);
        self
    }

    /// Draw `line` on top of this chart.
    ///
    /// The bar chart keeps its axes; line series move to the last y-axis so an
    /// axis added with [`extend_axis`](Self::extend_axis) carries them.
    pub fn overlap(mut self, line: LineChart) -> ChartOption {
        let axis = self.option.y_axis.len() - 1;
        for mut series in line.option.series {
            series.y_axis_index = axis;
            self.option.legend.data.push(series.name.clone());
            self.option.series.push(series);
        }
        self.option
    }

    pub fn build(self) -> ChartOption {
        self.option
    }
}

// ---------------------------------------------------------------------------
// LineChart
// ---------------------------------------------------------------------------

pub struct LineChart {
    option: ChartOption,
}

impl LineChart {
    pub fn new(title: &str, xaxis_name: &str, yaxis_name: &str, logo_position: u32) -> Self {
        Self {
            option: base_option(title, xaxis_name, yaxis_name, logo_position),
        }
    }

    pub fn add_xaxis(&mut self, labels: Vec<String>) -> &mut Self {
        self.option.x_axis[0].data = labels;
        self
    }

    pub fn add_yaxis(&mut self, series_name: &str, color: &str, data: &[f64]) -> &mut Self {
        push_series(&mut self.option, SeriesKind::Line, series_name, color, data, 0);
        self
    }

    pub fn build(self) -> ChartOption {
        self.option
    }
}

// ---------------------------------------------------------------------------
// Snapshot panels
// ---------------------------------------------------------------------------

fn day_labels(frame: &Frame) -> Result<Vec<String>> {
    Ok(format_xaxis(&frame.str_column(columns::ID)?))
}

/// Daily deposit/withdraw/swap bars with total transactions as a line on a
/// secondary axis.
pub fn transactions_chart(frame: &Frame) -> Result<ChartOption> {
    let labels = day_labels(frame)?;

    let mut bar = BarChart::new("Transactions", "UTC", "Count Of Transactions", 130);
    bar.add_xaxis(labels.clone())
        .add_yaxis(
            "Daily Deposit Count",
            "#5a66f9",
            &frame.f64_column(columns::DEPOSITS)?,
        )
        .add_yaxis(
            "Daily Withdraw Count",
            "#6ac5c8",
            &frame.f64_column(columns::WITHDRAWS)?,
        )
        .add_yaxis(
            "Daily Swap Count",
            "#F2AA4CFF",
            &frame.f64_column(columns::SWAPS)?,
        )
        .extend_axis("Total Daily Transactions");

    let mut line = LineChart::new("Transactions", "UTC", "Count Of Transactions", 130);
    line.add_xaxis(labels).add_yaxis(
        "Daily Total Transactions",
        "#fc03f8",
        &frame.f64_column(columns::TRANSACTIONS)?,
    );

    Ok(bar.overlap(line))
}

/// Daily active users as a single line.
pub fn active_users_chart(frame: &Frame) -> Result<ChartOption> {
    let mut chart = LineChart::new("Active Users", "UTC", "Count Of Users", 135);
    chart.add_xaxis(day_labels(frame)?).add_yaxis(
        "Daily Active Users",
        "#12b8ff",
        &frame.f64_column(columns::ACTIVE_USERS)?,
    );
    Ok(chart.build())
}
