// src/dashboard/mod.rs — Tab definitions and the assembled dashboard

pub mod page;

use serde::Serialize;

use crate::chart::{Axis, ColorAxis, ColorBar, Figure, Legend, Trace};
use crate::data::{Metric, MetricsTable};
use crate::infra::errors::{DashboardError, Result};

pub const DEFAULT_TITLE: &str = "Company Performance Dashboard";

/// The six views of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    SalesOverview,
    RevenueBreakdown,
    FinancialPerformance,
    EarningsPerShare,
    RdExpenses,
    EfficiencyRatios,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::SalesOverview,
        Tab::RevenueBreakdown,
        Tab::FinancialPerformance,
        Tab::EarningsPerShare,
        Tab::RdExpenses,
        Tab::EfficiencyRatios,
    ];

    /// Stable identifier, used as the DOM id and in `/api/v1/figures/{id}`.
    pub fn id(self) -> &'static str {
        match self {
            Tab::SalesOverview => "sales-overview",
            Tab::RevenueBreakdown => "revenue-breakdown",
            Tab::FinancialPerformance => "financial-performance",
            Tab::EarningsPerShare => "eps-diluted",
            Tab::RdExpenses => "rd-expenses",
            Tab::EfficiencyRatios => "efficiency-ratios",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::SalesOverview => "Sales Overview",
            Tab::RevenueBreakdown => "Revenue Breakdown",
            Tab::FinancialPerformance => "Financial Performance",
            Tab::EarningsPerShare => "Earnings Per Share",
            Tab::RdExpenses => "R&D Expenses",
            Tab::EfficiencyRatios => "Efficiency and Performance Ratios",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn figure(self, table: &MetricsTable) -> Figure {
        match self {
            Tab::SalesOverview => multi_line(
                table,
                "Sales Overview",
                &[
                    Metric::TotalNetSales,
                    Metric::ProductsNetSales,
                    Metric::ServicesNetSales,
                ],
                "Sales (in millions)",
            ),
            Tab::RevenueBreakdown => revenue_breakdown(table),
            Tab::FinancialPerformance => financial_performance(table),
            Tab::EarningsPerShare => {
                let metric = Metric::EpsDiluted;
                let mut fig = Figure::new(
                    "Earnings Per Share (Diluted)",
                    vec![Trace::line(metric.label(), &table.column(metric))],
                );
                fig.layout.yaxis = Axis::titled("EPS (Dollars)");
                fig
            }
            Tab::RdExpenses => rd_expenses(table),
            Tab::EfficiencyRatios => multi_line(
                table,
                "Efficiency and Performance Ratios",
                &[
                    Metric::Roa,
                    Metric::ProfitMarginRatio,
                    Metric::AssetTurnoverRatio,
                    Metric::InventoryTurnoverRatio,
                ],
                "Ratio",
            ),
        }
    }
}

/// One line per metric on a shared value axis, legend titled like a
/// long-format frame.
fn multi_line(table: &MetricsTable, title: &str, metrics: &[Metric], value_label: &str) -> Figure {
    let traces = metrics
        .iter()
        .map(|&m| Trace::line(m.label(), &table.column(m)))
        .collect();
    let mut fig = Figure::new(title, traces);
    fig.layout.yaxis = Axis::titled(value_label);
    fig.layout.legend = Some(Legend {
        title: "variable".into(),
    });
    fig
}

fn revenue_breakdown(table: &MetricsTable) -> Figure {
    let series = [
        ("iPhone", Metric::RevenueIphone),
        ("iPad", Metric::RevenueIpad),
        ("Mac", Metric::RevenueMac),
    ];
    let traces = series
        .iter()
        .map(|&(name, m)| Trace::stacked_area(name, &table.column(m), "one"))
        .collect();
    let mut fig = Figure::new("Revenue Breakdown by Product", traces);
    fig.layout.yaxis = Axis::titled("Revenue (in millions)");
    fig
}

/// Gross margin bars on the left axis, income lines on an overlaid right axis.
fn financial_performance(table: &MetricsTable) -> Figure {
    let gross = Metric::GrossMargin;
    let operating = Metric::OperatingIncome;
    let net = Metric::NetIncome;

    let traces = vec![
        Trace::bar(gross.label(), &table.column(gross))
            .on_axis("y")
            .with_color("skyblue"),
        Trace::line(operating.label(), &table.column(operating))
            .with_mode("lines+markers")
            .on_axis("y2")
            .with_color("green"),
        Trace::line(net.label(), &table.column(net))
            .with_mode("lines+markers")
            .on_axis("y2")
            .with_color("red"),
    ];

    let mut fig = Figure::new("Financial Performance", traces);
    fig.layout.yaxis = Axis::titled("Gross Margin (in millions)").side("left");
    fig.layout.yaxis2 = Some(
        Axis::titled("Income (in millions)")
            .overlaying("y")
            .side("right"),
    );
    fig
}

fn rd_expenses(table: &MetricsTable) -> Figure {
    let metric = Metric::RdExpenses;
    let trace = Trace::bar(metric.label(), &table.column(metric)).color_by_x("coloraxis");
    let mut fig = Figure::new("Research and Development Expenses", vec![trace]);
    fig.layout.yaxis = Axis::titled("R&D Expenses (in millions)");
    fig.layout.coloraxis = Some(ColorAxis {
        colorscale: sequential_scale(&PLASMA),
        colorbar: ColorBar {
            title: "Year".into(),
        },
    });
    fig
}

/// plotly.express's default continuous scale. plotly.js has no built-in
/// "Plasma", so the stops are sent explicitly.
const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Evenly spaced `[position, colour]` stops from 0 to 1.
fn sequential_scale(colors: &[&str]) -> Vec<(f64, String)> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64 / last, c.to_string()))
        .collect()
}

/// One rendered tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: &'static str,
    pub label: &'static str,
    pub figure: Figure,
}

/// Every tab's figure, built once from the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub tabs: Vec<TabView>,
}

impl Dashboard {
    pub fn build(table: &MetricsTable) -> Self {
        Self::build_titled(table, DEFAULT_TITLE)
    }

    pub fn build_titled(table: &MetricsTable, title: &str) -> Self {
        let tabs = Tab::ALL
            .into_iter()
            .map(|tab| TabView {
                id: tab.id(),
                label: tab.label(),
                figure: tab.figure(table),
            })
            .collect();
        tracing::debug!("built {} dashboard tabs", Tab::ALL.len());
        Self {
            title: title.to_string(),
            tabs,
        }
    }

    pub fn tab(&self, id: &str) -> Result<&TabView> {
        Tab::from_id(id)
            .and_then(|tab| self.tabs.iter().find(|t| t.id == tab.id()))
            .ok_or_else(|| DashboardError::TabNotFound { id: id.to_string() })
    }
}
