//! Chart generation for the dashboard.
//!
//! This module creates ECharts configurations for the three dashboard
//! visualisations:
//! - **Spending by Category**: donut of the reference month's expenses
//! - **Daily Flow**: income and expense lines over the last 7 or 30 days
//! - **Category Comparison**: bars comparing this month against the last
//!
//! Each chart is generated as JSON configuration for the ECharts library;
//! mounting the containers and initialising the instances is left to the
//! rendering collaborator.

use std::collections::HashMap;

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, JsFunction,
        Tooltip, Trigger,
    },
    series::{Bar, Line, Pie},
};
use time::{Date, UtcOffset};

use crate::{
    dashboard::aggregation::{
        CategoryComparison, ChartWindow, DailyEntry, compute_category_comparison,
        compute_category_totals, compute_daily_series,
    },
    model::{FALLBACK_CATEGORY, Transaction},
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Builds the three dashboard charts from a transaction snapshot.
///
/// The chart options are serialized to JSON for ECharts consumption.
pub fn dashboard_charts(
    transactions: &[Transaction],
    reference_date: Date,
    window: ChartWindow,
    offset: UtcOffset,
) -> [DashboardChart; 3] {
    let category_totals = compute_category_totals(transactions, reference_date, offset);
    let daily_series = compute_daily_series(transactions, reference_date, window, offset);
    let comparison = compute_category_comparison(transactions, reference_date, offset);

    [
        DashboardChart {
            id: "spending-by-category-chart",
            options: spending_by_category_chart(&category_totals).to_string(),
        },
        DashboardChart {
            id: "daily-flow-chart",
            options: daily_flow_chart(&daily_series).to_string(),
        },
        DashboardChart {
            id: "category-comparison-chart",
            options: category_comparison_chart(&comparison).to_string(),
        },
    ]
}

/// Donut chart of the reference month's expenses per category, largest slice
/// first with the fallback category always last.
pub fn spending_by_category_chart(category_totals: &HashMap<String, f64>) -> Chart {
    let entries = sort_for_display(category_totals);
    let data: Vec<(f64, &str)> = entries
        .iter()
        .map(|(category, amount)| (*amount, category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Gastos por categoria").subtext("Mês atual"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().left("center").top("bottom"))
        .series(
            Pie::new()
                .name("Gastos")
                .radius(vec!["50%", "80%"])
                .data(data),
        )
}

/// Line chart of daily income and expenses over the chart window.
pub fn daily_flow_chart(daily_series: &[DailyEntry]) -> Chart {
    let labels: Vec<String> = daily_series.iter().map(|entry| entry.label.clone()).collect();
    let income: Vec<f64> = daily_series.iter().map(|entry| entry.income).collect();
    let expense: Vec<f64> = daily_series.iter().map(|entry| entry.expense).collect();

    Chart::new()
        .title(Title::new().text("Evolução diária"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Entradas").data(income))
        .series(Line::new().name("Saídas").data(expense))
}

/// Bar chart comparing per-category expenses between this month and the last.
pub fn category_comparison_chart(comparison: &[CategoryComparison]) -> Chart {
    let labels: Vec<String> = comparison.iter().map(|c| c.category.clone()).collect();
    let current: Vec<f64> = comparison.iter().map(|c| c.current).collect();
    let previous: Vec<f64> = comparison.iter().map(|c| c.previous).collect();

    Chart::new()
        .title(Title::new().text("Comparativo de categorias").subtext("Mês atual vs. anterior"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Mês atual")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(current),
        )
        .series(
            Bar::new()
                .name("Mês anterior")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(previous),
        )
}

/// Orders category totals for display: largest amounts first, the fallback
/// category always last. The mapping itself stays unordered; this only fixes
/// the slice order of the donut.
fn sort_for_display(category_totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = category_totals
        .iter()
        .filter(|(category, _)| category.as_str() != FALLBACK_CATEGORY)
        .map(|(category, amount)| (category.clone(), *amount))
        .collect();

    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if let Some(amount) = category_totals.get(FALLBACK_CATEGORY) {
        entries.push((FALLBACK_CATEGORY.to_owned(), *amount));
    }

    entries
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
