use super::TransactionView;
use serde::Serialize;

/// One page of the filtered listing plus the number of matches across all pages.
#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub transactions: Vec<TransactionView>,
    pub total: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sales_amount: f64,
    pub sold_items: u64,
    pub not_sold_items: u64,
    pub total_items_count: u64,
}

/// Price histogram in the shape the dashboard charts consume: parallel
/// `labels` and `data` arrays in ascending bucket order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BarChart {
    pub labels: Vec<&'static str>,
    pub data: Vec<u64>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombinedView {
    pub statistics: Statistics,
    pub bar_chart_data: BarChart,
    pub pie_chart_data: Vec<CategoryCount>,
}
