use crate::error::{Error, Result};
use crate::models::{
    BarChart, CategoryCount, CombinedView, Statistics, Transaction, TransactionFilter,
};
use crate::repositories::TransactionStore;
use chrono::Month;
use std::collections::HashMap;

pub const PRICE_BUCKET_WIDTH: f64 = 100.0;

pub const PRICE_BUCKET_LABELS: [&str; 10] = [
    "0-100",
    "101-200",
    "201-300",
    "301-400",
    "401-500",
    "501-600",
    "601-700",
    "701-800",
    "801-900",
    "901-above",
];

/// Bucket `k < 9` holds prices in `[100k, 100(k+1))`; the last bucket holds
/// everything from 900 up. Negative prices land in the first bucket.
pub fn bucket_index(price: f64) -> usize {
    let last = PRICE_BUCKET_LABELS.len() - 1;
    if price < PRICE_BUCKET_WIDTH {
        return 0;
    }
    ((price / PRICE_BUCKET_WIDTH).floor() as usize).min(last)
}

pub fn summarize(transactions: &[Transaction]) -> Statistics {
    let total_sales_amount = transactions.iter().fold(0.0, |acc, tx| acc + tx.price);
    let total_items_count = transactions.len() as u64;
    let sold_items = transactions.iter().filter(|tx| tx.sold).count() as u64;

    Statistics {
        total_sales_amount,
        sold_items,
        not_sold_items: total_items_count - sold_items,
        total_items_count,
    }
}

pub fn price_histogram(transactions: &[Transaction]) -> BarChart {
    let mut data = vec![0u64; PRICE_BUCKET_LABELS.len()];
    for tx in transactions {
        data[bucket_index(tx.price)] += 1;
    }
    BarChart {
        labels: PRICE_BUCKET_LABELS.to_vec(),
        data,
    }
}

/// Per-category counts in first-seen order.
pub fn category_distribution(transactions: &[Transaction]) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for tx in transactions {
        match positions.get(tx.category.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(&tx.category, counts.len());
                counts.push(CategoryCount {
                    category: tx.category.clone(),
                    count: 1,
                });
            }
        }
    }
    counts
}

async fn month_transactions(
    store: &dyn TransactionStore,
    month: Month,
) -> Result<Vec<Transaction>> {
    store.find_all(&TransactionFilter::for_month(month)).await
}

pub async fn statistics(store: &dyn TransactionStore, month: Month) -> Result<Statistics> {
    Ok(summarize(&month_transactions(store, month).await?))
}

pub async fn bar_chart(store: &dyn TransactionStore, month: Month) -> Result<BarChart> {
    Ok(price_histogram(&month_transactions(store, month).await?))
}

pub async fn pie_chart(
    store: &dyn TransactionStore,
    month: Month,
) -> Result<Vec<CategoryCount>> {
    Ok(category_distribution(&month_transactions(store, month).await?))
}

/// All three month aggregates computed from a single read, so they always
/// describe the same records. Any failure fails the whole view without saying
/// which part broke.
pub async fn combined(store: &dyn TransactionStore, month: Month) -> Result<CombinedView> {
    let transactions = month_transactions(store, month)
        .await
        .map_err(|e| Error::Combined(e.to_string()))?;

    Ok(CombinedView {
        statistics: summarize(&transactions),
        bar_chart_data: price_histogram(&transactions),
        pie_chart_data: category_distribution(&transactions),
    })
}
