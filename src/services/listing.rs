use crate::error::Result;
use crate::models::{TransactionFilter, TransactionPage, TransactionView};
use crate::repositories::TransactionStore;

/// Largest offset the database accepts; it encodes `skip` as a signed 64-bit value.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// One 1-based page of the matching transactions. Pages past the end are
/// empty, not errors; `total` always counts every match.
pub async fn list_transactions(
    store: &dyn TransactionStore,
    filter: &TransactionFilter,
    page: u64,
    per_page: u64,
) -> Result<TransactionPage> {
    let skip = page.saturating_sub(1).saturating_mul(per_page);
    let transactions = if skip > MAX_SKIP {
        Vec::new()
    } else {
        store.find_page(filter, skip, per_page).await?
    };
    let total = store.count(filter).await?;

    Ok(TransactionPage {
        transactions: transactions.into_iter().map(TransactionView::from).collect(),
        total,
    })
}
