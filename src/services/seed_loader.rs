use crate::error::Result;
use crate::models::{FeedTransaction, Transaction};
use crate::repositories::{ReplaceOutcome, TransactionStore};
use log::{error, info};

/// Downloads the seed feed. Fails on transport errors, non-success status
/// codes and payloads that are not an array of transaction records.
pub async fn fetch_seed_transactions(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Transaction>> {
    info!("Fetching seed transactions from URL: {}", url);
    let feed: Vec<FeedTransaction> = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    info!("Fetched {} seed transactions", feed.len());
    Ok(feed.into_iter().map(Transaction::from).collect())
}

/// Replaces the whole collection with the current seed feed.
///
/// The fetch happens before anything is deleted, but a storage failure
/// between the delete and the insert leaves the collection empty until the
/// next successful call.
pub async fn reseed(
    store: &dyn TransactionStore,
    client: &reqwest::Client,
    url: &str,
) -> Result<ReplaceOutcome> {
    let transactions = fetch_seed_transactions(client, url).await.map_err(|e| {
        error!("Error fetching seed data: {}", e);
        e
    })?;

    let outcome = store.replace_all(transactions).await.map_err(|e| {
        error!("Error storing seed data: {}", e);
        e
    })?;
    info!(
        "Reseed complete: {} deleted, {} inserted",
        outcome.deleted, outcome.inserted
    );
    Ok(outcome)
}
