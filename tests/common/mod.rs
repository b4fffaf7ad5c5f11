//! Shared fixtures for the dashboard integration tests.
//!
//! Provides an in-memory `TransactionStore` that evaluates filters with
//! `TransactionFilter::matches`, a store that always fails, and a small
//! sample dataset spread over a few months.

#![allow(dead_code)]

use async_trait::async_trait;
use sales_dashboard::models::{Transaction, TransactionFilter};
use sales_dashboard::repositories::{ReplaceOutcome, TransactionStore};
use sales_dashboard::routes;
use sales_dashboard::state::AppState;
use sales_dashboard::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Rejects offsets above `i64::MAX` the way the MongoDB driver does.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Transaction>>,
    find_all_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with(records: Vec<Transaction>) -> Self {
        Self {
            records: Mutex::new(records),
            find_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.records.lock().unwrap().clone()
    }

    fn matching(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut found: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| filter.matches(tx))
            .cloned()
            .collect();
        found.sort_by_key(|tx| tx.id);
        found
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn replace_all(&self, transactions: Vec<Transaction>) -> Result<ReplaceOutcome> {
        let mut records = self.records.lock().unwrap();
        let deleted = records.len() as u64;
        let inserted = transactions.len() as u64;
        *records = transactions;
        Ok(ReplaceOutcome { deleted, inserted })
    }

    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>> {
        if i64::try_from(skip).is_err() {
            let io = std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot serialize u64 {skip} as i64"),
            );
            return Err(Error::Database(mongodb::error::Error::from(io)));
        }
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn find_all(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matching(filter))
    }
}

/// Store whose every operation fails as if the database were unreachable.
pub struct FailingStore;

fn unavailable() -> Error {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "storage unavailable");
    Error::Database(mongodb::error::Error::from(io))
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn replace_all(&self, _: Vec<Transaction>) -> Result<ReplaceOutcome> {
        Err(unavailable())
    }

    async fn find_page(&self, _: &TransactionFilter, _: u64, _: u64) -> Result<Vec<Transaction>> {
        Err(unavailable())
    }

    async fn count(&self, _: &TransactionFilter) -> Result<u64> {
        Err(unavailable())
    }

    async fn find_all(&self, _: &TransactionFilter) -> Result<Vec<Transaction>> {
        Err(unavailable())
    }
}

pub fn transaction(
    id: i64,
    title: &str,
    price: f64,
    date_of_sale: &str,
    sold: bool,
    category: &str,
) -> Transaction {
    Transaction {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        price,
        date_of_sale: date_of_sale.parse().unwrap(),
        sold,
        category: category.to_string(),
        image: None,
    }
}

/// Seven March records across two years plus two records in other months.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            1,
            "Fjallraven Backpack",
            329.85,
            "2021-03-27T20:29:54Z",
            false,
            "men's clothing",
        ),
        transaction(2, "Slim Fit T-Shirt", 22.3, "2022-03-05T14:00:00Z", true, "men's clothing"),
        transaction(3, "Cotton Jacket", 615.89, "2021-03-10T09:00:00Z", true, "men's clothing"),
        transaction(4, "Gold Bracelet", 695.0, "2022-03-12T18:30:00Z", false, "jewelery"),
        transaction(5, "SanDisk SSD", 109.0, "2021-03-01T00:00:00Z", true, "electronics"),
        transaction(6, "Gaming Monitor", 999.99, "2022-03-20T12:00:00Z", true, "electronics"),
        transaction(7, "Rain Jacket", 39.99, "2021-03-31T23:59:59Z", false, "women's clothing"),
        transaction(8, "USB Drive", 64.0, "2022-04-02T10:00:00Z", true, "electronics"),
        transaction(9, "Silver Ring", 168.0, "2021-11-15T10:00:00Z", false, "jewelery"),
    ]
}

pub fn app(store: Arc<dyn TransactionStore>) -> axum::Router {
    app_with_seed_url(store, "http://127.0.0.1:9/unused")
}

pub fn app_with_seed_url(store: Arc<dyn TransactionStore>, seed_url: &str) -> axum::Router {
    let state = Arc::new(AppState::new(store, reqwest::Client::new(), seed_url));
    routes::router(state, "")
}
