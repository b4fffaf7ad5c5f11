mod analytics;
pub mod datetime_utils;
mod filter;
mod transaction;

pub use analytics::{BarChart, CategoryCount, CombinedView, Statistics, TransactionPage};
pub use filter::{Search, TransactionFilter, PRICE_SEARCH_TOLERANCE};
pub use transaction::{FeedTransaction, Transaction, TransactionView};
