use super::datetime_utils::{deserialize_datetime, serialize_datetime};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A product transaction as stored in the `transactions` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub date_of_sale: DateTime<Utc>,
    pub sold: bool,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Transaction {
    /// Calendar month (1-12) of the sale, in UTC.
    pub fn sale_month(&self) -> u32 {
        self.date_of_sale.month()
    }
}

/// A record as delivered by the seed feed. Dates arrive as RFC 3339 strings
/// with an offset and are normalised to UTC.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeedTransaction {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    #[serde(default)]
    pub sold: bool,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<FeedTransaction> for Transaction {
    fn from(feed: FeedTransaction) -> Self {
        Self {
            id: feed.id,
            title: feed.title,
            description: feed.description,
            price: feed.price,
            date_of_sale: feed.date_of_sale,
            sold: feed.sold,
            category: feed.category,
            image: feed.image,
        }
    }
}

/// JSON representation returned by the listing endpoint.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub sold: bool,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Transaction> for TransactionView {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            title: tx.title,
            description: tx.description,
            price: tx.price,
            date_of_sale: tx.date_of_sale,
            sold: tx.sold,
            category: tx.category,
            image: tx.image,
        }
    }
}
