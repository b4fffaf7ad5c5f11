use super::Transaction;
use chrono::Month;
use mongodb::bson::{doc, Document};

/// Half-width of the price window matched by a numeric search token.
pub const PRICE_SEARCH_TOLERANCE: f64 = 10.0;

/// Free-text search term. When the term is numeric it also matches prices
/// within [`PRICE_SEARCH_TOLERANCE`] of the number.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub text: String,
    pub price: Option<f64>,
}

impl Search {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let price = text.parse::<f64>().ok().filter(|n| n.is_finite());
        Some(Self {
            text: text.to_string(),
            price,
        })
    }

    fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.text.to_lowercase();
        if tx.title.to_lowercase().contains(&needle)
            || tx.description.to_lowercase().contains(&needle)
        {
            return true;
        }
        match self.price {
            Some(price) => (tx.price - price).abs() <= PRICE_SEARCH_TOLERANCE,
            None => false,
        }
    }

    fn clauses(&self) -> Vec<Document> {
        let pattern = regex::escape(&self.text);
        let mut clauses = vec![
            doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
        ];
        if let Some(price) = self.price {
            clauses.push(doc! {
                "price": {
                    "$gte": price - PRICE_SEARCH_TOLERANCE,
                    "$lte": price + PRICE_SEARCH_TOLERANCE
                }
            });
        }
        clauses
    }
}

/// Selection of transactions sold in a given calendar month (any year),
/// optionally narrowed by a search term.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    pub month: Month,
    pub search: Option<Search>,
}

impl TransactionFilter {
    pub fn for_month(month: Month) -> Self {
        Self {
            month,
            search: None,
        }
    }

    pub fn with_search(mut self, search: Option<Search>) -> Self {
        self.search = search;
        self
    }

    pub fn month_index(&self) -> u32 {
        self.month.number_from_month()
    }

    /// Renders the filter as a MongoDB query document.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {
            "$expr": {
                "$eq": [{ "$month": "$dateOfSale" }, self.month_index() as i32]
            }
        };
        if let Some(search) = &self.search {
            filter.insert("$or", search.clauses());
        }
        filter
    }

    /// Evaluates the filter against a single record, with the same semantics
    /// as [`TransactionFilter::to_document`].
    pub fn matches(&self, tx: &Transaction) -> bool {
        if tx.sale_month() != self.month_index() {
            return false;
        }
        self.search.as_ref().map_or(true, |s| s.matches(tx))
    }
}
