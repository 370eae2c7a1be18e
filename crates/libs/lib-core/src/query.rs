//! Filtering and sorting for the history and marketplace screens.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::dto::records::{Direction, MarketListing, Transaction, TransactionKind, TransactionStatus};

/// Transaction history filter. The default matches everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Case-insensitive match on description, counterparty or hash
    pub search: String,
    pub kind: Option<TransactionKind>,
    pub status: Option<TransactionStatus>,
    pub show_incoming: bool,
    pub show_outgoing: bool,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub date_from: Option<NaiveDate>,
    /// Inclusive; the whole day counts
    pub date_to: Option<NaiveDate>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            kind: None,
            status: None,
            show_incoming: true,
            show_outgoing: true,
            min_amount: None,
            max_amount: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty()
            && ![&tx.description, &tx.counterparty, &tx.hash]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        {
            return false;
        }

        if self.kind.is_some_and(|kind| kind != tx.kind) {
            return false;
        }
        if self.status.is_some_and(|status| status != tx.status) {
            return false;
        }

        let direction_shown = match tx.direction {
            Direction::Incoming => self.show_incoming,
            Direction::Outgoing => self.show_outgoing,
        };
        if !direction_shown {
            return false;
        }

        if self.min_amount.is_some_and(|min| tx.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| tx.amount > max) {
            return false;
        }

        if let Some(from) = self.date_from {
            if tx.timestamp < start_of(from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.timestamp >= start_of(to + chrono::Days::new(1)) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

fn start_of(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Totals shown above the history table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub count: usize,
    /// Confirmed incoming volume
    pub total_in: f64,
    /// Confirmed outgoing volume
    pub total_out: f64,
    pub total_fees: f64,
    pub confirmed: usize,
    pub pending: usize,
    pub failed: usize,
}

impl TransactionSummary {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().fold(Self::default(), |mut summary, tx| {
            summary.count += 1;
            summary.total_fees += tx.fees;
            match tx.status {
                TransactionStatus::Confirmed => {
                    summary.confirmed += 1;
                    match tx.direction {
                        Direction::Incoming => summary.total_in += tx.amount,
                        Direction::Outgoing => summary.total_out += tx.amount,
                    }
                }
                TransactionStatus::Pending => summary.pending += 1,
                TransactionStatus::Failed => summary.failed += 1,
            }
            summary
        })
    }

    pub fn net_flow(&self) -> f64 {
        self.total_in - self.total_out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    DeFi,
    Nft,
    Utility,
    Governance,
}

impl ListingCategory {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            ListingCategory::DeFi => &["defi", "yield", "staking"],
            ListingCategory::Nft => &["nft", "collectible"],
            ListingCategory::Utility => &["utility", "bridge"],
            ListingCategory::Governance => &["governance"],
        }
    }

    /// Categories are inferred from the listing name.
    pub fn matches(&self, listing: &MarketListing) -> bool {
        let name = listing.name.to_lowercase();
        self.keywords().iter().any(|k| name.contains(k))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parse `"50-100"` or open-ended `"200+"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(min) = raw.strip_suffix('+') {
            return Some(Self {
                min: min.trim().parse().ok()?,
                max: None,
            });
        }
        let (min, max) = raw.split_once('-')?;
        Some(Self {
            min: min.trim().parse().unwrap_or(0.0),
            max: Some(max.trim().parse().ok()?),
        })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSort {
    /// New listings first
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Volume,
    Yield,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    /// Case-insensitive match on name or issuer
    pub search: String,
    pub category: Option<ListingCategory>,
    pub price_range: Option<PriceRange>,
    pub sort: ListingSort,
}

impl ListingQuery {
    pub fn matches(&self, listing: &MarketListing) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty()
            && !listing.name.to_lowercase().contains(&query)
            && !listing.issuer.to_lowercase().contains(&query)
        {
            return false;
        }
        if self.category.is_some_and(|c| !c.matches(listing)) {
            return false;
        }
        if self.price_range.is_some_and(|r| !r.contains(listing.price)) {
            return false;
        }
        true
    }

    /// Filter then sort. Sorting is stable, so ties keep fixture order.
    pub fn apply<'a>(&self, listings: &'a [MarketListing]) -> Vec<&'a MarketListing> {
        let mut matched: Vec<&MarketListing> = listings.iter().filter(|l| self.matches(l)).collect();
        match self.sort {
            ListingSort::Newest => matched.sort_by_key(|l| !l.is_new),
            ListingSort::PriceLow => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ListingSort::PriceHigh => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
            ListingSort::Volume => matched.sort_by(|a, b| b.volume.total_cmp(&a.volume)),
            ListingSort::Yield => matched.sort_by(|a, b| b.yield_pct.total_cmp(&a.yield_pct)),
        }
        matched
    }
}
