//! Display records for the dashboard, marketplace and history screens.
//!
//! These are fixtures: produced by a fixture source, held in page-local state,
//! never written back anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_balance: f64,
    pub balance_change: f64,
    pub active_cards: u32,
    pub new_cards_this_month: u32,
    pub active_contracts: u32,
    pub contract_executions: u32,
    pub recent_transactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Pending,
    Frozen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub card_type: String,
    pub card_id: String,
    pub balance: f64,
    pub currency: String,
    pub status: CardStatus,
    pub created_at: DateTime<Utc>,
    /// Printed on the card face; fixture cards predate the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Deployed,
    Executing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractExecution {
    pub function: String,
    pub timestamp: DateTime<Utc>,
    pub status: ExecutionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub status: ContractStatus,
    pub deployed_at: DateTime<Utc>,
    pub gas_used: f64,
    pub execution_count: u32,
    pub recent_executions: Vec<ContractExecution>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CardCreated,
    AssetTransfer,
    ContractExecuted,
    RewardsEarned,
    CardTraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub status: ActivityStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    CardPayment,
    SmartContract,
    Transfer,
    Reward,
    Stake,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::CardPayment => "Card Payment",
            TransactionKind::SmartContract => "Smart Contract",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Reward => "Reward",
            TransactionKind::Stake => "Stake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Confirmed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub hash: String,
    pub kind: TransactionKind,
    pub description: String,
    pub counterparty: String,
    pub amount: f64,
    pub direction: Direction,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    pub fees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A card offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub price: f64,
    pub volume: f64,
    #[serde(rename = "yield")]
    pub yield_pct: f64,
    pub change: f64,
    pub liquidity: f64,
    pub holders: u32,
    pub rating: f64,
    pub risk: RiskLevel,
    pub is_new: bool,
    pub is_featured: bool,
    pub max_quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    Cancelled,
}

/// A listing the connected user has put up for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnListing {
    pub id: String,
    pub card_name: String,
    pub price: f64,
    pub quantity: u32,
    pub views: u32,
    pub status: ListingStatus,
    pub listed_at: DateTime<Utc>,
}
