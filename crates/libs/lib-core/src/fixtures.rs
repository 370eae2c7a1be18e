//! Display fixtures for the dashboard, marketplace and history screens.
//!
//! Pages read through [`FixtureSource`] so a real data source can replace
//! [`DemoFixtures`] without touching the views.

use chrono::{DateTime, Utc};
use shared::dto::records::*;

pub trait FixtureSource: Send + Sync {
    fn portfolio(&self) -> PortfolioSummary;
    fn cards(&self) -> Vec<Card>;
    fn contracts(&self) -> Vec<Contract>;
    fn activities(&self) -> Vec<Activity>;
    fn transactions(&self) -> Vec<Transaction>;
    fn listings(&self) -> Vec<MarketListing>;
    fn my_listings(&self) -> Vec<OwnListing>;
}

/// Static demo data.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoFixtures;

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn card(id: &str, name: &str, card_type: &str, card_id: &str, balance: f64, currency: &str, status: CardStatus, created_at: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        card_type: card_type.to_string(),
        card_id: card_id.to_string(),
        balance,
        currency: currency.to_string(),
        status,
        created_at: at(created_at),
        holder_name: None,
    }
}

fn execution(function: &str, timestamp: &str, status: ExecutionStatus) -> ContractExecution {
    ContractExecution {
        function: function.to_string(),
        timestamp: at(timestamp),
        status,
    }
}

fn activity(
    id: &str,
    kind: ActivityKind,
    title: &str,
    description: &str,
    amount: Option<f64>,
    status: ActivityStatus,
    timestamp: &str,
) -> Activity {
    Activity {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        amount,
        currency: amount.map(|_| "XLM".to_string()),
        status,
        timestamp: at(timestamp),
    }
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    hash: &str,
    kind: TransactionKind,
    description: &str,
    counterparty: &str,
    amount: f64,
    direction: Direction,
    status: TransactionStatus,
    timestamp: &str,
    card_name: Option<&str>,
    fees: f64,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        hash: hash.to_string(),
        kind,
        description: description.to_string(),
        counterparty: counterparty.to_string(),
        amount,
        direction,
        status,
        timestamp: at(timestamp),
        card_name: card_name.map(str::to_string),
        fees,
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    issuer: &str,
    price: f64,
    volume: f64,
    yield_pct: f64,
    change: f64,
    liquidity: f64,
    holders: u32,
    rating: f64,
    risk: RiskLevel,
    flags: (bool, bool),
    max_quantity: u32,
) -> MarketListing {
    MarketListing {
        id: id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        price,
        volume,
        yield_pct,
        change,
        liquidity,
        holders,
        rating,
        risk,
        is_new: flags.0,
        is_featured: flags.1,
        max_quantity,
    }
}

impl FixtureSource for DemoFixtures {
    fn portfolio(&self) -> PortfolioSummary {
        PortfolioSummary {
            total_balance: 125_847.50,
            balance_change: 12.5,
            active_cards: 8,
            new_cards_this_month: 3,
            active_contracts: 12,
            contract_executions: 47,
            recent_transactions: 156,
        }
    }

    fn cards(&self) -> Vec<Card> {
        vec![
            card("card_001", "Premium Rewards Card", "Rewards", "SC_001_XLM", 15_420.75, "XLM", CardStatus::Active, "2025-01-15T10:30:00Z"),
            card("card_002", "Business Travel Card", "Business", "SC_002_USD", 8_750.00, "USDC", CardStatus::Active, "2025-01-20T14:15:00Z"),
            card("card_003", "Savings Card", "Savings", "SC_003_XLM", 25_600.25, "XLM", CardStatus::Pending, "2025-01-28T09:45:00Z"),
        ]
    }

    fn contracts(&self) -> Vec<Contract> {
        vec![
            Contract {
                id: "contract_001".to_string(),
                name: "Card Issuance Contract".to_string(),
                description: "Handles automated card creation and validation".to_string(),
                address: "CDLZFC3SYJYDZT7K67VZ75HPJVIEUVNIXF47ZG2FB2RMQQAHHAGK".to_string(),
                status: ContractStatus::Deployed,
                deployed_at: at("2025-01-10T08:30:00Z"),
                gas_used: 0.0045,
                execution_count: 23,
                recent_executions: vec![
                    execution("createCard", "2025-02-02T08:45:00Z", ExecutionStatus::Success),
                    execution("validateCard", "2025-02-02T07:30:00Z", ExecutionStatus::Success),
                    execution("updateBalance", "2025-02-02T06:15:00Z", ExecutionStatus::Success),
                ],
            },
            Contract {
                id: "contract_002".to_string(),
                name: "Rewards Distribution".to_string(),
                description: "Manages reward calculations and distributions".to_string(),
                address: "CBLZFC3SYJYDZT7K67VZ75HPJVIEUVNIXF47ZG2FB2RMQQAHHBGK".to_string(),
                status: ContractStatus::Executing,
                deployed_at: at("2025-01-18T12:00:00Z"),
                gas_used: 0.0032,
                execution_count: 156,
                recent_executions: vec![
                    execution("calculateRewards", "2025-02-02T09:00:00Z", ExecutionStatus::Success),
                    execution("distributeRewards", "2025-02-02T08:30:00Z", ExecutionStatus::Success),
                    execution("updateRewardRate", "2025-02-02T07:45:00Z", ExecutionStatus::Failed),
                ],
            },
        ]
    }

    fn activities(&self) -> Vec<Activity> {
        vec![
            activity("activity_001", ActivityKind::CardCreated, "New Card Created", "Premium Rewards Card successfully issued", None, ActivityStatus::Completed, "2025-02-02T09:30:00Z"),
            activity("activity_002", ActivityKind::AssetTransfer, "Asset Transfer", "Sent XLM to external wallet", Some(1500.0), ActivityStatus::Completed, "2025-02-02T08:15:00Z"),
            activity("activity_003", ActivityKind::ContractExecuted, "Smart Contract Executed", "Rewards distribution contract executed successfully", None, ActivityStatus::Completed, "2025-02-02T07:45:00Z"),
            activity("activity_004", ActivityKind::RewardsEarned, "Rewards Earned", "Monthly rewards credited to account", Some(245.50), ActivityStatus::Completed, "2025-02-02T06:00:00Z"),
            activity("activity_005", ActivityKind::CardTraded, "Card Traded", "Business Travel Card sold in marketplace", Some(2500.0), ActivityStatus::Pending, "2025-02-01T18:30:00Z"),
        ]
    }

    fn transactions(&self) -> Vec<Transaction> {
        use Direction::*;
        use TransactionKind::*;
        use TransactionStatus::*;

        vec![
            transaction("tx_001", "a1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456", CardPayment, "Coffee Shop Purchase", "Stellar Cafe Downtown", 12.50, Outgoing, Confirmed, "2025-08-02T08:30:00Z", Some("Stellar Premium Card"), 0.00001),
            transaction("tx_002", "b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef1234567a", SmartContract, "Staking Reward Distribution", "StellarCard Staking Pool", 25.75, Incoming, Confirmed, "2025-08-01T14:22:00Z", None, 0.00002),
            transaction("tx_003", "c3d4e5f6789012345678901234567890abcdef1234567890abcdef1234567ab2", Transfer, "P2P Transfer to Friend", "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37", 50.00, Outgoing, Pending, "2025-08-01T11:15:00Z", Some("Stellar Basic Card"), 0.00001),
            transaction("tx_004", "d4e5f6789012345678901234567890abcdef1234567890abcdef1234567ab2c3", CardPayment, "Online Shopping - Electronics", "TechMart Online Store", 299.99, Outgoing, Confirmed, "2025-07-31T16:45:00Z", Some("Stellar Premium Card"), 0.00001),
            transaction("tx_005", "e5f6789012345678901234567890abcdef1234567890abcdef1234567ab2c3d4", Reward, "Cashback Reward", "StellarCard Rewards Program", 15.00, Incoming, Confirmed, "2025-07-31T09:30:00Z", Some("Stellar Premium Card"), 0.0),
            transaction("tx_006", "f6789012345678901234567890abcdef1234567890abcdef1234567ab2c3d4e5", Stake, "XLM Staking Deposit", "Stellar Validator Network", 1000.00, Outgoing, Confirmed, "2025-07-30T13:20:00Z", None, 0.00003),
            transaction("tx_007", "6789012345678901234567890abcdef1234567890abcdef1234567ab2c3d4e5f", CardPayment, "Gas Station Fill-up", "Shell Station #4521", 45.80, Outgoing, Failed, "2025-07-30T07:45:00Z", Some("Stellar Basic Card"), 0.00001),
            transaction("tx_008", "789012345678901234567890abcdef1234567890abcdef1234567ab2c3d4e5f6", Transfer, "Salary Payment Received", "Stellar Corp Payroll", 2500.00, Incoming, Confirmed, "2025-07-29T12:00:00Z", None, 0.00001),
        ]
    }

    fn listings(&self) -> Vec<MarketListing> {
        vec![
            listing("card_001", "DeFi Yield Optimizer Pro", "StellarDeFi Labs", 125.50, 45_000.0, 15.8, 2.3, 890_000.0, 1247, 4.8, RiskLevel::Medium, (true, false), 50),
            listing("card_002", "NFT Collectible Alpha", "ArtChain Studios", 89.25, 23_000.0, 8.5, -1.2, 450_000.0, 892, 4.6, RiskLevel::High, (false, true), 25),
            listing("card_003", "Governance Token Beta", "DecentralDAO", 67.80, 78_000.0, 12.3, 5.7, 1_200_000.0, 2156, 4.9, RiskLevel::Low, (false, false), 100),
            listing("card_004", "Utility Card Gamma", "StellarUtils Inc", 156.90, 34_000.0, 18.7, 3.1, 670_000.0, 743, 4.7, RiskLevel::Medium, (true, true), 30),
            listing("card_005", "Staking Rewards Delta", "StakeMax Protocol", 234.15, 67_000.0, 22.4, 8.9, 1_500_000.0, 1834, 4.8, RiskLevel::High, (false, false), 20),
            listing("card_006", "Cross-Chain Bridge Card", "BridgeWorks", 98.45, 56_000.0, 14.2, -0.8, 780_000.0, 1456, 4.5, RiskLevel::Medium, (false, false), 75),
        ]
    }

    fn my_listings(&self) -> Vec<OwnListing> {
        let own = |id: &str, card_name: &str, price: f64, quantity: u32, views: u32, status: ListingStatus, listed_at: &str| OwnListing {
            id: id.to_string(),
            card_name: card_name.to_string(),
            price,
            quantity,
            views,
            status,
            listed_at: at(listed_at),
        };

        vec![
            own("listing_001", "Premium DeFi Card", 245.50, 3, 127, ListingStatus::Active, "2025-07-28T10:00:00Z"),
            own("listing_002", "Rare NFT Collectible", 89.99, 1, 89, ListingStatus::Pending, "2025-07-30T14:30:00Z"),
            own("listing_003", "Governance Token Set", 156.75, 2, 203, ListingStatus::Sold, "2025-07-25T09:15:00Z"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_parse() {
        let epoch = DateTime::<Utc>::default();
        assert!(DemoFixtures.transactions().iter().all(|t| t.timestamp != epoch));
        assert!(DemoFixtures.cards().iter().all(|c| c.created_at != epoch));
    }

    #[test]
    fn test_activity_currency_follows_amount() {
        for activity in DemoFixtures.activities() {
            assert_eq!(activity.amount.is_some(), activity.currency.is_some());
        }
    }

    #[test]
    fn test_listing_ids_unique() {
        let listings = DemoFixtures.listings();
        let mut ids: Vec<_> = listings.iter().map(|l| l.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
