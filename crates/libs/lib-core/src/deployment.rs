//! # Card Creation Wizard
//!
//! Four steps take a card from design to a deployed contract:
//!
//! ```text
//! Design ──▶ Contract ──▶ Deployment ──(deploy)──▶ Complete
//! ```
//!
//! The forms hold raw input strings the way the page binds them; each step
//! parses and validates its form before the wizard lets it advance. Deploying
//! is simulated: [`Deployer`] waits the configured delay through the
//! [`Sleeper`] seam and hands back a [`DeploymentReceipt`] with a generated
//! contract address.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::dto::records::{Card, CardStatus};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::lifecycle::Sleeper;
use crate::view_model::StepStatus;

pub const ASSET_CODES: [&str; 4] = ["XLM", "USDC", "EURC", "BTC"];

pub const CARD_COLORS: [(&str, &str); 6] = [
    ("#1B365D", "Stellar Blue"),
    ("#2E5984", "Ocean Blue"),
    ("#000000", "Midnight Black"),
    ("#4A5568", "Slate Gray"),
    ("#D69E2E", "Gold"),
    ("#38A169", "Forest Green"),
];

const BASE_DEPLOYMENT_COST: f64 = 2.5;
const BASE_INITIALIZATION_COST: f64 = 0.8;

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}

/// Empty input means "not set".
fn parse_optional<T: std::str::FromStr>(raw: &str, field: &str) -> Result<Option<T>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| invalid(format!("{} must be a number", field)))
}

fn positive(value: Option<f64>, field: &str) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(invalid(format!("{} must be greater than zero", field))),
        other => Ok(other),
    }
}

// ---------------------------------------------------------------------------
// Step 1: design
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTier {
    #[default]
    Standard,
    Premium,
    Business,
}

impl CardTier {
    pub const ALL: [CardTier; 3] = [CardTier::Standard, CardTier::Premium, CardTier::Business];

    pub fn id(&self) -> &'static str {
        match self {
            CardTier::Standard => "standard",
            CardTier::Premium => "premium",
            CardTier::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardTier::Standard => "Standard",
            CardTier::Premium => "Premium",
            CardTier::Business => "Business",
        }
    }

    pub fn parse(id: &str) -> Option<CardTier> {
        CardTier::ALL.into_iter().find(|tier| tier.id() == id)
    }
}

/// Card design as typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignForm {
    pub name: String,
    pub holder_name: String,
    pub tier: CardTier,
    pub asset_code: String,
    pub initial_balance: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            holder_name: String::new(),
            tier: CardTier::Standard,
            asset_code: ASSET_CODES[0].to_string(),
            initial_balance: String::new(),
            background_color: CARD_COLORS[0].0.to_string(),
            text_color: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDesign {
    pub name: String,
    pub holder_name: String,
    pub tier: CardTier,
    pub asset_code: String,
    pub initial_balance: f64,
    pub background_color: String,
    pub text_color: String,
}

impl DesignForm {
    pub fn build(&self) -> Result<CardDesign> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("Card name is required"));
        }
        let holder_name = self.holder_name.trim();
        if holder_name.is_empty() {
            return Err(invalid("Card holder name is required"));
        }
        if !ASSET_CODES.contains(&self.asset_code.as_str()) {
            return Err(invalid(format!("Unsupported asset {}", self.asset_code)));
        }
        let initial_balance = parse_optional::<f64>(&self.initial_balance, "Initial balance")?.unwrap_or(0.0);
        if !initial_balance.is_finite() || initial_balance < 0.0 {
            return Err(invalid("Initial balance cannot be negative"));
        }

        Ok(CardDesign {
            name: name.to_string(),
            holder_name: holder_name.to_string(),
            tier: self.tier,
            asset_code: self.asset_code.clone(),
            initial_balance,
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Step 2: contract
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractNetwork {
    Mainnet,
    #[default]
    Testnet,
    Futurenet,
}

impl ContractNetwork {
    pub const ALL: [ContractNetwork; 3] = [ContractNetwork::Mainnet, ContractNetwork::Testnet, ContractNetwork::Futurenet];

    pub fn id(&self) -> &'static str {
        match self {
            ContractNetwork::Mainnet => "mainnet",
            ContractNetwork::Testnet => "testnet",
            ContractNetwork::Futurenet => "futurenet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractNetwork::Mainnet => "Stellar Mainnet",
            ContractNetwork::Testnet => "Stellar Testnet",
            ContractNetwork::Futurenet => "Stellar Futurenet",
        }
    }

    pub fn parse(id: &str) -> Option<ContractNetwork> {
        ContractNetwork::ALL.into_iter().find(|network| network.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractTemplate {
    #[default]
    Basic,
    Multisig,
    Timelock,
    Custom,
}

impl ContractTemplate {
    pub const ALL: [ContractTemplate; 4] = [
        ContractTemplate::Basic,
        ContractTemplate::Multisig,
        ContractTemplate::Timelock,
        ContractTemplate::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ContractTemplate::Basic => "basic",
            ContractTemplate::Multisig => "multisig",
            ContractTemplate::Timelock => "timelock",
            ContractTemplate::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractTemplate::Basic => "Basic Card Contract",
            ContractTemplate::Multisig => "Multi-Signature Contract",
            ContractTemplate::Timelock => "Time-Locked Contract",
            ContractTemplate::Custom => "Custom Contract",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContractTemplate::Basic => "Simple spend and transfer functions",
            ContractTemplate::Multisig => "Requires multiple approvals",
            ContractTemplate::Timelock => "Spending limits with time restrictions",
            ContractTemplate::Custom => "Upload your own Soroban contract",
        }
    }

    pub fn parse(id: &str) -> Option<ContractTemplate> {
        ContractTemplate::ALL.into_iter().find(|template| template.id() == id)
    }
}

/// Contract parameters as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractForm {
    pub network: ContractNetwork,
    pub template: ContractTemplate,
    pub daily_limit: String,
    pub transaction_limit: String,
    pub velocity_checks: bool,
    pub multisig_enabled: bool,
    pub required_signatures: String,
    pub total_signers: String,
    pub staking_enabled: bool,
    pub apy_rate: String,
    pub minimum_stake: String,
    pub gas_limit: String,
    pub upgradeable: bool,
    pub pausable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multisig {
    pub required: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Staking {
    pub apy_rate: f64,
    pub minimum_stake: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub network: ContractNetwork,
    pub template: ContractTemplate,
    pub daily_limit: Option<f64>,
    pub transaction_limit: Option<f64>,
    pub velocity_checks: bool,
    pub multisig: Option<Multisig>,
    pub staking: Option<Staking>,
    pub gas_limit: Option<u64>,
    pub upgradeable: bool,
    pub pausable: bool,
}

impl ContractForm {
    pub fn build(&self) -> Result<ContractConfig> {
        let daily_limit = positive(parse_optional(&self.daily_limit, "Daily limit")?, "Daily limit")?;
        let transaction_limit = positive(
            parse_optional(&self.transaction_limit, "Transaction limit")?,
            "Transaction limit",
        )?;
        if let (Some(daily), Some(per_tx)) = (daily_limit, transaction_limit) {
            if per_tx > daily {
                return Err(invalid("Transaction limit cannot exceed the daily limit"));
            }
        }

        let multisig = if self.multisig_enabled {
            let required = parse_optional::<u32>(&self.required_signatures, "Required signatures")?
                .ok_or_else(|| invalid("Required signatures is needed for multi-signature"))?;
            let total = parse_optional::<u32>(&self.total_signers, "Total signers")?
                .ok_or_else(|| invalid("Total signers is needed for multi-signature"))?;
            if required == 0 || required > total {
                return Err(invalid("Required signatures must be between 1 and the total signers"));
            }
            Some(Multisig { required, total })
        } else {
            None
        };
        if self.template == ContractTemplate::Multisig && multisig.is_none() {
            return Err(invalid("The multi-signature template needs multi-signature enabled"));
        }

        let staking = if self.staking_enabled {
            let apy_rate = parse_optional::<f64>(&self.apy_rate, "APY rate")?.unwrap_or(0.0);
            if !(0.0..=100.0).contains(&apy_rate) {
                return Err(invalid("APY rate must be between 0 and 100"));
            }
            let minimum_stake = parse_optional::<f64>(&self.minimum_stake, "Minimum stake")?.unwrap_or(0.0);
            if !minimum_stake.is_finite() || minimum_stake < 0.0 {
                return Err(invalid("Minimum stake cannot be negative"));
            }
            Some(Staking { apy_rate, minimum_stake })
        } else {
            None
        };

        let gas_limit = parse_optional::<u64>(&self.gas_limit, "Gas limit")?;
        if gas_limit == Some(0) {
            return Err(invalid("Gas limit must be greater than zero"));
        }

        Ok(ContractConfig {
            network: self.network,
            template: self.template,
            daily_limit,
            transaction_limit,
            velocity_checks: self.velocity_checks,
            multisig,
            staking,
            gas_limit,
            upgradeable: self.upgradeable,
            pausable: self.pausable,
        })
    }
}

// ---------------------------------------------------------------------------
// Step 3: deployment settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn id(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }

    pub fn parse(id: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|priority| priority.id() == id)
    }

    fn cost_multiplier(&self) -> f64 {
        match self {
            Priority::Low => 0.8,
            Priority::Medium => 1.0,
            Priority::High => 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSettings {
    pub priority: Priority,
    pub contract_name: String,
    pub auto_initialize: bool,
    pub verify_contract: bool,
    pub enable_monitoring: bool,
    pub backup_config: bool,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            priority: Priority::Medium,
            contract_name: String::new(),
            auto_initialize: true,
            verify_contract: false,
            enable_monitoring: true,
            backup_config: true,
        }
    }
}

impl DeploymentSettings {
    pub fn validate(&self) -> Result<()> {
        if self.contract_name.trim().is_empty() {
            return Err(invalid("Contract name is required"));
        }
        Ok(())
    }

    pub fn cost(&self) -> CostEstimate {
        CostEstimate::for_priority(self.priority)
    }
}

/// Estimated fees in XLM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub deployment: f64,
    pub initialization: f64,
    pub total: f64,
}

impl CostEstimate {
    pub fn for_priority(priority: Priority) -> Self {
        let multiplier = priority.cost_multiplier();
        let deployment = BASE_DEPLOYMENT_COST * multiplier;
        let initialization = BASE_INITIALIZATION_COST * multiplier;
        Self {
            deployment,
            initialization,
            total: deployment + initialization,
        }
    }
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Design,
    Contract,
    Deployment,
    Complete,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Design,
        WizardStep::Contract,
        WizardStep::Deployment,
        WizardStep::Complete,
    ];

    /// One-based, as shown in "Step N of 4".
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Design => 1,
            WizardStep::Contract => 2,
            WizardStep::Deployment => 3,
            WizardStep::Complete => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Design => "Design",
            WizardStep::Contract => "Smart Contract",
            WizardStep::Deployment => "Deployment",
            WizardStep::Complete => "Complete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Design => "Card appearance and basic info",
            WizardStep::Contract => "Configure contract parameters",
            WizardStep::Deployment => "Deploy to Stellar network",
            WizardStep::Complete => "Card ready to use",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::Design => "palette",
            WizardStep::Contract => "code",
            WizardStep::Deployment => "rocket",
            WizardStep::Complete => "check-circle",
        }
    }

    pub fn status(&self, current: WizardStep) -> StepStatus {
        if *self < current {
            StepStatus::Completed
        } else if *self == current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.number()).copied()
    }

    fn previous(&self) -> Option<WizardStep> {
        self.number().checked_sub(2).and_then(|i| WizardStep::ALL.get(i).copied())
    }
}

/// Everything a deployment needs, already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub design: CardDesign,
    pub contract: ContractConfig,
    pub settings: DeploymentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentReceipt {
    pub contract_address: String,
    pub network: ContractNetwork,
    pub contract_name: String,
    pub design: CardDesign,
    pub cost: CostEstimate,
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentReceipt {
    /// The card record that goes into the user's card list.
    pub fn card(&self) -> Card {
        Card {
            id: format!("card_{}", self.deployed_at.timestamp_millis()),
            name: self.design.name.clone(),
            card_type: self.design.tier.label().to_string(),
            card_id: format!("SC-{:04}", self.deployed_at.timestamp() % 10_000),
            balance: self.design.initial_balance,
            currency: self.design.asset_code.clone(),
            status: CardStatus::Active,
            created_at: self.deployed_at,
            holder_name: Some(self.design.holder_name.clone()),
        }
    }
}

/// Form state for the four creation steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreationWizard {
    step: WizardStep,
    pub design: DesignForm,
    pub contract: ContractForm,
    pub settings: DeploymentSettings,
    receipt: Option<DeploymentReceipt>,
}

impl CreationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn receipt(&self) -> Option<&DeploymentReceipt> {
        self.receipt.as_ref()
    }

    pub fn deployment_complete(&self) -> bool {
        self.receipt.is_some()
    }

    /// Validation result for the current step's form.
    pub fn check_current(&self) -> Result<()> {
        match self.step {
            WizardStep::Design => self.design.build().map(|_| ()),
            WizardStep::Contract => self.contract.build().map(|_| ()),
            WizardStep::Deployment => self.settings.validate(),
            WizardStep::Complete => Ok(()),
        }
    }

    /// Design and Contract advance with "Next"; Deployment only through a deploy.
    pub fn can_advance(&self) -> bool {
        matches!(self.step, WizardStep::Design | WizardStep::Contract) && self.check_current().is_ok()
    }

    pub fn advance(&mut self) -> Result<WizardStep> {
        if !matches!(self.step, WizardStep::Design | WizardStep::Contract) {
            return Err(invalid(format!("Cannot advance past {}", self.step.title())));
        }
        self.check_current()?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        debug!(step = ?self.step, "wizard advanced");
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Jump to a step already reached. Returns false for steps ahead.
    pub fn go_to(&mut self, step: WizardStep) -> bool {
        if step > self.step {
            return false;
        }
        self.step = step;
        true
    }

    /// Build and validate all three forms.
    pub fn request(&self) -> Result<DeploymentRequest> {
        let design = self.design.build()?;
        let contract = self.contract.build()?;
        self.settings.validate()?;
        Ok(DeploymentRequest {
            design,
            contract,
            settings: self.settings.clone(),
        })
    }

    pub fn complete(&mut self, receipt: DeploymentReceipt) {
        self.receipt = Some(receipt);
        self.step = WizardStep::Complete;
    }

    /// Start over for another card.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Deployer
// ---------------------------------------------------------------------------

/// Simulated contract deployment.
#[derive(Clone)]
pub struct Deployer {
    sleeper: Arc<dyn Sleeper>,
    delay: Duration,
}

impl Deployer {
    pub fn new(sleeper: Arc<dyn Sleeper>, config: &Config) -> Self {
        Self {
            sleeper,
            delay: Duration::from_millis(config.deploy_delay_ms as u64),
        }
    }

    pub async fn deploy(&self, request: DeploymentRequest) -> Result<DeploymentReceipt> {
        request.settings.validate()?;
        info!(
            contract = %request.settings.contract_name,
            network = request.contract.network.id(),
            "deploying card contract"
        );

        self.sleeper.sleep(self.delay).await;

        let deployed_at = Utc::now();
        let contract_address = contract_address(&request, deployed_at);
        info!(address = %contract_address, "card contract deployed");

        Ok(DeploymentReceipt {
            contract_address,
            network: request.contract.network,
            contract_name: request.settings.contract_name.trim().to_string(),
            cost: request.settings.cost(),
            design: request.design,
            deployed_at,
        })
    }
}

const STRKEY_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const CONTRACT_ADDRESS_LEN: usize = 56;

/// Contract strkey shaped address: `C` followed by 55 base32 characters.
fn contract_address(request: &DeploymentRequest, deployed_at: DateTime<Utc>) -> String {
    let mut hasher = DefaultHasher::new();
    request.settings.contract_name.hash(&mut hasher);
    request.design.name.hash(&mut hasher);
    request.contract.network.hash(&mut hasher);
    deployed_at.timestamp_millis().hash(&mut hasher);
    let mut state = hasher.finish();

    let mut address = String::with_capacity(CONTRACT_ADDRESS_LEN);
    address.push('C');
    while address.len() < CONTRACT_ADDRESS_LEN {
        // splitmix64
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        address.push(STRKEY_ALPHABET[(z % 32) as usize] as char);
    }
    address
}
