use crate::{
    abstract_trait::banking::service::DynBankingQueryService, errors::ApiError,
    service::RoundUpCalculator,
};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundUpSummary {
    pub account_uid: String,
    pub currency: Option<String>,
    pub total_minor_units: u64,
    pub eligible_transactions: usize,
}

/// Round-up for the customer's primary account: accounts first, then that
/// account's default-category feed, then the aggregation.
pub struct RoundUpService {
    query: DynBankingQueryService,
    calculator: RoundUpCalculator,
}

impl RoundUpService {
    pub fn new(query: DynBankingQueryService) -> Self {
        Self::with_calculator(query, RoundUpCalculator::default())
    }

    pub fn with_calculator(query: DynBankingQueryService, calculator: RoundUpCalculator) -> Self {
        Self { query, calculator }
    }

    /// `Ok(None)` means the customer has no account yet, which is distinct
    /// from a known total of zero.
    pub async fn round_up_primary_account(&self) -> Result<Option<RoundUpSummary>, ApiError> {
        let accounts = self.query.fetch_accounts().await?;

        let Some(account) = accounts.into_iter().next() else {
            warn!("⚠️ No accounts returned, nothing to round up");
            return Ok(None);
        };

        let transactions = self
            .query
            .fetch_transactions(&account.account_uid, &account.default_category)
            .await?;

        let eligible: Vec<_> = transactions
            .iter()
            .filter(|tx| tx.is_settled_outgoing())
            .collect();

        let total_minor_units: u64 = eligible
            .iter()
            .map(|tx| self.calculator.contribution(&tx.amount))
            .sum();

        let currency = account.currency.clone().or_else(|| {
            eligible
                .first()
                .map(|tx| tx.amount.currency.clone())
        });

        info!(
            "💰 Round-up for account {}: {total_minor_units} minor units over {} transactions",
            account.account_uid,
            eligible.len()
        );

        Ok(Some(RoundUpSummary {
            account_uid: account.account_uid,
            currency,
            total_minor_units,
            eligible_transactions: eligible.len(),
        }))
    }
}
