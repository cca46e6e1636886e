use crate::{
    abstract_trait::banking::{
        executor::DynHttpExecutor, service::BankingQueryServiceTrait,
    },
    domain::{
        requests::{Endpoint, TimeWindow},
        responses::{AccountsPage, TransactionsPage},
    },
    errors::ApiError,
    model::{Account, Transaction},
    utils::{decode, validate_status},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{error, info};

/// Networked retrieval of accounts and their transaction feed.
///
/// Every call builds its URL, performs exactly one request, validates the
/// status and decodes the body, stopping at the first failure. Nothing is
/// cached between calls.
pub struct BankingQueryService {
    base_url: String,
    executor: DynHttpExecutor,
}

impl BankingQueryService {
    pub fn new(base_url: impl Into<String>, executor: DynHttpExecutor) -> Self {
        Self {
            base_url: base_url.into(),
            executor,
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let url = endpoint.build_url(&self.base_url)?;
        let response = self.executor.execute(url).await?;

        validate_status(response.status)?;

        decode(&response.body)
    }
}

#[async_trait]
impl BankingQueryServiceTrait for BankingQueryService {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError> {
        info!("🏦 Fetching accounts");

        let page: AccountsPage = self.get(&Endpoint::ListAccounts).await.map_err(|e| {
            error!("❌ Failed to fetch accounts: {e}");
            e
        })?;

        info!("✅ Found {} accounts", page.accounts.len());

        Ok(page.accounts)
    }

    async fn fetch_transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
    ) -> Result<Vec<Transaction>, ApiError> {
        let window = TimeWindow::trailing_week();

        info!(
            "🔍 Fetching transactions for account: {account_uid} | Category: {category_uid}, From: {}, To: {}",
            window.min_timestamp(),
            window.max_timestamp()
        );

        let endpoint = Endpoint::list_transactions(account_uid, category_uid, window);

        let page: TransactionsPage = self.get(&endpoint).await.map_err(|e| {
            error!("❌ Failed to fetch transactions for account {account_uid}: {e}");
            e
        })?;

        info!(
            "✅ Found {} transactions for account: {account_uid}",
            page.items.len()
        );

        Ok(page.items)
    }
}
