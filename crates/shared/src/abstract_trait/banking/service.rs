use crate::{
    errors::ApiError,
    model::{Account, Transaction},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBankingQueryService = Arc<dyn BankingQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait BankingQueryServiceTrait {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError>;
    async fn fetch_transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
    ) -> Result<Vec<Transaction>, ApiError>;
}
