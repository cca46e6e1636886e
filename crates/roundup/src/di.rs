use anyhow::{Context, Result};
use shared::{
    abstract_trait::banking::{executor::DynHttpExecutor, service::DynBankingQueryService},
    config::StarlingConfig,
    helpers::api::create_client,
    repository::banking::HttpExecutor,
    service::{RoundUpService, banking::BankingQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub round_up: Arc<RoundUpService>,
}

impl DependenciesInject {
    pub fn new(config: &StarlingConfig) -> Result<Self> {
        let client = create_client().context("Failed to build HTTP client")?;

        let executor = Arc::new(HttpExecutor::new(client, config)) as DynHttpExecutor;
        let banking_query = Arc::new(BankingQueryService::new(
            config.base_url.clone(),
            executor,
        )) as DynBankingQueryService;
        let round_up = Arc::new(RoundUpService::new(banking_query));

        Ok(Self { round_up })
    }
}
