use crate::{
    abstract_trait::banking::executor::HttpExecutorTrait, config::StarlingConfig,
    domain::responses::RawResponse, errors::ApiError,
};
use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{ACCEPT, USER_AGENT},
};
use tracing::debug;

pub struct HttpExecutor {
    client: Client,
    access_token: String,
    accept: String,
    user_agent: String,
}

impl HttpExecutor {
    pub fn new(client: Client, config: &StarlingConfig) -> Self {
        Self {
            client,
            access_token: config.access_token.clone(),
            accept: config.accept.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl HttpExecutorTrait for HttpExecutor {
    async fn execute(&self, url: Url) -> Result<RawResponse, ApiError> {
        debug!("🌐 GET {}", url.path());

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, &self.accept)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = Vec::from(response.bytes().await?);

        debug!("🌐 Status code: {status} | Received: {} bytes", body.len());

        Ok(RawResponse { status, body })
    }
}
