use ira_client::{ApiClient, Services};
use ira_config::IraConfig;

/// Resources built once per process and handed to every command.
pub struct AppContext {
    pub config: IraConfig,
    pub services: Services,
}

impl AppContext {
    pub fn init(config: IraConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)?;
        tracing::debug!(base_url = client.base_url(), "backend client ready");
        Ok(Self {
            services: Services::new(client),
            config,
        })
    }
}
