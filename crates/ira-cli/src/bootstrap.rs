use anyhow::Context;
use ira_config::IraConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<IraConfig> {
    IraConfig::load_with_dotenv().context("failed to load IRA configuration")
}
