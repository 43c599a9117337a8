use anyhow::Context;
use eco_config::EcoConfig;

/// Load `.env` and the layered config, noting which stages will run offline.
pub fn load_config() -> anyhow::Result<EcoConfig> {
    let config = EcoConfig::load_with_dotenv().context("failed to load ecolens configuration")?;

    if !config.search.is_configured() {
        tracing::info!("search.api_key not set; the scout will use fallback evidence");
    }
    if !config.openai.is_configured() {
        tracing::info!("openai.api_key not set; reports are templated unless --api-key is given");
    }

    Ok(config)
}
