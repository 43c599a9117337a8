use anyhow::Context;
use eco_analyst::OpenAiChat;
use eco_config::EcoConfig;
use eco_core::ComparisonRequest;
use eco_pipeline::Pipeline;
use eco_search::BraveSearch;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: EcoConfig,
    pub pipeline: Pipeline<BraveSearch, OpenAiChat>,
}

impl AppContext {
    pub fn init(config: EcoConfig) -> anyhow::Result<Self> {
        let search =
            BraveSearch::from_config(&config.search).context("failed to build search client")?;
        let chat =
            OpenAiChat::from_config(&config.openai).context("failed to build OpenAI client")?;

        let pipeline = Pipeline::new(search, chat)
            .with_model_id(config.openai.model.clone())
            .with_fallback_delay(config.general.fallback_delay());

        Ok(Self { config, pipeline })
    }

    /// Build a request, preferring `--api-key` over the configured key.
    pub fn request(
        &self,
        subject_a: impl Into<String>,
        subject_b: impl Into<String>,
        api_key: Option<&str>,
    ) -> ComparisonRequest {
        ComparisonRequest::new(subject_a, subject_b)
            .with_credential(resolve_credential(api_key, &self.config))
    }
}

fn resolve_credential(flag: Option<&str>, config: &EcoConfig) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| config.openai.credential())
}
