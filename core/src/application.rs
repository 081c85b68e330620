use anyhow::anyhow;

use crate::domain::common::{ChefInBoxConfig, services::Service};
use crate::infrastructure::llm::GeminiLLMClient;

pub type ChefInBoxService = Service<GeminiLLMClient>;

/// Wires the Gemini client into the domain service.
pub fn create_service(config: ChefInBoxConfig) -> Result<ChefInBoxService, anyhow::Error> {
    if config.llm.gemini_api_key.is_empty() {
        return Err(anyhow!("GEMINI_API_KEY must be set"));
    }

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_image_model,
    );

    Ok(Service::new(llm_client))
}
