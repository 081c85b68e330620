use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::LLMClient, value_objects::GeneratedImage},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    image_model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData", alias = "inline_data")]
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
struct InlineDataResponse {
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: String,
    data: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, image_model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            image_model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

fn first_text_part(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .find_map(|part| part.text)
}

fn first_inline_image(response: GeminiResponse) -> Result<Option<GeneratedImage>, CoreError> {
    let inline_data = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.content.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|part| part.inline_data);

    let Some(inline_data) = inline_data else {
        return Ok(None);
    };

    let bytes = general_purpose::STANDARD
        .decode(inline_data.data.as_bytes())
        .map_err(|e| {
            tracing::error!("Failed to decode inline image data: {}", e);
            CoreError::ExternalServiceError(format!("Invalid inline image data: {}", e))
        })?;

    Ok(Some(GeneratedImage {
        mime_type: inline_data.mime_type,
        bytes,
    }))
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        let response = self.call_gemini_api(&self.model_name, request).await?;

        first_text_part(response)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    async fn generate_image(&self, prompt: String) -> Result<Option<GeneratedImage>, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        };

        let response = self
            .call_gemini_api(&self.image_model_name, request)
            .await?;

        first_inline_image(response)
    }
}
