// SPDX-License-Identifier: MPL-2.0
//! Gemini `generateContent` adapter implementing [`Enhancer`].
//!
//! The request carries the source image as an inline base64 PNG part followed
//! by the composed prompt. The first inline image part of the first candidate
//! is the result.

use crate::application::port::enhancer::{EnhanceError, EnhanceResult, Enhancer};
use crate::domain::enhance::EnhanceRequest;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use serde_json::json;

/// Default REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default image model.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini image model.
#[derive(Debug, Clone)]
pub struct GeminiEnhancer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
}

impl GeminiEnhancer {
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key_env: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key_env: api_key_env.into(),
        }
    }

    /// Full URL of the `generateContent` method for the configured model.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn api_key(&self) -> Result<String, EnhanceError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(EnhanceError::MissingApiKey)
    }
}

impl Default for GeminiEnhancer {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_API_KEY_ENV)
    }
}

impl Enhancer for GeminiEnhancer {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn enhance(&self, request: EnhanceRequest) -> BoxFuture<'static, EnhanceResult> {
        let client = self.client.clone();
        let url = self.url();
        let api_key = self.api_key();

        async move {
            let api_key = api_key?;
            let body = request_body(&request);

            tracing::debug!(
                url = %url,
                aspect_ratio = %request.aspect_ratio,
                image_size = request.image_size.as_str(),
                "sending enhancement request"
            );

            let response = client
                .post(&url)
                .header(API_KEY_HEADER, api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| EnhanceError::Network(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| EnhanceError::Network(e.to_string()))?;

            if !status.is_success() {
                tracing::warn!(%status, "enhancement request rejected");
            }

            parse_response(&text)
        }
        .boxed()
    }
}

/// Builds the JSON body for a `generateContent` call.
#[must_use]
pub fn request_body(request: &EnhanceRequest) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": "image/png",
                        "data": STANDARD.encode(&request.image_png),
                    }
                },
                { "text": request.prompt },
            ]
        }],
        "generationConfig": {
            "imageConfig": {
                "aspectRatio": request.aspect_ratio.as_str(),
                "imageSize": request.image_size.as_str(),
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

/// Extracts the generated image from a `generateContent` response body.
///
/// # Errors
///
/// Returns the categorized service error if the body carries one, or
/// [`EnhanceError::NoImageReturned`] if no candidate holds an inline image.
pub fn parse_response(body: &str) -> EnhanceResult {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| EnhanceError::Other(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(EnhanceError::from_message(&error.message));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(EnhanceError::NoImageReturned);
    };

    if candidate
        .finish_reason
        .as_deref()
        .is_some_and(|reason| reason.eq_ignore_ascii_case("SAFETY"))
    {
        return Err(EnhanceError::SafetyFilter);
    }

    let data = candidate
        .content
        .into_iter()
        .flat_map(|content| content.parts)
        .find_map(|part| part.inline_data)
        .ok_or(EnhanceError::NoImageReturned)?;

    STANDARD
        .decode(data.data.as_bytes())
        .map_err(|e| EnhanceError::Other(e.to_string()))
}
