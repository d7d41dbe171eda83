use crate::{
    config::GeminiConfig,
    error::{PosterError, Result},
    gemini::traits::ImageGenerator,
    models::{Content, GenerateContentRequest, GenerateContentResponse, Part},
};
use async_trait::async_trait;
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use reqwest::Client;

pub const PRODUCT_IMAGE_MIME: &str = "image/jpeg";
pub const MODEL_IMAGE_MIME: &str = "image/png";

// Padding optional and trailing bits tolerated, like lenient base64 decoders.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model_id
        )
    }
}

/// Text prompt first, then the product photo, then the model photo if any.
pub fn build_request(
    prompt: &str,
    product_image: &str,
    model_image: Option<&str>,
) -> GenerateContentRequest {
    let mut parts = vec![
        Part::text(prompt),
        Part::inline(PRODUCT_IMAGE_MIME, product_image),
    ];
    if let Some(model_image) = model_image {
        parts.push(Part::inline(MODEL_IMAGE_MIME, model_image));
    }

    GenerateContentRequest {
        contents: vec![Content { role: None, parts }],
    }
}

/// Decodes a base64 image payload. Whitespace (line wrapping) is ignored and
/// padding is optional; anything still undecodable yields `None`.
pub fn decode_image_payload(data: &str) -> Option<Vec<u8>> {
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    match LENIENT.decode(compact.as_bytes()) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Dropping variant with undecodable image payload: {}", e);
            None
        }
    }
}

/// First inline image of the first candidate. Text commentary parts are
/// skipped; a malformed payload counts as no image.
pub fn extract_image(response: &GenerateContentResponse) -> Option<Vec<u8>> {
    let inline = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.inline_data.as_ref())
                .find(|inline| !inline.data.is_empty())
        });

    inline.and_then(|inline| decode_image_payload(&inline.data))
}

#[async_trait]
impl ImageGenerator for ImageClient {
    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }

    async fn generate_variant(
        &self,
        prompt: &str,
        product_image: &str,
        model_image: Option<&str>,
    ) -> Result<Option<Vec<u8>>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| PosterError::ConfigError("Google API key not configured".into()))?;

        let payload = build_request(prompt, product_image, model_image);

        log::info!("Generating image with model: {}", self.config.model_id);
        log::debug!(
            "Prompt ({} chars), model image attached: {}",
            prompt.len(),
            model_image.is_some()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PosterError::RequestError(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gemini returned {}: {}", status, error_text);
            return Err(PosterError::ProviderError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PosterError::ResponseError(e.to_string()))?;

        log::debug!("Received {} candidate(s)", body.candidates.len());

        Ok(extract_image(&body))
    }
}
