use crate::{
    aggregate::aggregate,
    error::{PosterError, Result},
    gemini::{self, ImageGenerator},
    models::{GenerationRequest, GenerationResponse, ProductCategory},
    prompt,
};
use chrono::Utc;
use uuid::Uuid;

pub const MISSING_FIELDS_ERROR: &str = "Product image and category are required";
pub const MISSING_CUSTOM_CATEGORY_ERROR: &str = "Please specify your custom product category";
pub const MISSING_CREDENTIAL_ERROR: &str = "Google API key not configured";

/// Handles one poster request end to end. Holds no per-request state, so a
/// single instance is shared by every worker.
pub struct PosterService<G: ImageGenerator> {
    generator: G,
    parallel_variants: bool,
}

impl<G: ImageGenerator> PosterService<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            parallel_variants: false,
        }
    }

    pub fn with_parallel_variants(mut self, enabled: bool) -> Self {
        self.parallel_variants = enabled;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn validate(&self, request: &GenerationRequest) -> Result<()> {
        if request.product_image.is_empty() || request.category.is_empty() {
            return Err(PosterError::ValidationError(MISSING_FIELDS_ERROR.into()));
        }

        if ProductCategory::from_id(&request.category) == Some(ProductCategory::Other)
            && request.custom_prompt().is_none()
        {
            return Err(PosterError::ValidationError(
                MISSING_CUSTOM_CATEGORY_ERROR.into(),
            ));
        }

        if !self.generator.is_configured() {
            return Err(PosterError::ConfigError(MISSING_CREDENTIAL_ERROR.into()));
        }

        Ok(())
    }

    pub async fn handle(&self, request: GenerationRequest) -> GenerationResponse {
        let request_id = Uuid::new_v4();

        if let Err(e) = self.validate(&request) {
            log::warn!("[req:{}] Rejected poster request: {}", request_id, e);
            return GenerationResponse::failure(e.public_message());
        }

        log::info!(
            "[req:{}] Generating posters for category '{}' (model image: {})",
            request_id,
            request.category,
            request.model_image().is_some()
        );

        let prompts = prompt::compose(
            &request.category,
            request.model_image().is_some(),
            request.custom_prompt(),
        );

        let results = match gemini::generate(
            &self.generator,
            &prompts,
            &request.product_image,
            request.model_image(),
            self.parallel_variants,
        )
        .await
        {
            Ok(results) => results,
            Err(e) => {
                log::error!("[req:{}] Error generating poster: {}", request_id, e);
                return GenerationResponse::failure(e.public_message());
            }
        };

        let response = aggregate(results, Utc::now());
        match response.count {
            Some(count) => log::info!("[req:{}] Generated {} poster(s)", request_id, count),
            None => log::warn!("[req:{}] Model returned no images", request_id),
        }
        response
    }
}
