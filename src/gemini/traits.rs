use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Whether the generator has the credential it needs to call out.
    fn is_configured(&self) -> bool;

    /// Runs one prompt against the image model with the base64 product photo
    /// (and optional model photo) attached. `Ok(None)` means the model answered
    /// without an image part.
    async fn generate_variant(
        &self,
        prompt: &str,
        product_image: &str,
        model_image: Option<&str>,
    ) -> Result<Option<Vec<u8>>>;
}
