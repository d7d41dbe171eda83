pub mod image_client;
pub mod traits;

use crate::{error::Result, logger, prompt::VARIANT_COUNT};
use futures::future::try_join_all;

pub use image_client::ImageClient;
pub use traits::ImageGenerator;

/// Outcome of one variant: the decoded image, or `None` when the model
/// answered without one.
pub type VariantResult = Option<Vec<u8>>;

/// Runs every prompt against the generator and returns results in prompt
/// order. The first error aborts the whole batch.
pub async fn generate<G: ImageGenerator + ?Sized>(
    generator: &G,
    prompts: &[String; VARIANT_COUNT],
    product_image: &str,
    model_image: Option<&str>,
    parallel: bool,
) -> Result<Vec<VariantResult>> {
    if parallel {
        let _timer = logger::timer("poster variants (parallel)");
        return try_join_all(
            prompts
                .iter()
                .map(|prompt| generator.generate_variant(prompt, product_image, model_image)),
        )
        .await;
    }

    let mut results = Vec::with_capacity(prompts.len());
    for (i, prompt) in prompts.iter().enumerate() {
        let _timer = logger::timer(&format!("poster variant {}", i + 1));
        let result = generator
            .generate_variant(prompt, product_image, model_image)
            .await?;
        if result.is_none() {
            log::warn!("Variant {} came back without an image", i + 1);
        }
        results.push(result);
    }
    Ok(results)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::PosterError;
    use async_trait::async_trait;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    /// Scripted generator: answers each call with the next outcome in line and
    /// records the prompts it saw.
    pub struct FakeGenerator {
        pub configured: bool,
        outcomes: Mutex<Vec<FakeOutcome>>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
        pub model_images: Mutex<Vec<Option<String>>>,
    }

    #[derive(Clone)]
    pub enum FakeOutcome {
        Image(&'static [u8]),
        /// Base64 text as the model would send it.
        Payload(&'static str),
        Empty,
        Fail,
    }

    impl FakeGenerator {
        pub fn new(outcomes: Vec<FakeOutcome>) -> Self {
            Self {
                configured: true,
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                model_images: Mutex::new(Vec::new()),
            }
        }

        pub fn all_images() -> Self {
            Self::new(vec![
                FakeOutcome::Image(b"one"),
                FakeOutcome::Image(b"two"),
                FakeOutcome::Image(b"three"),
            ])
        }

        pub fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::all_images()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageGenerator for FakeGenerator {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate_variant(
            &self,
            prompt: &str,
            _product_image: &str,
            model_image: Option<&str>,
        ) -> Result<Option<Vec<u8>>> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.model_images
                .lock()
                .unwrap()
                .push(model_image.map(String::from));

            let outcome = self
                .outcomes
                .lock()
                .unwrap()
                .get(index)
                .cloned()
                .unwrap_or(FakeOutcome::Empty);
            match outcome {
                FakeOutcome::Image(bytes) => Ok(Some(bytes.to_vec())),
                FakeOutcome::Payload(data) => Ok(image_client::decode_image_payload(data)),
                FakeOutcome::Empty => Ok(None),
                FakeOutcome::Fail => Err(PosterError::ProviderError("HTTP 500: upstream".into())),
            }
        }
    }
}
