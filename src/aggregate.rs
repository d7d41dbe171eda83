use crate::{
    gemini::VariantResult,
    models::{GeneratedImage, GenerationResponse, PosterImage},
};
use chrono::{DateTime, Utc};

pub const NO_IMAGES_ERROR: &str = "No images generated in response";

/// Second-granularity UTC timestamp without `:` or `.`, e.g. `2025-03-14T09-26-53`.
pub fn filename_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

pub fn poster_filename(version: u8, timestamp: &str) -> String {
    format!("marketing-poster-v{}-{}.png", version, timestamp)
}

/// Numbers the variants that produced an image. Versions follow the variant
/// slot, so a missing variant 2 leaves versions 1 and 3.
pub fn collect_images(results: Vec<VariantResult>, now: DateTime<Utc>) -> Vec<GeneratedImage> {
    let timestamp = filename_timestamp(now);

    results
        .into_iter()
        .zip(1u8..)
        .filter_map(|(result, version)| {
            result.map(|image_data| GeneratedImage {
                image_data,
                filename: poster_filename(version, &timestamp),
                version,
            })
        })
        .collect()
}

pub fn aggregate(results: Vec<VariantResult>, now: DateTime<Utc>) -> GenerationResponse {
    let images = collect_images(results, now);

    if images.is_empty() {
        return GenerationResponse::failure(NO_IMAGES_ERROR);
    }

    GenerationResponse::success(images.iter().map(PosterImage::from).collect())
}
