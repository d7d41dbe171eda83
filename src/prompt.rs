//! Builds the three prompt variants sent to the image model.
//!
//! Every variant is the category base text followed by a block of critical
//! requirements. The block always forbids rendered text so the poster can be
//! finished in design software, and demands identity fidelity whenever a
//! model photo accompanies the product photo.

use crate::{models::ProductCategory, templates};

pub const VARIANT_COUNT: usize = 3;

pub const NO_TEXT_REQUIREMENT: &str =
    "- DO NOT include ANY text, typography, headlines, slogans, or written content in the image";

pub const IDENTITY_REQUIREMENT: &str =
    "- Use the EXACT same person from the model reference image - same face, hair, and appearance";

const PRODUCT_DETAIL_LIGHTING: &str =
    "- Use professional photography lighting and composition with emphasis on product details";
const PRODUCT_DETAIL_FOCUS: &str =
    "- Focus on showcasing the product's quality, style, and appeal with close-up details";

const LIFESTYLE_LIGHTING: &str =
    "- Use lifestyle photography with dynamic composition and artistic lighting";
const LIFESTYLE_FOCUS: &str = "- Focus on lifestyle appeal and fashion-forward presentation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    ProductDetail,
    Lifestyle,
}

// Variant 3 repeats the product-detail framing of variant 1.
const VARIANT_FRAMINGS: [Framing; VARIANT_COUNT] =
    [Framing::ProductDetail, Framing::Lifestyle, Framing::ProductDetail];

/// Base text for a request: the category template, or a sentence built around
/// the caller's own wording when the category is `other`.
pub fn base_text(category: &str, has_model_image: bool, custom_text: Option<&str>) -> String {
    let custom = custom_text.filter(|text| !text.trim().is_empty());

    match (ProductCategory::from_id(category), custom) {
        (Some(ProductCategory::Other), Some(custom)) => {
            let subject = custom.to_lowercase();
            let middle = if has_model_image {
                "Use the exact person from the model reference image wearing or using the \
                 product from the product reference."
            } else {
                "Feature the product from the reference image."
            };
            format!(
                "Create a professional marketing poster for this {subject} product. {middle} \
                 Style it with professional photography and modern composition suitable for \
                 {subject} marketing."
            )
        }
        _ => templates::lookup(category)
            .select(has_model_image)
            .to_string(),
    }
}

fn requirements(framing: Framing, has_model_image: bool) -> String {
    let (lighting, focus) = match framing {
        Framing::ProductDetail => (PRODUCT_DETAIL_LIGHTING, PRODUCT_DETAIL_FOCUS),
        Framing::Lifestyle => (LIFESTYLE_LIGHTING, LIFESTYLE_FOCUS),
    };
    let identity = if has_model_image {
        IDENTITY_REQUIREMENT
    } else {
        ""
    };

    [
        "CRITICAL REQUIREMENTS:",
        NO_TEXT_REQUIREMENT,
        "- Create a clean, text-free visual that focuses purely on the product and model \
         (if provided)",
        lighting,
        "- Maintain luxury brand aesthetic with modern, clean design",
        "- The image should be ready for text to be added later by design software",
        identity,
        focus,
    ]
    .join("\n")
}

/// Expands a request into exactly three prompts, in variant order.
pub fn compose(
    category: &str,
    has_model_image: bool,
    custom_text: Option<&str>,
) -> [String; VARIANT_COUNT] {
    let base = base_text(category, has_model_image, custom_text);
    VARIANT_FRAMINGS
        .map(|framing| format!("{}\n\n{}", base, requirements(framing, has_model_image)))
}
