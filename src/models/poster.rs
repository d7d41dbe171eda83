use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};

// `null` reads the same as a missing key, so validation reports it.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_image: String, // Base64 encoded
    pub model_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    pub custom_prompt: Option<String>,
}

impl GenerationRequest {
    pub fn new(product_image: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            product_image: product_image.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_model_image(mut self, model_image: impl Into<String>) -> Self {
        self.model_image = Some(model_image.into());
        self
    }

    pub fn with_custom_prompt(mut self, custom_prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(custom_prompt.into());
        self
    }

    /// An empty `modelImage` string is treated the same as an absent one.
    pub fn model_image(&self) -> Option<&str> {
        self.model_image.as_deref().filter(|data| !data.is_empty())
    }

    pub fn custom_prompt(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// A generated poster held in memory for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub image_data: Vec<u8>,
    pub filename: String,
    pub version: u8,
}

impl GeneratedImage {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.image_data))
    }
}

/// Wire form of a generated poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterImage {
    pub image_url: String,
    pub filename: String,
    pub version: u8,
}

impl From<&GeneratedImage> for PosterImage {
    fn from(image: &GeneratedImage) -> Self {
        PosterImage {
            image_url: image.data_url(),
            filename: image.filename.clone(),
            version: image.version,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PosterImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    // Legacy single-image shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl GenerationResponse {
    pub fn success(images: Vec<PosterImage>) -> Self {
        Self {
            success: true,
            count: Some(images.len()),
            images: Some(images),
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Posters in version order, whichever shape the server answered with.
    pub fn posters(&self) -> Vec<PosterImage> {
        if !self.success {
            return Vec::new();
        }
        match (&self.images, &self.image_url) {
            (Some(images), _) => images.clone(),
            (None, Some(image_url)) => vec![PosterImage {
                image_url: image_url.clone(),
                filename: self
                    .filename
                    .clone()
                    .unwrap_or_else(|| "marketing-poster.png".to_string()),
                version: 1,
            }],
            (None, None) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case() {
        let request: GenerationRequest = serde_json::from_value(json!({
            "productImage": "aGVsbG8=",
            "modelImage": "",
            "category": "other",
            "customPrompt": "Garden Tools"
        }))
        .unwrap();
        assert_eq!(request.product_image, "aGVsbG8=");
        assert_eq!(request.model_image(), None);
        assert_eq!(request.custom_prompt(), Some("Garden Tools"));
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let request: GenerationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.product_image.is_empty());
        assert!(request.category.is_empty());
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let request: GenerationRequest = serde_json::from_value(json!({
            "productImage": null,
            "modelImage": null,
            "category": null,
            "customPrompt": null
        }))
        .unwrap();
        assert!(request.product_image.is_empty());
        assert!(request.category.is_empty());
        assert_eq!(request.model_image(), None);
    }

    #[test]
    fn failure_omits_empty_fields() {
        let json = serde_json::to_value(GenerationResponse::failure("boom")).unwrap();
        assert_eq!(json, json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn data_url_encodes_png() {
        let image = GeneratedImage {
            image_data: b"hello".to_vec(),
            filename: "p.png".into(),
            version: 1,
        };
        assert_eq!(image.data_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn legacy_shape_becomes_single_version() {
        let response: GenerationResponse = serde_json::from_value(json!({
            "success": true,
            "imageUrl": "data:image/png;base64,AAAA",
            "filename": "marketing-poster-2025-01-01T00-00-00.png"
        }))
        .unwrap();
        let posters = response.posters();
        assert_eq!(posters.len(), 1);
        assert_eq!(posters[0].version, 1);
        assert_eq!(posters[0].filename, "marketing-poster-2025-01-01T00-00-00.png");
    }
}
