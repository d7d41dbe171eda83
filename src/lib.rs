pub mod aggregate;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod service;
pub mod templates;

#[cfg(feature = "server")]
pub mod server;

pub use config::{Config, GeminiConfig};
pub use error::{PosterError, Result};
pub use gemini::{ImageClient, ImageGenerator};
pub use models::{
    CategoryInfo, CategoryTemplate, GeneratedImage, GenerationRequest, GenerationResponse,
    PosterImage, ProductCategory,
};
pub use service::PosterService;
