pub mod category;
pub mod gemini;
pub mod poster;

pub use category::*;
pub use gemini::*;
pub use poster::*;
