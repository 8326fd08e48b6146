pub mod models;
pub mod url;
pub mod zowa;

pub use models::ApiVideo;
pub use url::extract_video_id;
pub use zowa::ZowaExtractor;
