use crate::api::photos_structs::PhotoRecord;
use serde::{Deserialize, Serialize};
use url::Url;

/// A photo as the browsing layer sees it.
///
/// The aspect ratio is always recomputed from the pixel dimensions when a
/// wire record is mapped; whatever the upstream claims is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub width: i32,
    pub height: i32,
    pub aspect_ratio: f64,
    pub photographer_name: String,
    pub photographer_url: Url,
    pub avg_color_hex: Option<String>,
    pub urls: PhotoUrls,
    pub alt: String,
    pub liked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub original: Url,
    pub large: Url,
    pub large2x: Url,
    pub medium: Url,
    pub small: Url,
    pub portrait: Url,
    pub landscape: Url,
    pub tiny: Url,
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Self {
            id: record.id,
            width: record.width,
            height: record.height,
            // IEEE quotient on purpose: a zero-height record maps to +inf
            // rather than failing the whole page.
            aspect_ratio: f64::from(record.width) / f64::from(record.height),
            photographer_name: record.photographer,
            photographer_url: record.photographer_url,
            avg_color_hex: record.avg_color,
            urls: PhotoUrls {
                original: record.src.original,
                large: record.src.large,
                large2x: record.src.large2x,
                medium: record.src.medium,
                small: record.src.small,
                portrait: record.src.portrait,
                landscape: record.src.landscape,
                tiny: record.src.tiny,
            },
            alt: record.alt,
            liked: record.liked,
        }
    }
}
