use serde::Deserialize;
use url::Url;

/// Listing body shared by the curated and search endpoints.
#[derive(Debug, Deserialize)]
pub struct PhotoListResponse {
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<PhotoRecord>,
    pub total_results: u64,
    pub next_page: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    pub width: i32,
    pub height: i32,
    pub url: Url,
    pub photographer: String,
    pub photographer_url: Url,
    pub photographer_id: i64,
    pub avg_color: Option<String>,
    pub src: PhotoSrc,
    pub liked: bool,
    pub alt: String,
}

/// The fixed set of pre-rendered variants the API serves per photo.
#[derive(Debug, Deserialize)]
pub struct PhotoSrc {
    pub original: Url,
    pub large2x: Url,
    pub large: Url,
    pub medium: Url,
    pub small: Url,
    pub portrait: Url,
    pub landscape: Url,
    pub tiny: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_JSON: &str = r##"{
        "page": 1,
        "per_page": 15,
        "photos": [
            {
                "id": 2014422,
                "width": 3024,
                "height": 3024,
                "url": "https://www.pexels.com/photo/brown-rocks-during-golden-hour-2014422/",
                "photographer": "Joey Farina",
                "photographer_url": "https://www.pexels.com/@joey",
                "photographer_id": 680589,
                "avg_color": "#978E82",
                "src": {
                    "original": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg",
                    "large2x": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?fit=crop&h=650&w=940",
                    "large": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?h=650&w=940",
                    "medium": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?h=350",
                    "small": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?h=130",
                    "portrait": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?fit=crop&h=1200&w=800",
                    "landscape": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?fit=crop&h=627&w=1200",
                    "tiny": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?fit=crop&h=200&w=280"
                },
                "liked": false,
                "alt": "Brown rocks during golden hour"
            }
        ],
        "total_results": 10000,
        "next_page": "https://api.pexels.com/v1/curated/?page=2&per_page=15"
    }"##;

    #[test]
    fn decodes_a_listing_page() {
        let response: PhotoListResponse = serde_json::from_str(LISTING_JSON).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.per_page, 15);
        assert_eq!(response.total_results, 10_000);
        assert!(response.next_page.is_some());

        let record = &response.photos[0];
        assert_eq!(record.id, 2_014_422);
        assert_eq!(record.photographer, "Joey Farina");
        assert_eq!(record.avg_color.as_deref(), Some("#978E82"));
        assert_eq!(
            record.src.tiny.as_str(),
            "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?fit=crop&h=200&w=280"
        );
    }

    #[test]
    fn missing_next_page_and_avg_color_decode_as_none() {
        let mut value: serde_json::Value = serde_json::from_str(LISTING_JSON).unwrap();
        value.as_object_mut().unwrap().remove("next_page");
        value["photos"][0]["avg_color"] = serde_json::Value::Null;

        let response: PhotoListResponse = serde_json::from_value(value).unwrap();
        assert!(response.next_page.is_none());
        assert!(response.photos[0].avg_color.is_none());
    }

    #[test]
    fn listing_with_a_missing_field_is_a_decode_error() {
        let mut value: serde_json::Value = serde_json::from_str(LISTING_JSON).unwrap();
        value["photos"][0].as_object_mut().unwrap().remove("src");

        assert!(serde_json::from_value::<PhotoListResponse>(value).is_err());
    }
}
