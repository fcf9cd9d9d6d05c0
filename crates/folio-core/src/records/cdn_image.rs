//! Image listings from `/cloudinary/images/:folder`.

use serde::{Deserialize, Serialize};

use super::{lenient_string, lenient_text, lenient_u32};
use crate::cdn;
use crate::types::{facet, MediaItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdnImage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub public_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub secure_url: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

impl CdnImage {
    /// Last path component of the public id, used as alt text
    pub fn file_stem(&self) -> &str {
        self.public_id
            .rsplit('/')
            .next()
            .unwrap_or(&self.public_id)
    }

    /// Folder part of the public id
    pub fn folder(&self) -> Option<&str> {
        self.public_id.rsplit_once('/').map(|(folder, _)| folder)
    }

    /// Gallery item using the thumbnail and high-quality variants
    pub fn to_media_item(&self) -> MediaItem {
        let mut item = MediaItem::new(
            self.public_id.clone(),
            cdn::thumbnail_url(&self.secure_url),
            cdn::high_quality_url(&self.secure_url),
            self.file_stem().replace(['-', '_'], " "),
        )
        .with_field("secureUrl", self.secure_url.clone());

        if let Some(folder) = self.folder() {
            item = item.with_category(facet::FOLDER, folder);
        }
        if let Some(created) = &self.created_at {
            item = item.with_field("date", created.clone());
            if let Some(date) = crate::filter::parse_date(created) {
                item = item.with_category(facet::YEAR, date.format("%Y").to_string());
            }
        }
        if let Some(format) = &self.format {
            item = item.with_field("format", format.clone());
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_media_item() {
        let json = r#"{
            "public_id": "portfolio/work/casa-ato/facade_north",
            "secure_url": "https://res.cloudinary.com/d/image/upload/v9/portfolio/work/casa-ato/facade_north.jpg",
            "width": 4000,
            "format": "jpg",
            "created_at": "2023-08-14T09:12:00Z"
        }"#;
        let image: CdnImage = serde_json::from_str(json).unwrap();
        let item = image.to_media_item();

        assert_eq!(item.id, "portfolio/work/casa-ato/facade_north");
        assert_eq!(item.alt_text, "facade north");
        assert!(item.thumbnail_url.contains("/upload/w_400,"));
        assert!(item.full_res_url.contains("/upload/w_2048,f_auto,q_90/"));
        assert_eq!(item.category(facet::FOLDER), Some("portfolio/work/casa-ato"));
        assert_eq!(item.category(facet::YEAR), Some("2023"));
    }

    #[test]
    fn test_flat_public_id_has_no_folder() {
        let image = CdnImage {
            public_id: "loose".into(),
            secure_url: "https://x/upload/loose.jpg".into(),
            ..Default::default()
        };
        assert_eq!(image.folder(), None);
        assert_eq!(image.file_stem(), "loose");
    }
}
