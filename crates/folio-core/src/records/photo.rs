//! Photography records from `/data/photos.json`.

use serde::{Deserialize, Serialize};

use super::{lenient_records, lenient_string, lenient_text, lenient_u32};
use crate::cdn;
use crate::types::{facet, MediaItem};

/// Payload wrapper: `{ "photos": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoData {
    #[serde(default, deserialize_with = "lenient_records")]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Preview-sized source
    #[serde(default, deserialize_with = "lenient_text")]
    pub src: String,
    /// Full resolution source, derived from `src` when absent
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_src: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub alt: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub folder: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub height: Option<u32>,
}

impl Photo {
    /// Topic facet; older payloads only carry `category`
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().or(self.category.as_deref())
    }

    pub fn to_media_item(&self) -> MediaItem {
        let id = self
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.src.clone());
        let full_res = self
            .full_src
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| cdn::high_quality_url(&self.src));

        let mut item = MediaItem::new(id, self.src.clone(), full_res, self.alt.clone())
            .with_field("title", self.alt.clone());
        if let Some(year) = &self.year {
            item = item.with_category(facet::YEAR, year.clone());
        }
        if let Some(topic) = self.topic() {
            item = item.with_category(facet::TOPIC, topic);
        }
        if let Some(folder) = &self.folder {
            item = item.with_category(facet::FOLDER, folder.clone());
        }
        if let Some(width) = self.width {
            item = item.with_field("width", width);
        }
        if let Some(height) = self.height {
            item = item.with_field("height", height);
        }
        item
    }
}

impl PhotoData {
    /// Gallery items; photos without a source are skipped
    pub fn to_media_items(&self) -> Vec<MediaItem> {
        self.photos
            .iter()
            .filter(|photo| !photo.src.is_empty())
            .map(Photo::to_media_item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_payload_is_defaulted() {
        let json = r#"{"photos":[{"id":7,"src":"a.jpg","alt":"Dock","year":2022,"category":"Travel","fullSrc":null}]}"#;
        let data: PhotoData = serde_json::from_str(json).unwrap();
        let photo = &data.photos[0];
        assert_eq!(photo.id.as_deref(), Some("7"));
        assert_eq!(photo.year.as_deref(), Some("2022"));
        assert_eq!(photo.topic(), Some("Travel"));
        assert!(photo.full_src.is_none());
    }

    #[test]
    fn test_missing_photos_key_is_empty() {
        let data: PhotoData = serde_json::from_str("{}").unwrap();
        assert!(data.photos.is_empty());
    }

    #[test]
    fn test_media_item_derives_full_res_from_cdn() {
        let photo = Photo {
            id: Some("p1".into()),
            src: "https://res.cloudinary.com/d/image/upload/v1/a.jpg".into(),
            alt: "Dock".into(),
            year: Some("2021".into()),
            topic: Some("Street".into()),
            ..Default::default()
        };
        let item = photo.to_media_item();
        assert_eq!(item.id, "p1");
        assert_eq!(item.thumbnail_url, photo.src);
        assert!(item.full_res_url.contains("/upload/w_2048,f_auto,q_90/"));
        assert_eq!(item.category(facet::YEAR), Some("2021"));
        assert_eq!(item.category(facet::TOPIC), Some("Street"));
    }

    #[test]
    fn test_photos_without_source_are_skipped() {
        let json = r#"{"photos":[{"id":"a","src":null},{"id":"b","src":"b.jpg"}]}"#;
        let data: PhotoData = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = data.to_media_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_id_falls_back_to_src() {
        let photo = Photo {
            src: "b.jpg".into(),
            full_src: Some("b-full.jpg".into()),
            ..Default::default()
        };
        let item = photo.to_media_item();
        assert_eq!(item.id, "b.jpg");
        assert_eq!(item.full_res_url, "b-full.jpg");
    }
}
