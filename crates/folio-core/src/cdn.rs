//! Image CDN URL templating.
//!
//! The CDN serves resized variants when a transformation string is spliced
//! in after the `/upload/` path segment:
//!
//! ```text
//! https://res.cloudinary.com/demo/image/upload/v1/portfolio/a.jpg
//! https://res.cloudinary.com/demo/image/upload/w_400,f_auto,q_auto,c_fill,ar_1:1/v1/portfolio/a.jpg
//! ```
//!
//! URLs without that segment are passed through untouched.

use serde::{Deserialize, Serialize};

const UPLOAD_SEGMENT: &str = "/upload/";

/// Named resize presets used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    /// Square crop for gallery grids
    Thumbnail,
    /// Aspect-preserving preview
    Medium,
    /// Full-screen viewing
    High,
    /// Inline rendering on narrow viewports
    Mobile,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 4] = [
        ImageVariant::Thumbnail,
        ImageVariant::Medium,
        ImageVariant::High,
        ImageVariant::Mobile,
    ];

    /// Width used when the caller does not pick one
    pub fn default_width(self) -> u32 {
        match self {
            ImageVariant::Thumbnail => 400,
            ImageVariant::Medium => 1200,
            ImageVariant::High => 2048,
            ImageVariant::Mobile => 800,
        }
    }

    /// Transformation string for a given width
    pub fn transformation(self, width: u32) -> String {
        match self {
            ImageVariant::Thumbnail => format!("w_{},f_auto,q_auto,c_fill,ar_1:1", width),
            ImageVariant::Medium | ImageVariant::Mobile => format!("w_{},f_auto,q_auto", width),
            ImageVariant::High => format!("w_{},f_auto,q_90", width),
        }
    }

    /// Rewrite `url` to this variant at its default width
    pub fn apply(self, url: &str) -> String {
        self.apply_with_width(url, self.default_width())
    }

    pub fn apply_with_width(self, url: &str, width: u32) -> String {
        transform_url(url, &self.transformation(width))
    }
}

impl std::str::FromStr for ImageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thumbnail" | "thumb" => Ok(ImageVariant::Thumbnail),
            "medium" => Ok(ImageVariant::Medium),
            "high" | "hq" => Ok(ImageVariant::High),
            "mobile" => Ok(ImageVariant::Mobile),
            other => Err(format!(
                "unknown image variant '{}' (expected thumbnail, medium, high or mobile)",
                other
            )),
        }
    }
}

impl std::fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImageVariant::Thumbnail => "thumbnail",
            ImageVariant::Medium => "medium",
            ImageVariant::High => "high",
            ImageVariant::Mobile => "mobile",
        };
        f.write_str(name)
    }
}

/// Splice `transformation` in after the first `/upload/` segment.
///
/// Returns the URL unchanged when it is empty or has no upload segment.
pub fn transform_url(url: &str, transformation: &str) -> String {
    match url.find(UPLOAD_SEGMENT) {
        Some(pos) if !transformation.is_empty() => {
            let split = pos + UPLOAD_SEGMENT.len();
            format!("{}{}/{}", &url[..split], transformation, &url[split..])
        }
        _ => url.to_string(),
    }
}

/// Whether the URL points at the CDN's upload path
pub fn is_transformable(url: &str) -> bool {
    url.contains(UPLOAD_SEGMENT)
}

pub fn thumbnail_url(url: &str) -> String {
    ImageVariant::Thumbnail.apply(url)
}

pub fn medium_url(url: &str) -> String {
    ImageVariant::Medium.apply(url)
}

pub fn high_quality_url(url: &str) -> String {
    ImageVariant::High.apply(url)
}

pub fn mobile_url(url: &str) -> String {
    ImageVariant::Mobile.apply(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://res.cloudinary.com/demo/image/upload/v1712/portfolio/harbour.jpg";

    #[test]
    fn test_thumbnail_splices_after_upload() {
        assert_eq!(
            thumbnail_url(BASE),
            "https://res.cloudinary.com/demo/image/upload/w_400,f_auto,q_auto,c_fill,ar_1:1/v1712/portfolio/harbour.jpg"
        );
    }

    #[test]
    fn test_high_quality_and_medium() {
        assert!(high_quality_url(BASE).contains("/upload/w_2048,f_auto,q_90/v1712/"));
        assert!(medium_url(BASE).contains("/upload/w_1200,f_auto,q_auto/v1712/"));
        assert!(mobile_url(BASE).contains("/upload/w_800,f_auto,q_auto/v1712/"));
    }

    #[test]
    fn test_custom_width() {
        let url = ImageVariant::Thumbnail.apply_with_width(BASE, 250);
        assert!(url.contains("/upload/w_250,f_auto,q_auto,c_fill,ar_1:1/"));
    }

    #[test]
    fn test_non_cdn_url_unchanged() {
        let local = "/images/photo.jpg";
        assert_eq!(thumbnail_url(local), local);
        assert_eq!(thumbnail_url(""), "");
        assert!(!is_transformable(local));
    }

    #[test]
    fn test_only_first_segment_rewritten() {
        let url = "https://cdn.example.com/upload/a/upload/b.jpg";
        assert_eq!(
            transform_url(url, "w_10"),
            "https://cdn.example.com/upload/w_10/a/upload/b.jpg"
        );
    }

    #[test]
    fn test_empty_transformation_is_identity() {
        assert_eq!(transform_url(BASE, ""), BASE);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("thumb".parse::<ImageVariant>(), Ok(ImageVariant::Thumbnail));
        assert_eq!("HQ".parse::<ImageVariant>(), Ok(ImageVariant::High));
        assert!("poster".parse::<ImageVariant>().is_err());
        for variant in ImageVariant::ALL {
            assert_eq!(variant.to_string().parse::<ImageVariant>(), Ok(variant));
        }
    }
}
