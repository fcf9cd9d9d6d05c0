//! Blog records. The backend renders post bodies to HTML.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{lenient_string, lenient_strings, lenient_text};
use crate::filter::Searchable;
use crate::types::{facet, Identified};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(flatten)]
    pub summary: BlogPostSummary,
    /// Backend-rendered HTML
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

impl BlogPostSummary {
    /// Date as shown in listings, e.g. "March 4, 2024"
    pub fn display_date(&self) -> String {
        self.date
            .as_deref()
            .and_then(crate::filter::parse_date)
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Searchable for BlogPostSummary {
    fn search_texts(&self) -> Vec<String> {
        let mut texts = vec![self.slug.clone(), self.title.clone(), self.excerpt.clone()];
        if let Some(date) = &self.date {
            texts.push(date.clone());
        }
        if !self.tags.is_empty() {
            texts.push(self.tags.join(" "));
        }
        texts
    }

    /// Only `year` is a single-valued facet. Posts carry several tags, so tag
    /// filtering goes through [`BlogPostSummary::has_tag`].
    fn category(&self, facet_name: &str) -> Option<Cow<'_, str>> {
        match facet_name {
            facet::YEAR => self
                .date
                .as_deref()
                .and_then(crate::filter::parse_date)
                .map(|d| Cow::Owned(d.format("%Y").to_string())),
            _ => None,
        }
    }

    fn date_key(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Identified for BlogPostSummary {
    fn id(&self) -> &str {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_flattens_summary() {
        let json = r#"{"slug":"hello","title":"Hello","date":"2024-03-04","tags":["rust"],"content":"<p>Hi</p>"}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.summary.slug, "hello");
        assert_eq!(post.content, "<p>Hi</p>");
        assert_eq!(post.summary.display_date(), "March 4, 2024");
        assert!(post.summary.has_tag("Rust"));
    }

    #[test]
    fn test_year_facet() {
        let summary = BlogPostSummary {
            slug: "a".into(),
            date: Some("2022-10-01".into()),
            ..Default::default()
        };
        assert_eq!(summary.category(facet::YEAR).as_deref(), Some("2022"));
        assert_eq!(summary.category(facet::TAG), None);
    }
}
