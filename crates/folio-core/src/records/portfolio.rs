//! Work, project and education entries.
//!
//! All three endpoints share one loose shape; which collection an entry came
//! from is recorded in [`EntryKind`] after fetching.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_string, lenient_strings, lenient_text, string_only};
use crate::filter::{value_text, Searchable};
use crate::slug::slugify;
use crate::types::{facet, Identified};

/// Which collection an entry was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Work,
    Project,
    Education,
}

/// External media link attached to an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaLink {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    pub url: String,
}

/// Media arrays hold either `{name, url}` objects or bare URL strings.
fn lenient_media<'de, D>(deserializer: D) -> Result<Vec<MediaLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(values) = value else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(url) => Some(MediaLink {
                name: String::new(),
                url,
            }),
            other => serde_json::from_value::<MediaLink>(other).ok(),
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    /// Slug-like identifier; `title` is slugged when absent
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// CDN folder holding the entry's images
    #[serde(default, deserialize_with = "lenient_text")]
    pub images_path: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// Only strings count; `null` or other shapes mean no company
    #[serde(default, deserialize_with = "string_only")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub details: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub features: Vec<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_until: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_media")]
    pub media: Vec<MediaLink>,
    /// Keys this type does not model, kept for search
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
    #[serde(skip)]
    pub kind: EntryKind,
}

impl PortfolioEntry {
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    /// URL slug for the entry's detail page
    pub fn slug(&self) -> String {
        if self.name.is_empty() {
            slugify(&self.title)
        } else {
            slugify(&self.name)
        }
    }

    /// Route of the detail page: `/work/{company}/{title}` or `/projects/{title}`
    pub fn detail_path(&self) -> String {
        match (self.kind, self.company.as_deref()) {
            (EntryKind::Work, Some(company)) => {
                format!("/work/{}/{}", slugify(company), slugify(&self.title))
            }
            (EntryKind::Education, _) => format!("/education/{}", self.slug()),
            _ => format!("/projects/{}", self.slug()),
        }
    }

    /// Technologies under whichever key the collection uses
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.tech_stack
            .iter()
            .chain(self.technologies.iter())
            .map(String::as_str)
    }

    /// Year the entry started, taken from `dateFrom`
    pub fn year(&self) -> Option<String> {
        self.date_from
            .as_deref()
            .and_then(crate::filter::parse_date)
            .map(|d| d.format("%Y").to_string())
    }

    /// Who the entry was with, as listed on the timeline
    pub fn organization(&self) -> String {
        match (self.kind, self.company.as_deref()) {
            (EntryKind::Project, _) => "Personal Project".to_string(),
            (_, Some(company)) if !company.is_empty() => company.to_string(),
            (EntryKind::Work, _) => "Unknown Company".to_string(),
            (EntryKind::Education, _) => "Unknown Institution".to_string(),
        }
    }

    /// One-paragraph description: the summary, else the joined details for
    /// work, else a placeholder for the kind.
    pub fn description(&self) -> String {
        if let Some(summary) = self.summary.as_deref().filter(|s| !s.is_empty()) {
            return summary.to_string();
        }
        match self.kind {
            EntryKind::Work if !self.details.is_empty() => self.details.join(". "),
            EntryKind::Work => "Work experience".to_string(),
            EntryKind::Project => "Personal project exploration".to_string(),
            EntryKind::Education => "Education program".to_string(),
        }
    }

    /// Year shown beside the entry on the timeline: when it ended, or when
    /// it started if it has no end date.
    pub fn milestone_year(&self) -> Option<String> {
        self.date_until
            .as_deref()
            .and_then(crate::filter::parse_date)
            .map(|d| d.format("%Y").to_string())
            .or_else(|| self.year())
    }

    /// "2021 – 2023", "2021 – present" or just "2021"
    pub fn period(&self) -> String {
        let from = self.year().unwrap_or_default();
        let until = self
            .date_until
            .as_deref()
            .and_then(crate::filter::parse_date)
            .map(|d| d.format("%Y").to_string());
        match until {
            Some(until) if until != from => format!("{} – {}", from, until),
            Some(_) => from,
            None if self.date_until.as_deref() == Some("present") => format!("{} – present", from),
            None => from,
        }
    }
}

fn push_opt(texts: &mut Vec<String>, value: &Option<String>) {
    if let Some(v) = value {
        texts.push(v.clone());
    }
}

fn push_list(texts: &mut Vec<String>, values: &[String]) {
    if !values.is_empty() {
        texts.push(values.join(" "));
    }
}

impl Searchable for PortfolioEntry {
    fn search_texts(&self) -> Vec<String> {
        let mut texts = vec![self.name.clone(), self.images_path.clone(), self.title.clone()];
        push_opt(&mut texts, &self.company);
        push_opt(&mut texts, &self.summary);
        push_list(&mut texts, &self.details);
        push_list(&mut texts, &self.tech_stack);
        push_list(&mut texts, &self.technologies);
        push_list(&mut texts, &self.features);
        push_opt(&mut texts, &self.entry_type);
        push_list(&mut texts, &self.labels);
        push_opt(&mut texts, &self.date_from);
        push_opt(&mut texts, &self.date_until);
        push_opt(&mut texts, &self.url);
        push_opt(&mut texts, &self.github);
        push_list(&mut texts, &self.images);
        if !self.media.is_empty() {
            let urls: Vec<&str> = self.media.iter().map(|m| m.url.as_str()).collect();
            texts.push(urls.join(" "));
        }
        texts.extend(self.extra.values().filter_map(value_text));
        texts
    }

    fn category(&self, facet_name: &str) -> Option<Cow<'_, str>> {
        match facet_name {
            facet::YEAR => self.year().map(Cow::Owned),
            facet::TOPIC | "type" => self.entry_type.as_deref().map(Cow::Borrowed),
            "company" => self.company.as_deref().map(Cow::Borrowed),
            "kind" => Some(Cow::Borrowed(match self.kind {
                EntryKind::Work => "work",
                EntryKind::Project => "project",
                EntryKind::Education => "education",
            })),
            other => self.extra.get(other).and_then(Value::as_str).map(Cow::Borrowed),
        }
    }

    fn date_key(&self) -> Option<&str> {
        self.date_from.as_deref()
    }
}

impl Identified for PortfolioEntry {
    fn id(&self) -> &str {
        if self.name.is_empty() {
            &self.title
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matches_query;

    fn entry(json: &str) -> PortfolioEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defensive_defaults() {
        let e = entry(r#"{"title":"Site","company":null,"details":"not a list","labels":["a",3,"b"]}"#);
        assert_eq!(e.company, None);
        assert!(e.details.is_empty());
        assert_eq!(e.labels, vec!["a", "3", "b"]);
        assert!(e.summary.is_none());
    }

    #[test]
    fn test_numeric_fields_are_searchable() {
        let e = entry(r#"{"title":"Bridge","summary":2020,"labels":[2023,"web"],"dateFrom":2021}"#);
        assert_eq!(e.summary.as_deref(), Some("2020"));
        assert_eq!(e.labels, vec!["2023", "web"]);
        assert_eq!(e.category(facet::YEAR).as_deref(), Some("2021"));
        for query in ["2020", "2023", "2021", "bridge"] {
            assert!(matches_query(&e, query), "no match for {}", query);
        }
    }

    #[test]
    fn test_media_accepts_objects_and_strings() {
        let e = entry(r#"{"title":"X","media":[{"name":"Demo","url":"https://a"},"https://b",5]}"#);
        assert_eq!(e.media.len(), 2);
        assert_eq!(e.media[0].name, "Demo");
        assert_eq!(e.media[1].url, "https://b");
    }

    #[test]
    fn test_unknown_keys_are_searchable() {
        let e = entry(r#"{"title":"X","client":"Acme Corp"}"#);
        assert!(matches_query(&e, "acme"));
        assert_eq!(e.category("client").as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_detail_paths() {
        let work = entry(r#"{"title":"Autopilot UI","company":"Tesla"}"#).with_kind(EntryKind::Work);
        assert_eq!(work.detail_path(), "/work/tesla/autopilot-ui");

        let project = entry(r#"{"title":"Word Cloud Lab"}"#).with_kind(EntryKind::Project);
        assert_eq!(project.detail_path(), "/projects/word-cloud-lab");

        let named = entry(r#"{"name":"casa-ato","title":"Casa ATO"}"#).with_kind(EntryKind::Project);
        assert_eq!(named.slug(), "casa-ato");
        assert_eq!(named.id(), "casa-ato");
    }

    #[test]
    fn test_year_and_period() {
        let e = entry(r#"{"title":"X","dateFrom":"2021-04","dateUntil":"2023"}"#);
        assert_eq!(e.year().as_deref(), Some("2021"));
        assert_eq!(e.period(), "2021 – 2023");
        assert_eq!(e.category(facet::YEAR).as_deref(), Some("2021"));

        let ongoing = entry(r#"{"title":"X","dateFrom":"2024","dateUntil":"present"}"#);
        assert_eq!(ongoing.period(), "2024 – present");
    }

    #[test]
    fn test_timeline_labels() {
        let work = entry(r#"{"title":"X","details":["Led team","Shipped app"],"dateFrom":"2019","dateUntil":"2022-06"}"#)
            .with_kind(EntryKind::Work);
        assert_eq!(work.organization(), "Unknown Company");
        assert_eq!(work.description(), "Led team. Shipped app");
        assert_eq!(work.milestone_year().as_deref(), Some("2022"));

        let project = entry(r#"{"title":"Y","company":"Acme","dateFrom":"2023","dateUntil":"present"}"#)
            .with_kind(EntryKind::Project);
        assert_eq!(project.organization(), "Personal Project");
        assert_eq!(project.description(), "Personal project exploration");
        assert_eq!(project.milestone_year().as_deref(), Some("2023"));

        let study = entry(r#"{"title":"Z","company":"TU Delft","summary":"MSc"}"#)
            .with_kind(EntryKind::Education);
        assert_eq!(study.organization(), "TU Delft");
        assert_eq!(study.description(), "MSc");
        assert_eq!(study.milestone_year(), None);
    }

    #[test]
    fn test_skills_merge_both_keys() {
        let e = entry(r#"{"title":"X","techStack":["React"],"technologies":["Rust"]}"#);
        let skills: Vec<&str> = e.skills().collect();
        assert_eq!(skills, vec!["React", "Rust"]);
    }
}
