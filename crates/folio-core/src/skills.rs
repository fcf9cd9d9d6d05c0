//! Skill extraction from work and project history for the word cloud.

use std::collections::HashMap;

use chrono::Datelike;

use crate::filter::parse_date;
use crate::records::PortfolioEntry;
use crate::wordcloud::{sort_by_weight, Word};

/// Most skills shown in the cloud
pub const MAX_SKILLS: usize = 50;

const WORK_TECH_WEIGHT: u32 = 3;
const WORK_LABEL_WEIGHT: u32 = 2;
const PROJECT_TECH_WEIGHT: u32 = 2;
const PROJECT_LABEL_WEIGHT: u32 = 1;

/// 100 for the current year, minus 15 per year back, never below 0.
///
/// Undated entries score 0. Future dates cap at 100.
pub fn recency(date_from: Option<&str>, current_year: i32) -> u32 {
    let Some(year) = date_from.and_then(parse_date).map(|d| d.year()) else {
        return 0;
    };
    let years_ago = i64::from(current_year) - i64::from(year);
    (100 - 15 * years_ago).clamp(0, 100) as u32
}

fn work_tech(entry: &PortfolioEntry) -> &[String] {
    &entry.tech_stack
}

fn project_tech(entry: &PortfolioEntry) -> &[String] {
    &entry.technologies
}

#[derive(Default)]
struct Tally {
    words: Vec<Word>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, term: &str, weight: u32, recency: u32) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        match self.index.get(term) {
            Some(&i) => {
                let word = &mut self.words[i];
                word.value += weight;
                word.recency = word.recency.max(recency);
            }
            None => {
                self.index.insert(term.to_string(), self.words.len());
                self.words.push(Word::new(term, weight, recency));
            }
        }
    }

    fn add_entries(
        &mut self,
        entries: &[PortfolioEntry],
        tech_of: fn(&PortfolioEntry) -> &[String],
        weights: (u32, u32),
        current_year: i32,
    ) {
        let (tech, label) = weights;
        for entry in entries {
            let r = recency(entry.date_from.as_deref(), current_year);
            for term in tech_of(entry) {
                self.add(term, tech, r);
            }
            for term in &entry.labels {
                self.add(term, label, r);
            }
        }
    }
}

/// Weighted skills across work and projects, heaviest first, at most
/// [`MAX_SKILLS`].
pub fn extract_skills(work: &[PortfolioEntry], projects: &[PortfolioEntry], current_year: i32) -> Vec<Word> {
    let mut tally = Tally::default();
    tally.add_entries(
        work,
        work_tech,
        (WORK_TECH_WEIGHT, WORK_LABEL_WEIGHT),
        current_year,
    );
    tally.add_entries(
        projects,
        project_tech,
        (PROJECT_TECH_WEIGHT, PROJECT_LABEL_WEIGHT),
        current_year,
    );

    let mut words = tally.words;
    sort_by_weight(&mut words);
    words.truncate(MAX_SKILLS);
    tracing::debug!(count = words.len(), "Extracted skills");
    words
}

/// Same as [`extract_skills`] using today's year
pub fn extract_skills_now(work: &[PortfolioEntry], projects: &[PortfolioEntry]) -> Vec<Word> {
    extract_skills(work, projects, chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: serde_json::Value) -> PortfolioEntry {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_recency_scale() {
        assert_eq!(recency(Some("2024-03"), 2024), 100);
        assert_eq!(recency(Some("2022"), 2024), 70);
        assert_eq!(recency(Some("2010-01-01"), 2024), 0);
        assert_eq!(recency(None, 2024), 0);
        assert_eq!(recency(Some("2030"), 2024), 100);
    }

    #[test]
    fn test_weights_and_max_recency() {
        let work = vec![entry(serde_json::json!({
            "title": "Engineer",
            "techStack": ["Rust", "React"],
            "labels": ["Backend"],
            "dateFrom": "2020"
        }))];
        let projects = vec![entry(serde_json::json!({
            "title": "Side project",
            "technologies": ["Rust"],
            "labels": ["Backend"],
            "dateFrom": "2024"
        }))];

        let skills = extract_skills(&work, &projects, 2024);
        let rust = skills.iter().find(|w| w.text == "Rust").unwrap();
        assert_eq!(rust.value, 5);
        assert_eq!(rust.recency, 100);

        let backend = skills.iter().find(|w| w.text == "Backend").unwrap();
        assert_eq!(backend.value, 3);

        let react = skills.iter().find(|w| w.text == "React").unwrap();
        assert_eq!(react.value, 3);
        assert_eq!(react.recency, 40);

        assert_eq!(skills[0].text, "Rust");
    }

    #[test]
    fn test_truncates_to_limit() {
        let techs: Vec<String> = (0..80).map(|i| format!("tool-{i}")).collect();
        let work = vec![entry(serde_json::json!({ "techStack": techs }))];
        assert_eq!(extract_skills(&work, &[], 2024).len(), MAX_SKILLS);
    }
}
