//! Word-cloud weighting and layout order.

use std::cmp::Ordering;

pub const MIN_FONT_PX: f64 = 14.0;
pub const MAX_FONT_PX: f64 = 52.0;
pub const MIN_OPACITY: f64 = 0.5;
pub const MAX_OPACITY: f64 = 1.0;

/// A term with its occurrence score and recency (0-100).
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub value: u32,
    pub recency: u32,
}

impl Word {
    pub fn new(text: impl Into<String>, value: u32, recency: u32) -> Self {
        Self {
            text: text.into(),
            value,
            recency,
        }
    }

    /// `value` scaled by `1 + recency / 100`
    pub fn weighted_value(&self) -> f64 {
        f64::from(self.value) * (1.0 + f64::from(self.recency) / 100.0)
    }
}

/// A word with its computed styling.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub word: Word,
    pub weighted: f64,
    pub font_size_px: f64,
    pub opacity: f64,
    pub font_weight: u16,
}

/// Order heaviest first; ties keep input order
pub fn sort_by_weight(words: &mut [Word]) {
    words.sort_by(|a, b| {
        b.weighted_value()
            .partial_cmp(&a.weighted_value())
            .unwrap_or(Ordering::Equal)
    });
}

/// Style and order `words` for display.
///
/// Words are ranked by weighted value, split into high, medium and low
/// thirds, then interleaved so large and small words mix.
pub fn layout(words: &[Word]) -> Vec<CloudWord> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut ranked = words.to_vec();
    sort_by_weight(&mut ranked);

    let weights: Vec<f64> = ranked.iter().map(Word::weighted_value).collect();
    let max = weights.iter().copied().fold(f64::MIN, f64::max);
    let min = weights.iter().copied().fold(f64::MAX, f64::min);
    let ratio = |w: f64| {
        if max > min {
            (w - min) / (max - min)
        } else {
            0.5
        }
    };

    let n = ranked.len();
    let first_cut = n.div_ceil(3);
    let second_cut = (n * 2).div_ceil(3);
    let (high, rest) = ranked.split_at(first_cut);
    let (medium, low) = rest.split_at(second_cut - first_cut);

    let mut ordered = Vec::with_capacity(n);
    for i in 0..high.len().max(medium.len()).max(low.len()) {
        for tier in [high, medium, low] {
            if let Some(word) = tier.get(i) {
                ordered.push(word.clone());
            }
        }
    }

    ordered
        .into_iter()
        .map(|word| {
            let weighted = word.weighted_value();
            let r = ratio(weighted);
            CloudWord {
                font_size_px: (MIN_FONT_PX + r * (MAX_FONT_PX - MIN_FONT_PX)).clamp(MIN_FONT_PX, MAX_FONT_PX),
                opacity: (MIN_OPACITY + r * (MAX_OPACITY - MIN_OPACITY)).max(MIN_OPACITY),
                font_weight: if weighted > max * 0.7 {
                    600
                } else if weighted > max * 0.4 {
                    500
                } else {
                    400
                },
                weighted,
                word,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_multiplier() {
        assert_eq!(Word::new("Rust", 4, 0).weighted_value(), 4.0);
        assert_eq!(Word::new("Rust", 4, 100).weighted_value(), 8.0);
        assert_eq!(Word::new("Rust", 2, 50).weighted_value(), 3.0);
    }

    #[test]
    fn test_interleaves_thirds() {
        let words: Vec<Word> = (1..=6).rev().map(|v| Word::new(format!("w{v}"), v, 0)).collect();
        let order: Vec<String> = layout(&words).into_iter().map(|c| c.word.text).collect();
        // high = w6 w5, medium = w4 w3, low = w2 w1
        assert_eq!(order, vec!["w6", "w4", "w2", "w5", "w3", "w1"]);
    }

    #[test]
    fn test_font_and_opacity_bounds() {
        let words = vec![Word::new("big", 10, 100), Word::new("small", 1, 0)];
        let cloud = layout(&words);
        let big = cloud.iter().find(|c| c.word.text == "big").unwrap();
        let small = cloud.iter().find(|c| c.word.text == "small").unwrap();
        assert_eq!(big.font_size_px, MAX_FONT_PX);
        assert_eq!(big.opacity, MAX_OPACITY);
        assert_eq!(big.font_weight, 600);
        assert_eq!(small.font_size_px, MIN_FONT_PX);
        assert_eq!(small.opacity, MIN_OPACITY);
        assert_eq!(small.font_weight, 400);
    }

    #[test]
    fn test_uniform_weights_use_midpoint() {
        let words = vec![Word::new("a", 3, 0), Word::new("b", 3, 0)];
        for word in layout(&words) {
            assert_eq!(word.font_size_px, 33.0);
            assert_eq!(word.opacity, 0.75);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(layout(&[]).is_empty());
    }
}
