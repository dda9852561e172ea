//! Word placement on the canvas
//!
//! Words are laid out largest first. Each word walks an Archimedean spiral
//! out from the canvas center until its bounding box overlaps nothing
//! already placed; if the spiral leaves the canvas, the font shrinks by one
//! and the walk restarts. Once a word no longer fits at the minimum font
//! size, placement ends.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::WordCloudConfig;
use crate::models::WordCount;

/// Glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Angle increment along the spiral, in radians
const SPIRAL_STEP: f64 = 0.1;

/// Spiral growth per radian, in pixels
const SPIRAL_GROWTH: f64 = 1.0;

/// A word positioned on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
    /// Center of the word's box
    pub x: f64,
    pub y: f64,
    /// Drawn rotated by 90 degrees
    pub vertical: bool,
    pub color: String,
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Box size of a word at a font size, margin included
fn word_box(word: &str, font_size: u32, margin: u32, vertical: bool) -> (f64, f64) {
    let font = f64::from(font_size);
    let margin = f64::from(margin);
    let w = (word.chars().count() as f64 * font * CHAR_WIDTH_RATIO).ceil() + 2.0 * margin;
    let h = font.ceil() + 2.0 * margin;
    if vertical {
        (h, w)
    } else {
        (w, h)
    }
}

/// Largest font size at which `word` fits the canvas at all
fn fitting_font_size(word: &str, config: &WordCloudConfig, vertical: bool) -> u32 {
    let chars = word.chars().count().max(1) as f64;
    let margin = 2.0 * f64::from(config.margin);
    let (along, across) = if vertical {
        (f64::from(config.height), f64::from(config.width))
    } else {
        (f64::from(config.width), f64::from(config.height))
    };
    let by_length = ((along - margin) / (chars * CHAR_WIDTH_RATIO)).floor();
    let by_height = (across - margin).floor();
    by_length.min(by_height).max(0.0) as u32
}

/// Lays out counted words for one render
pub struct Layout<'a> {
    config: &'a WordCloudConfig,
    rng: ChaCha8Rng,
    occupied: Vec<Rect>,
}

impl<'a> Layout<'a> {
    #[must_use]
    pub fn new(config: &'a WordCloudConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            occupied: Vec::new(),
        }
    }

    /// Place `words` (most frequent first)
    ///
    /// Font sizes follow the frequency ratio to the previous word, blended
    /// with the previous size by `relative_scaling`.
    pub fn place(mut self, words: &[WordCount]) -> Vec<PlacedWord> {
        let mut placed = Vec::with_capacity(words.len());
        let Some(max_count) = words.iter().map(|w| w.count).max().filter(|&c| c > 0) else {
            return placed;
        };

        let rs = self.config.relative_scaling;
        let mut font_size = self.config.effective_max_font_size();
        let mut last_freq = 1.0;

        for (i, entry) in words.iter().enumerate() {
            let freq = entry.count as f64 / max_count as f64;
            if i > 0 && rs > 0.0 {
                let scaled = (rs * (freq / last_freq) + (1.0 - rs)) * f64::from(font_size);
                font_size = scaled.round().max(0.0) as u32;
            }

            let vertical = self.rng.gen::<f64>() >= self.config.prefer_horizontal;
            let Some((size, vertical, rect)) = self.fit(&entry.word, font_size, vertical) else {
                tracing::debug!(
                    word = %entry.word,
                    placed = placed.len(),
                    "Word does not fit at minimum font size, stopping placement"
                );
                break;
            };

            let color = self
                .config
                .palette
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_else(|| String::from("black"));

            placed.push(PlacedWord {
                word: entry.word.clone(),
                count: entry.count,
                font_size: size,
                x: round1(rect.x + rect.w / 2.0),
                y: round1(rect.y + rect.h / 2.0),
                vertical,
                color,
            });

            font_size = size;
            last_freq = freq;
        }

        placed
    }

    /// Find a spot for `word`, shrinking the font as needed
    ///
    /// Tries the other orientation at each size when the preferred one is
    /// full. On success the word's box is recorded as occupied.
    fn fit(&mut self, word: &str, font_size: u32, vertical: bool) -> Option<(u32, bool, Rect)> {
        // A zero-pixel font never fits anything
        let min = self.config.min_font_size.max(1);
        let start = font_size.min(fitting_font_size(word, self.config, vertical).max(min));

        for size in (min..=start).rev() {
            for orientation in [vertical, !vertical] {
                if orientation && self.config.prefer_horizontal >= 1.0 {
                    continue;
                }
                if let Some(rect) = self.spiral_search(word, size, orientation) {
                    self.occupied.push(rect);
                    return Some((size, orientation, rect));
                }
            }
        }
        None
    }

    fn spiral_search(&mut self, word: &str, font_size: u32, vertical: bool) -> Option<Rect> {
        let (w, h) = word_box(word, font_size, self.config.margin, vertical);
        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        if w > width || h > height {
            return None;
        }

        let aspect = height / width;
        let start = self.rng.gen_range(0.0..std::f64::consts::TAU);
        let max_radius = width.hypot(height) / 2.0;

        let mut t = 0.0;
        loop {
            let r = SPIRAL_GROWTH * t;
            if r > max_radius {
                return None;
            }
            let angle = start + t;
            let cx = width / 2.0 + r * angle.cos();
            let cy = height / 2.0 + r * aspect * angle.sin();
            let rect = Rect {
                x: (cx - w / 2.0).round(),
                y: (cy - h / 2.0).round(),
                w,
                h,
            };

            let inside =
                rect.x >= 0.0 && rect.y >= 0.0 && rect.x + w <= width && rect.y + h <= height;
            if inside && !self.occupied.iter().any(|o| o.intersects(&rect)) {
                return Some(rect);
            }
            t += SPIRAL_STEP;
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
