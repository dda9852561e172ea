//! Word cloud rendering
//!
//! Counts words in cleaned text, lays the most frequent ones out on a canvas
//! and renders the result as an SVG document through a Handlebars template.
//!
//! # Example
//!
//! ```
//! use feedback_analyzer::config::WordCloudConfig;
//! use feedback_analyzer::visualize::WordCloudRenderer;
//!
//! let renderer = WordCloudRenderer::new(WordCloudConfig::default()).unwrap();
//! let cloud = renderer.render("lab lab lecture slide", 100, None).unwrap();
//! assert_eq!(cloud.words[0].word, "lab");
//! assert!(cloud.svg.starts_with("<svg"));
//! ```

pub mod frequency;
pub mod layout;

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::WordCloudConfig;
use crate::error::{AnalyzerErrorTrait, ErrorCategory};
use crate::models::WordCount;

pub use frequency::{term_frequencies, word_frequencies, COLLOCATION_THRESHOLD};
pub use layout::{Layout, PlacedWord};

/// Default SVG template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/wordcloud.svg.hbs");

const TEMPLATE_NAME: &str = "wordcloud";

/// Behavior when the text contains no countable words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCloudPolicy {
    /// Render a blank canvas
    #[default]
    Blank,
    /// Fail with [`VisualizeError::NoWords`]
    Reject,
}

/// Word cloud errors
#[derive(Debug, Error)]
pub enum VisualizeError {
    #[error("No words to draw in the word cloud")]
    NoWords,

    #[error("Invalid word cloud settings: {0}")]
    InvalidConfig(String),

    #[error("Invalid word cloud template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Failed to render word cloud: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Failed to save word cloud to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerErrorTrait for VisualizeError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Save { .. })
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::NoWords => ErrorCategory::Input,
            Self::InvalidConfig(_) => ErrorCategory::Config,
            Self::Template(_) | Self::Render(_) => ErrorCategory::Rendering,
            Self::Save { .. } => ErrorCategory::Storage,
        }
    }
}

/// A rendered word cloud
#[derive(Debug, Clone, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: String,
    /// Words that made it onto the canvas, largest first
    pub words: Vec<PlacedWord>,
    /// Most frequent words considered for drawing
    pub frequencies: Vec<WordCount>,
    /// The SVG document
    pub svg: String,
}

impl WordCloud {
    /// Whether nothing was drawn
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// Write the SVG document, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), VisualizeError> {
        let save_err = |source| VisualizeError::Save {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(save_err)?;
        }
        fs::write(path, self.svg.as_bytes()).map_err(save_err)?;

        tracing::debug!(path = %path.display(), words = self.words.len(), "Saved word cloud");
        Ok(())
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    width: u32,
    height: u32,
    background: &'a str,
    font_family: &'a str,
    words: &'a [PlacedWord],
}

fn check_config(config: &WordCloudConfig) -> Result<(), VisualizeError> {
    config
        .validate()
        .map_err(|e| VisualizeError::InvalidConfig(format!("{e:#}")))
}

/// Renders word clouds with a fixed configuration
pub struct WordCloudRenderer {
    config: WordCloudConfig,
    handlebars: Handlebars<'static>,
}

impl WordCloudRenderer {
    /// Create a renderer with the built-in SVG template
    ///
    /// # Errors
    /// [`VisualizeError::InvalidConfig`] when the settings fail
    /// [`WordCloudConfig::validate`].
    pub fn new(config: WordCloudConfig) -> Result<Self, VisualizeError> {
        check_config(&config)?;
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;
        Ok(Self { config, handlebars })
    }

    /// Create a renderer with a custom SVG template file
    ///
    /// # Arguments
    /// * `config` - Canvas and layout settings
    /// * `template_path` - Handlebars template receiving `width`, `height`,
    ///   `background`, `font_family` and `words`
    pub fn with_template(config: WordCloudConfig, template_path: &Path) -> Result<Self, VisualizeError> {
        check_config(&config)?;
        let mut handlebars = Handlebars::new();
        handlebars.register_template_file(TEMPLATE_NAME, template_path)?;
        Ok(Self { config, handlebars })
    }

    #[must_use]
    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    /// Render a word cloud of `text`
    ///
    /// # Arguments
    /// * `text` - Space-separated cleaned words
    /// * `max_words` - Upper bound on the number of words drawn
    /// * `output_path` - Where to write the SVG; kept in memory when `None`
    ///
    /// # Errors
    /// [`VisualizeError::NoWords`] for text without countable words under
    /// [`EmptyCloudPolicy::Reject`], and template or I/O failures.
    pub fn render(
        &self,
        text: &str,
        max_words: usize,
        output_path: Option<&Path>,
    ) -> Result<WordCloud, VisualizeError> {
        let mut frequencies = if self.config.collocations {
            term_frequencies(text)
        } else {
            word_frequencies(text)
        };
        frequencies.truncate(max_words);

        if frequencies.is_empty() && self.config.empty_text == EmptyCloudPolicy::Reject {
            return Err(VisualizeError::NoWords);
        }

        let words = Layout::new(&self.config).place(&frequencies);
        let svg = self.handlebars.render(
            TEMPLATE_NAME,
            &TemplateData {
                width: self.config.width,
                height: self.config.height,
                background: &self.config.background_color,
                font_family: &self.config.font_family,
                words: &words,
            },
        )?;

        tracing::debug!(
            counted = frequencies.len(),
            placed = words.len(),
            "Rendered word cloud"
        );

        let cloud = WordCloud {
            width: self.config.width,
            height: self.config.height,
            background: self.config.background_color.clone(),
            words,
            frequencies,
            svg,
        };

        if let Some(path) = output_path {
            cloud.save(path)?;
        }
        Ok(cloud)
    }
}

impl std::fmt::Debug for WordCloudRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCloudRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
