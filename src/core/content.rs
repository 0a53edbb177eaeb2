/// Content pools — the fixed string pools headlines are drawn from.
///
/// A `ContentSet` is assembled at startup (builtin pack plus any RON
/// packs merged on top), validated once, and never mutated afterwards.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::template::{Template, TemplateError};
use crate::schema::headline::SubjectKind;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("pool '{0}' is empty")]
    EmptyPool(&'static str),
    #[error("bad template {text:?}: {source}")]
    BadTemplate {
        text: String,
        source: TemplateError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// The six ordered pools a headline is composed from. The three subject
/// pools are disjoint categories drawn with equal weight.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub celebrities: Vec<String>,
    pub fictional: Vec<String>,
    pub concepts: Vec<String>,
    pub actions: Vec<String>,
    pub places: Vec<String>,
    pub templates: Vec<Template>,
}

// RON pack shape. Every pool defaults to empty so a pack can extend
// just the pools it cares about; templates arrive as raw format strings
// and are parsed at the load boundary.
#[derive(Debug, Deserialize)]
struct RonPack {
    #[serde(default)]
    celebrities: Vec<String>,
    #[serde(default)]
    fictional: Vec<String>,
    #[serde(default)]
    concepts: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    places: Vec<String>,
    #[serde(default)]
    templates: Vec<String>,
}

const BUILTIN_PACK: &str = include_str!("../../content/classic.ron");

impl ContentSet {
    /// The compiled-in default pack. Kept valid by a unit test; the
    /// source of truth is `content/classic.ron`, embedded at build time.
    pub fn builtin() -> ContentSet {
        Self::parse_ron(BUILTIN_PACK).expect("builtin content pack is valid")
    }

    /// Load a content pack from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ContentSet, ContentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a content pack from a RON string.
    pub fn parse_ron(input: &str) -> Result<ContentSet, ContentError> {
        let raw: RonPack = ron::from_str(input)?;

        let mut templates = Vec::with_capacity(raw.templates.len());
        for text in raw.templates {
            let template = Template::parse(&text)
                .map_err(|source| ContentError::BadTemplate { text, source })?;
            templates.push(template);
        }

        Ok(ContentSet {
            celebrities: raw.celebrities,
            fictional: raw.fictional,
            concepts: raw.concepts,
            actions: raw.actions,
            places: raw.places,
            templates,
        })
    }

    /// Merge another pack into this one by appending its entries.
    /// Composition happens at load time only; pools are immutable once
    /// a generator is built on top of them.
    pub fn merge(&mut self, other: ContentSet) {
        self.celebrities.extend(other.celebrities);
        self.fictional.extend(other.fictional);
        self.concepts.extend(other.concepts);
        self.actions.extend(other.actions);
        self.places.extend(other.places);
        self.templates.extend(other.templates);
    }

    /// Fail-fast startup assertion: every pool must be non-empty, so
    /// selection can never observe an unselectable pool at runtime.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (name, len) in [
            ("celebrities", self.celebrities.len()),
            ("fictional", self.fictional.len()),
            ("concepts", self.concepts.len()),
            ("actions", self.actions.len()),
            ("places", self.places.len()),
            ("templates", self.templates.len()),
        ] {
            if len == 0 {
                return Err(ContentError::EmptyPool(name));
            }
        }
        Ok(())
    }

    /// The subject sub-pool for a category.
    pub fn subject_pool(&self, kind: SubjectKind) -> &[String] {
        match kind {
            SubjectKind::Celebrity => &self.celebrities,
            SubjectKind::Fictional => &self.fictional,
            SubjectKind::Concept => &self.concepts,
        }
    }

    /// Total number of distinct subject entries across all categories.
    pub fn subject_union_len(&self) -> usize {
        self.celebrities.len() + self.fictional.len() + self.concepts.len()
    }
}
