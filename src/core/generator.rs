/// The headline generator — drawing, rendering, counting, recording.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::content::{ContentError, ContentSet};
use crate::core::history::HistoryLog;
use crate::schema::headline::{Headline, HistoryEntry, SubjectKind};

/// Composes headlines from validated content pools and records each one
/// in the session history. Built via `HeadlineGenerator::builder()`.
///
/// Subject selection is deliberately two-stage: a category is chosen
/// uniformly among the three kinds, then an entry uniformly within that
/// category. Categories of different sizes therefore carry equal weight,
/// which is NOT the same as a uniform draw over the union.
pub struct HeadlineGenerator {
    content: ContentSet,
    rng: StdRng,
    count: u64,
    started_at: DateTime<Local>,
    history: HistoryLog,
}

/// Builder for constructing a `HeadlineGenerator`.
pub struct HeadlineGeneratorBuilder {
    base: Option<ContentSet>,
    packs: Vec<PathBuf>,
    seed: Option<u64>,
}

impl HeadlineGenerator {
    pub fn builder() -> HeadlineGeneratorBuilder {
        HeadlineGeneratorBuilder {
            base: None,
            packs: Vec::new(),
            seed: None,
        }
    }

    /// Generate one headline.
    ///
    /// Side effects: increments the session counter by one and appends
    /// a timestamped history entry. Never fails — the pools were
    /// validated non-empty when the generator was built.
    pub fn generate(&mut self) -> Headline {
        let kind = SubjectKind::ALL[self.rng.gen_range(0..SubjectKind::ALL.len())];
        let subject = Self::pick(&mut self.rng, self.content.subject_pool(kind));
        let action = Self::pick(&mut self.rng, &self.content.actions);
        let place = Self::pick(&mut self.rng, &self.content.places);

        let template_idx = self.rng.gen_range(0..self.content.templates.len());
        let text = self.content.templates[template_idx].render(&subject, &action, &place);

        self.count += 1;
        self.history.append(HistoryEntry::new(text.clone()));
        debug!(count = self.count, kind = kind.label(), "generated headline");

        Headline {
            kind,
            subject,
            action,
            place,
            text,
        }
    }

    fn pick(rng: &mut StdRng, pool: &[String]) -> String {
        pool[rng.gen_range(0..pool.len())].clone()
    }

    /// Headlines generated this session. Reset only by process restart.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Clear the history log. The session counter is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    /// The footer stats line: count plus session-start timestamp.
    pub fn stats_line(&self) -> String {
        format!(
            "Headlines Generated: {} | Session Started: {}",
            self.count,
            self.started_at.format("%Y-%m-%d %H:%M")
        )
    }
}

impl HeadlineGeneratorBuilder {
    /// Replace the builtin base pack entirely.
    pub fn content(mut self, content: ContentSet) -> Self {
        self.base = Some(content);
        self
    }

    /// Queue a RON pack to merge onto the base at build time. May be
    /// called repeatedly; packs merge in the order given.
    pub fn content_pack(mut self, path: impl AsRef<Path>) -> Self {
        self.packs.push(path.as_ref().to_path_buf());
        self
    }

    /// Seed the RNG for deterministic output. Without a seed the
    /// generator draws from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<HeadlineGenerator, ContentError> {
        let mut content = self.base.unwrap_or_else(ContentSet::builtin);
        for path in &self.packs {
            let pack = ContentSet::load_from_ron(path)?;
            content.merge(pack);
        }
        content.validate()?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(HeadlineGenerator {
            content,
            rng,
            count: 0,
            started_at: Local::now(),
            history: HistoryLog::new(),
        })
    }
}
