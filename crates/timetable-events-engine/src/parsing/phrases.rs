use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::models::EventType;

use super::{kinds::FieldSeparator, span::Span};

/// The phrases the timetable uses to label each kind of session.
pub const LECTURE: &str = "лекции";
pub const SEMINAR: &str = "семинар";
pub const LAB: &str = "лабораторные занятия";

/// Longest accepted phrase, in characters.
pub const MAX_PHRASE_CHARS: usize = 256;

/// Compiled size cap for the phrase alternation.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Why a phrase table could not be built.
#[derive(Debug, thiserror::Error)]
pub enum PhraseError {
    #[error("type phrase is {chars} characters long, the limit is {limit}", limit = MAX_PHRASE_CHARS)]
    TooLong { chars: usize },
    #[error("type phrase table does not compile")]
    Pattern(#[from] regex::Error),
}

/// Mapping table from source phrases to [`EventType`] values.
///
/// The table compiles into a single alternation `(p1|p2|...)\.`, keeping table
/// order, so the leftmost phrase occurrence in a block wins.
#[derive(Debug, Clone)]
pub struct TypePhrases {
    entries: Vec<(String, EventType)>,
    pattern: Option<Regex>,
}

impl TypePhrases {
    /// Builds a table from `(phrase, kind)` pairs.
    ///
    /// Empty phrases are ignored. A phrase listed twice keeps its last kind.
    pub fn new<I, S>(entries: I) -> Result<Self, PhraseError>
    where
        I: IntoIterator<Item = (S, EventType)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, EventType)> = Vec::new();
        for (phrase, kind) in entries {
            let phrase = phrase.into();
            if phrase.is_empty() {
                continue;
            }
            let chars = phrase.chars().count();
            if chars > MAX_PHRASE_CHARS {
                return Err(PhraseError::TooLong { chars });
            }
            match table.iter_mut().find(|(p, _)| *p == phrase) {
                Some(existing) => existing.1 = kind,
                None => table.push((phrase, kind)),
            }
        }
        let pattern = compile(&table)?;
        Ok(Self {
            entries: table,
            pattern,
        })
    }

    /// Returns a copy of this table with one more phrase mapped to `kind`.
    pub fn with(self, phrase: impl Into<String>, kind: EventType) -> Result<Self, PhraseError> {
        let mut entries = self.entries;
        entries.push((phrase.into(), kind));
        Self::new(entries)
    }

    /// The shared default table.
    pub fn standard() -> &'static TypePhrases {
        static STANDARD: OnceLock<TypePhrases> = OnceLock::new();
        STANDARD.get_or_init(TypePhrases::default)
    }

    /// Looks up the kind for an exact phrase.
    pub fn kind_of(&self, phrase: &str) -> Option<EventType> {
        self.entries
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, k)| *k)
    }

    /// Finds the leftmost `phrase.` occurrence in `text`.
    ///
    /// The returned span covers the phrase and its closing period.
    pub fn find(&self, text: &str) -> Option<(Span, EventType)> {
        let caps = self.pattern.as_ref()?.captures(text)?;
        let full = caps.get(0)?;
        let kind = self.kind_of(caps.get(1)?.as_str())?;
        Some((Span::new(full.start(), full.end()), kind))
    }
}

impl Default for TypePhrases {
    fn default() -> Self {
        Self::new([
            (LECTURE, EventType::Lecture),
            (SEMINAR, EventType::Seminar),
            (LAB, EventType::Lab),
        ])
        .expect("built-in type phrases compile")
    }
}

fn compile(entries: &[(String, EventType)]) -> Result<Option<Regex>, regex::Error> {
    if entries.is_empty() {
        return Ok(None);
    }
    let alternation = entries
        .iter()
        .map(|(phrase, _)| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    let period = regex::escape(&FieldSeparator::PERIOD.to_string());
    let source = format!("({alternation}){period}");
    RegexBuilder::new(&source)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map(Some)
}
