use std::collections::HashMap;

/// Review state of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    /// Reviewed translation; served by lookup.
    Finished,
    /// Draft translation; still served by lookup.
    Unfinished,
    /// The source string no longer exists in the editor. Kept for
    /// translators, never served at runtime.
    Vanished,
}

impl EntryStatus {
    /// Whether entries with this status participate in lookup.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Vanished)
    }
}

/// Provenance hint: where the source string appears in the editor code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

/// One `(context, source, disambiguation)` -> translation mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationEntry {
    /// Owning dialog/class name, e.g. `"ChangeDialogIdDialog"`.
    pub context: String,
    /// Canonical untranslated text. Case- and whitespace-significant;
    /// multi-line dialog messages embed newlines.
    pub source_text: String,
    /// Distinguishes identical source texts within one context
    /// (e.g. `"resource_type"` vs `"resource_element"` for `"Map"`).
    pub disambiguation: Option<String>,
    /// Localized text; may contain positional `%N` markers.
    pub translation_text: String,
    pub status: EntryStatus,
    /// Informational only; not used at runtime.
    pub locations: Vec<Location>,
    /// Translator guidance from the catalog; not used at runtime.
    pub translator_note: Option<String>,
}

impl TranslationEntry {
    pub(crate) fn key(&self) -> MessageKey {
        MessageKey {
            context: self.context.clone(),
            source_text: self.source_text.clone(),
            disambiguation: self.disambiguation.clone(),
        }
    }
}

/// Flat lookup key. The nested context/message structure of the catalog
/// file is irrelevant after load, so the index is a single map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source_text: String,
    pub disambiguation: Option<String>,
}

/// An immutable set of translations for one locale.
///
/// Entries are kept in document order (including vanished ones, for
/// audit); lookup goes through a flat index over active entries only.
/// Once built the catalog never mutates, so it is safely shared across
/// threads by reference; a locale switch builds a new catalog and swaps
/// it in wholesale.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    locale: String,
    entries: Vec<TranslationEntry>,
    index: HashMap<MessageKey, usize>,
}

impl Catalog {
    /// Create an empty catalog for a locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The locale tag declared by the catalog, e.g. `"es_ES"`.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Append an entry. Active entries with the same key overwrite the
    /// previous index slot (last-write-wins); hand-edited catalogs do
    /// contain redundant entries.
    pub fn push_entry(&mut self, entry: TranslationEntry) {
        if entry.status.is_active() {
            self.index.insert(entry.key(), self.entries.len());
        }
        self.entries.push(entry);
    }

    /// Look up the active entry for an exact `(context, source,
    /// disambiguation)` key. Unfinished entries are returned too;
    /// vanished ones never are.
    pub fn entry(
        &self,
        context: &str,
        source_text: &str,
        disambiguation: Option<&str>,
    ) -> Option<&TranslationEntry> {
        let key = MessageKey {
            context: context.to_string(),
            source_text: source_text.to_string(),
            disambiguation: disambiguation.map(str::to_string),
        };
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Resolve a source text to its translation.
    ///
    /// Falls back to `source_text` unchanged when there is no active
    /// match or the stored translation is empty: the UI must always
    /// show something readable. Matching is exact: case-sensitive,
    /// whitespace-sensitive, no trimming.
    pub fn lookup<'a>(
        &'a self,
        context: &str,
        source_text: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        match self.entry(context, source_text, disambiguation) {
            Some(e) if !e.translation_text.is_empty() => &e.translation_text,
            _ => source_text,
        }
    }

    /// All entries in document order, vanished ones included.
    pub fn entries(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.iter()
    }

    /// Total number of entries, vanished ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-status counts, overall and per context. Contexts are sorted
    /// by name for deterministic output.
    pub fn stats(&self) -> CatalogStats {
        let mut by_context: HashMap<&str, ContextStats> = HashMap::new();
        let mut totals = CatalogStats::default();

        for entry in &self.entries {
            let ctx = by_context
                .entry(entry.context.as_str())
                .or_insert_with(|| ContextStats {
                    context: entry.context.clone(),
                    ..ContextStats::default()
                });
            ctx.total += 1;
            totals.total += 1;
            match entry.status {
                EntryStatus::Finished => {
                    ctx.finished += 1;
                    totals.finished += 1;
                }
                EntryStatus::Unfinished => {
                    ctx.unfinished += 1;
                    totals.unfinished += 1;
                }
                EntryStatus::Vanished => {
                    ctx.vanished += 1;
                    totals.vanished += 1;
                }
            }
        }

        let mut contexts: Vec<ContextStats> = by_context.into_values().collect();
        contexts.sort_unstable_by(|a, b| a.context.cmp(&b.context));
        totals.contexts = contexts;
        totals
    }
}

/// Translation progress report for a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    /// Per-context breakdown, sorted by context name.
    pub contexts: Vec<ContextStats>,
}

/// Per-context translation progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextStats {
    pub context: String,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}
