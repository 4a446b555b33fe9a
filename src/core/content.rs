//! # Content Lookup
//!
//! The static tip table: sections, items, and expanded details, plus the
//! derived read-only views the renderer works from. Nothing here mutates
//! after load — the only runtime state in the app lives in
//! [`selection`](crate::core::selection).
//!
//! Items carry a stable id decoupled from their display text, and details
//! are keyed by that id. `validate()` checks the two tables against each
//! other once at load time: duplicate ids are errors, a detail that
//! references no item or an item with no detail is tolerated (and
//! reported) — rendering simply omits the expansion.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod builtin;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier of a section (a short slug, e.g. `"search-nav"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of an item, unique across the whole content set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A named, iconed grouping of items. Declaration order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub icon: String,
    pub items: Vec<Item>,
}

/// A single quick-tip entry belonging to one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display label shown in the card row.
    pub text: String,
    /// One-line summary shown on hover.
    pub tip: String,
    /// Marks items introduced by the latest upgrade (renders a badge).
    #[serde(default)]
    pub new_feature: bool,
}

/// Expanded explanatory content for one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    pub what: String,
    pub when: String,
    /// Keyboard shortcut chips; empty when none is noted.
    #[serde(default)]
    pub shortcut: Vec<String>,
    /// Raw step lines, optionally tagged by a leading marker
    /// (`→` continuation, `✓` confirmation, `♦` tip).
    pub steps: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

// ============================================================================
// Step render plan
// ============================================================================

/// Category of one step line, derived from its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Untagged line — gets a 1-based sequence number.
    Main,
    /// `→` — indented continuation of the previous main step.
    Continuation,
    /// `✓` — terminal confirmation.
    Confirmation,
    /// `♦` — side tip.
    Tip,
}

/// One step as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep<'a> {
    pub kind: StepKind,
    /// Set for `Main` steps only: count of prior main steps + 1.
    pub number: Option<usize>,
    /// Step text with the marker stripped.
    pub text: &'a str,
}

/// Compute the render plan for a detail's step list.
///
/// Pure derivation — numbering is recomputed from scratch on every call,
/// never stored, since steps are immutable per detail.
pub fn step_plan(detail: &Detail) -> Vec<PlannedStep<'_>> {
    let mut main_count = 0usize;
    detail
        .steps
        .iter()
        .map(|raw| {
            let (kind, text) = classify_step(raw);
            let number = match kind {
                StepKind::Main => {
                    main_count += 1;
                    Some(main_count)
                }
                _ => None,
            };
            PlannedStep { kind, number, text }
        })
        .collect()
}

fn classify_step(raw: &str) -> (StepKind, &str) {
    if let Some(rest) = raw.strip_prefix('→') {
        (StepKind::Continuation, rest.trim_start())
    } else if let Some(rest) = raw.strip_prefix('✓') {
        (StepKind::Confirmation, rest.trim_start())
    } else if let Some(rest) = raw.strip_prefix('♦') {
        (StepKind::Tip, rest.trim_start())
    } else {
        (StepKind::Main, raw)
    }
}

// ============================================================================
// Content set
// ============================================================================

/// The whole static content table: ordered sections plus the
/// detail-by-item-id mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSet {
    pub title: String,
    pub subtitle: String,
    sections: Vec<Section>,
    details: HashMap<ItemId, Detail>,
}

impl ContentSet {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        sections: Vec<Section>,
        details: HashMap<ItemId, Detail>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            sections,
            details,
        }
    }

    /// All sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections the view should show: all of them when nothing is
    /// selected, only the selected one otherwise.
    pub fn visible_sections(&self, selected: Option<&SectionId>) -> Vec<&Section> {
        match selected {
            None => self.sections.iter().collect(),
            Some(id) => self.sections.iter().filter(|s| &s.id == id).collect(),
        }
    }

    /// Expanded detail for an item, or `None` — absence is legitimate and
    /// renders as "no expansion", never as an error.
    pub fn detail_for(&self, item: &ItemId) -> Option<&Detail> {
        self.details.get(item)
    }

    /// Resolve the section an item belongs to. Ownership is by containment
    /// in the section's item list.
    pub fn section_of(&self, item: &ItemId) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.items.iter().any(|i| &i.id == item))
    }

    /// Look up an item record by id.
    pub fn item(&self, item: &ItemId) -> Option<&Item> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| &i.id == item)
    }

    /// Cross-check the section and detail tables.
    ///
    /// Duplicate item ids break the closed key space and are hard errors.
    /// Orphan details and detail-less items are allowed; they come back as
    /// warnings for the caller to log.
    pub fn validate(&self) -> Result<Vec<String>, ContentError> {
        let mut seen: HashMap<&ItemId, &SectionId> = HashMap::new();
        for section in &self.sections {
            for item in &section.items {
                if seen.insert(&item.id, &section.id).is_some() {
                    return Err(ContentError::DuplicateItem(item.id.clone()));
                }
            }
        }

        let mut warnings = Vec::new();
        for id in self.details.keys() {
            if !seen.contains_key(id) {
                warnings.push(format!("detail '{id}' references no item"));
            }
        }
        for section in &self.sections {
            for item in &section.items {
                if !self.details.contains_key(&item.id) {
                    warnings.push(format!(
                        "item '{}' ({}) has no expanded detail",
                        item.id, section.id
                    ));
                }
            }
        }
        Ok(warnings)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateItem(ItemId),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "content parse error: {e}"),
            ContentError::DuplicateItem(id) => {
                write!(f, "duplicate item id '{id}' in content table")
            }
        }
    }
}

impl std::error::Error for ContentError {}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate an alternate content table from a TOML file.
///
/// The file mirrors [`ContentSet`]: `title`, `subtitle`, `[[sections]]`
/// with nested `[[sections.items]]`, and one `[details.<item-id>]` table
/// per expanded detail.
pub fn load_content_file(path: &Path) -> Result<ContentSet, ContentError> {
    let contents = fs::read_to_string(path).map_err(ContentError::Io)?;
    let set: ContentSet = toml::from_str(&contents).map_err(ContentError::Parse)?;
    Ok(set)
}
