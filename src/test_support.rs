//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use crate::core::content::{ContentSet, Detail, Item, ItemId, Section, SectionId};
use crate::core::selection::TransitionTiming;
use crate::core::state::App;

/// A small deterministic content set: two sections, one item with a video,
/// one with a detail but no video, one with no detail at all.
pub fn test_content() -> ContentSet {
    let sections = vec![
        Section {
            id: SectionId::new("alpha"),
            title: "Alpha Tools".to_string(),
            icon: "A".to_string(),
            items: vec![
                Item {
                    id: ItemId::new("one"),
                    text: "First tool".to_string(),
                    tip: "Does the first thing".to_string(),
                    new_feature: true,
                },
                Item {
                    id: ItemId::new("two"),
                    text: "Second tool".to_string(),
                    tip: "Does the second thing".to_string(),
                    new_feature: false,
                },
            ],
        },
        Section {
            id: SectionId::new("beta"),
            title: "Beta Tools".to_string(),
            icon: "B".to_string(),
            items: vec![Item {
                id: ItemId::new("three"),
                text: "Third tool".to_string(),
                tip: "Does the third thing".to_string(),
                new_feature: false,
            }],
        },
    ];

    let details = HashMap::from([
        (
            ItemId::new("one"),
            Detail {
                what: "Runs the first thing".to_string(),
                when: "Whenever the first thing is needed".to_string(),
                shortcut: vec!["Ctrl + 1".to_string()],
                steps: vec![
                    "Open the tool".to_string(),
                    "→ Pick a mode".to_string(),
                    "Run it".to_string(),
                    "✓ Check the output".to_string(),
                ],
                video_url: Some("https://example.com/one.mp4".to_string()),
            },
        ),
        (
            ItemId::new("two"),
            Detail {
                what: "Runs the second thing".to_string(),
                when: "Whenever the second thing is needed".to_string(),
                shortcut: vec![],
                steps: vec!["Just run it".to_string(), "✓ Done".to_string()],
                video_url: None,
            },
        ),
        // "three" deliberately has no detail — absence must render fine.
    ]);

    ContentSet::new("Test Tips", "A tiny fixture", sections, details)
}

/// Creates a test App over the fixture content with default timings.
pub fn test_app() -> App {
    App::new(test_content(), TransitionTiming::default())
}
