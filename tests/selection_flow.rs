//! End-to-end tests of the selection flow: actions in, settled state out,
//! with a synthetic clock driving every transition deadline.

use std::collections::HashMap;
use std::time::Instant;

use quicktips::core::action::{Action, Effect, update};
use quicktips::core::content::{
    ContentSet, Detail, Item, ItemId, Section, SectionId, StepKind, builtin, step_plan,
};
use quicktips::core::guide::{GuideStore, MemoryGuideStore};
use quicktips::core::selection::{Phase, TransitionTiming};
use quicktips::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Two sections, three items; "pager" carries a video reference.
fn fixture_content() -> ContentSet {
    let sections = vec![
        Section {
            id: SectionId::new("charting"),
            title: "Charting".to_string(),
            icon: "C".to_string(),
            items: vec![
                Item {
                    id: ItemId::new("pager"),
                    text: "Pager lookup".to_string(),
                    tip: "Finds pagers".to_string(),
                    new_feature: true,
                },
                Item {
                    id: ItemId::new("flowsheet"),
                    text: "Flowsheet shortcuts".to_string(),
                    tip: "Speeds up flowsheets".to_string(),
                    new_feature: false,
                },
            ],
        },
        Section {
            id: SectionId::new("orders"),
            title: "Orders".to_string(),
            icon: "O".to_string(),
            items: vec![Item {
                id: ItemId::new("presets"),
                text: "Order presets".to_string(),
                tip: "Saves common orders".to_string(),
                new_feature: false,
            }],
        },
    ];

    let details = HashMap::from([
        (
            ItemId::new("pager"),
            Detail {
                what: "Looks up pagers".to_string(),
                when: "When paging someone".to_string(),
                shortcut: vec!["Ctrl + P".to_string()],
                steps: vec![
                    "Open the directory".to_string(),
                    "→ Filter by unit".to_string(),
                    "Pick a contact".to_string(),
                    "✓ Send the page".to_string(),
                ],
                video_url: Some("https://example.com/pager.mp4".to_string()),
            },
        ),
        (
            ItemId::new("presets"),
            Detail {
                what: "Saves order sets".to_string(),
                when: "When ordering the same things".to_string(),
                shortcut: vec![],
                steps: vec!["Save the set".to_string(), "✓ Reuse it".to_string()],
                video_url: None,
            },
        ),
    ]);

    ContentSet::new("Fixture Tips", "For integration tests", sections, details)
}

fn fixture_app() -> App {
    App::new(fixture_content(), TransitionTiming::default())
}

fn select(app: &mut App, section: &str, item: &str, now: Instant) -> Effect {
    update(
        app,
        Action::SelectItem {
            section: SectionId::new(section),
            item: ItemId::new(item),
        },
        now,
    )
}

/// Tick through every scheduled deadline until the controller goes quiet.
fn settle(app: &mut App, mut now: Instant) -> Instant {
    while let Some(deadline) = app.selection.next_deadline() {
        now = deadline;
        update(app, Action::Tick, now);
    }
    now
}

// ============================================================================
// Selection flow
// ============================================================================

#[test]
fn select_settles_into_section_and_item() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    settle(&mut app, t0);

    assert_eq!(
        app.selection.selected_section(),
        Some(&SectionId::new("charting"))
    );
    assert_eq!(app.selection.selected_item(), Some(&ItemId::new("pager")));
    assert_eq!(app.selection.phase(), Phase::Idle);
    assert!(app.selection.video_visible());
}

#[test]
fn three_phase_order_is_observable() {
    let mut app = fixture_app();
    let t0 = Instant::now();
    let timing = app.timing;

    select(&mut app, "charting", "pager", t0);

    // Phase 1: media hidden, identifiers untouched
    assert_eq!(app.selection.phase(), Phase::HidingMedia);
    assert!(!app.selection.video_visible());
    assert_eq!(app.selection.selected_item(), None);

    // Phase 2: identifiers switch together
    update(&mut app, Action::Tick, t0 + timing.hide);
    assert_eq!(app.selection.phase(), Phase::Switching);
    assert_eq!(app.selection.selected_item(), Some(&ItemId::new("pager")));
    assert!(!app.selection.video_visible());

    // Phase 3: settle, then media is allowed back
    update(&mut app, Action::Tick, t0 + timing.hide + timing.switch);
    assert_eq!(app.selection.phase(), Phase::Settling);
    assert!(!app.selection.video_visible());

    update(
        &mut app,
        Action::Tick,
        t0 + timing.hide + timing.switch + timing.settle,
    );
    assert_eq!(app.selection.phase(), Phase::Idle);
    assert!(app.selection.video_visible());
}

#[test]
fn reselect_is_bit_for_bit_noop() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    let t1 = settle(&mut app, t0);

    let before = app.selection.clone();
    select(&mut app, "charting", "pager", t1);
    assert_eq!(app.selection, before);
}

#[test]
fn go_back_resets_from_any_state() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    let t1 = settle(&mut app, t0);

    update(&mut app, Action::GoBack, t1);
    settle(&mut app, t1);
    assert_eq!(app.selection.selected_section(), None);
    assert_eq!(app.selection.selected_item(), None);

    // Going back again from the top changes nothing
    let before = app.selection.clone();
    update(&mut app, Action::GoBack, t1);
    assert_eq!(app.selection, before);
}

#[test]
fn last_click_wins_during_transition() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    // A second click lands mid-flight and overwrites the target
    select(&mut app, "orders", "presets", t0);

    settle(&mut app, t0);
    assert_eq!(
        app.selection.selected_section(),
        Some(&SectionId::new("orders"))
    );
    assert_eq!(app.selection.selected_item(), Some(&ItemId::new("presets")));
}

#[test]
fn section_less_click_promotes_through_pending() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    let t1 = settle(&mut app, t0);

    // Re-click while open: no section context, item must pass through an
    // unmounted state before remounting.
    update(&mut app, Action::ItemClicked(ItemId::new("flowsheet")), t1);
    assert_eq!(app.selection.selected_item(), None);
    assert_eq!(
        app.selection.pending_item(),
        Some(&ItemId::new("flowsheet"))
    );

    settle(&mut app, t1);
    assert_eq!(
        app.selection.selected_item(),
        Some(&ItemId::new("flowsheet"))
    );
    assert_eq!(
        app.selection.selected_section(),
        Some(&SectionId::new("charting"))
    );
    assert_eq!(app.selection.pending_item(), None);
}

#[test]
fn open_video_effect_carries_the_url() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    let t1 = settle(&mut app, t0);

    assert_eq!(
        update(&mut app, Action::OpenVideo, t1),
        Effect::OpenVideo("https://example.com/pager.mp4".to_string())
    );
}

#[test]
fn video_identity_follows_the_selected_item() {
    let mut app = fixture_app();
    let t0 = Instant::now();

    select(&mut app, "charting", "pager", t0);
    settle(&mut app, t0);
    let first = app.selection.selected_item().cloned();

    let t1 = Instant::now();
    select(&mut app, "orders", "presets", t1);
    // The old video is down before anything else changes
    assert!(!app.selection.video_visible());
    settle(&mut app, t1);

    assert_ne!(app.selection.selected_item().cloned(), first);
}

// ============================================================================
// Guide flag
// ============================================================================

#[test]
fn guide_auto_opens_exactly_once() {
    let store = MemoryGuideStore::default();

    // First launch: flag absent, guide opens, flag written immediately
    let first_launch = !store.has_seen();
    store.mark_seen().unwrap();
    assert!(first_launch);

    // Second launch: flag present, no auto-open
    assert!(store.has_seen());
}

// ============================================================================
// Built-in content
// ============================================================================

#[test]
fn builtin_content_supports_the_browse_flow() {
    let content = builtin::content();
    assert!(content.validate().unwrap().is_empty());

    // Every section visible at the top, exactly one when selected
    assert_eq!(content.visible_sections(None).len(), content.sections().len());
    let first = content.sections()[0].id.clone();
    assert_eq!(content.visible_sections(Some(&first)).len(), 1);

    // Every item resolves its owner and (here) a detail
    for section in content.sections() {
        for item in &section.items {
            assert_eq!(
                content.section_of(&item.id).map(|s| &s.id),
                Some(&section.id)
            );
            assert!(content.detail_for(&item.id).is_some());
        }
    }
}

#[test]
fn builtin_step_numbering_skips_tagged_lines() {
    let content = builtin::content();
    let detail = content
        .detail_for(&ItemId::new("enhanced-assistant-bar"))
        .unwrap();
    let plan = step_plan(detail);

    let numbers: Vec<Option<usize>> = plan.iter().map(|s| s.number).collect();
    assert_eq!(
        numbers,
        vec![Some(1), Some(2), Some(3), None, None, None],
        "three main steps, then two continuations and a confirmation"
    );
    assert_eq!(plan[3].kind, StepKind::Continuation);
    assert_eq!(plan[5].kind, StepKind::Confirmation);
}
