//! # Selection Controller
//!
//! Owns navigation state for the browse → category → item-detail flow and
//! sequences each change as a staged transition so the media pane is torn
//! down before identifiers change, and identifiers change before media is
//! allowed back. The three observable effects — hide video, switch
//! identifiers, allow video — always happen in that order.
//!
//! ```text
//! Idle ──select──▶ HidingMedia ──▶ Switching ──▶ Settling ──▶ Idle
//!                  (video off)     (ids swapped)              (video on)
//! ```
//!
//! The machine is deadline-driven, not timer-driven: operations stamp an
//! [`Instant`] deadline into state and the event loop calls [`advance`]
//! with the current time. The in-flight [`Transition`] value doubles as
//! the cancellation token — replacing or dropping it voids the rest of
//! its sequence, so a torn-down view can never be mutated by a stale
//! callback. Tests feed a synthetic clock.
//!
//! [`advance`]: SelectionState::advance

use std::time::{Duration, Instant};

use log::debug;

use crate::core::content::{ContentSet, ItemId, SectionId};

// ============================================================================
// Timing
// ============================================================================

/// The staged-transition delays. Tunable via the `[transition]` config
/// section; defaults chosen to match the feel of a ~300 ms reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Media teardown grace before identifiers switch.
    pub hide: Duration,
    /// Layout rearrangement period after identifiers switch.
    pub switch: Duration,
    /// Final grace before media is allowed to mount.
    pub settle: Duration,
    /// Staging delay of the pending-selection path.
    pub promote: Duration,
}

pub const DEFAULT_HIDE_MS: u64 = 100;
pub const DEFAULT_SWITCH_MS: u64 = 150;
pub const DEFAULT_SETTLE_MS: u64 = 50;
pub const DEFAULT_PROMOTE_MS: u64 = 100;

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            hide: Duration::from_millis(DEFAULT_HIDE_MS),
            switch: Duration::from_millis(DEFAULT_SWITCH_MS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            promote: Duration::from_millis(DEFAULT_PROMOTE_MS),
        }
    }
}

// ============================================================================
// States
// ============================================================================

/// Externally observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    HidingMedia,
    Switching,
    Settling,
}

/// Internal stage of an in-flight transition (`Idle` is the absence of one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    HidingMedia,
    Switching,
    Settling,
}

/// Where an in-flight transition is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Item { section: SectionId, item: ItemId },
    Top,
}

/// One staged transition. Also the cancellation token: dropping or
/// replacing it voids every remaining deadline of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Transition {
    stage: Stage,
    deadline: Instant,
    target: Target,
}

/// A staged selection awaiting promotion (the section-less click path).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    item: ItemId,
    deadline: Instant,
}

// ============================================================================
// Selection state
// ============================================================================

/// Runtime navigation state. Created empty at startup, mutated only
/// through the operations below, never persisted.
///
/// Invariants:
/// - `selected_item` is only ever set together with `selected_section`.
/// - `pending` and `selected_item` are never both set — the pending path
///   forces the selection through an empty state so the detail pane (and
///   its media element) unmounts before remounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_section: Option<SectionId>,
    selected_item: Option<ItemId>,
    pending: Option<Pending>,
    transition: Option<Transition>,
    video_visible: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_section: None,
            selected_item: None,
            pending: None,
            transition: None,
            video_visible: false,
        }
    }

    pub fn selected_section(&self) -> Option<&SectionId> {
        self.selected_section.as_ref()
    }

    pub fn selected_item(&self) -> Option<&ItemId> {
        self.selected_item.as_ref()
    }

    pub fn pending_item(&self) -> Option<&ItemId> {
        self.pending.as_ref().map(|p| &p.item)
    }

    /// True while a staged transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// True while anything is scheduled (transition or pending promotion).
    pub fn is_busy(&self) -> bool {
        self.transition.is_some() || self.pending.is_some()
    }

    /// The media pane may only render when this is true; it is false for
    /// the whole duration of any transition.
    pub fn video_visible(&self) -> bool {
        self.video_visible
    }

    pub fn phase(&self) -> Phase {
        match &self.transition {
            None => Phase::Idle,
            Some(t) => match t.stage {
                Stage::HidingMedia => Phase::HidingMedia,
                Stage::Switching => Phase::Switching,
                Stage::Settling => Phase::Settling,
            },
        }
    }

    /// Earliest scheduled deadline, if any. The event loop caps its poll
    /// timeout with this so transitions settle promptly.
    pub fn next_deadline(&self) -> Option<Instant> {
        let t = self.transition.as_ref().map(|t| t.deadline);
        let p = self.pending.as_ref().map(|p| p.deadline);
        match (t, p) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Begin the staged reveal of `item` within `section`.
    ///
    /// Re-selecting the settled item, or the item already in flight, is a
    /// no-op — state is left bit-for-bit unchanged. A different target
    /// during an in-flight transition restarts the sequence at
    /// `HidingMedia` (last click wins), which keeps the
    /// teardown-before-remount guarantee for media that may already be
    /// showing.
    pub fn select_item(
        &mut self,
        section: SectionId,
        item: ItemId,
        timing: &TransitionTiming,
        now: Instant,
    ) {
        if !self.is_busy() && self.selected_item.as_ref() == Some(&item) {
            return;
        }
        if let Some(t) = &self.transition
            && matches!(&t.target, Target::Item { item: inflight, .. } if inflight == &item)
        {
            return;
        }
        self.pending = None;
        self.video_visible = false;
        self.transition = Some(Transition {
            stage: Stage::HidingMedia,
            deadline: now + timing.hide,
            target: Target::Item { section, item },
        });
    }

    /// Stage a selection from a click that carries no section context.
    ///
    /// Clears the current item immediately — forcing the detail pane
    /// through an unmounted state — and schedules the promotion that
    /// resolves the owning section and applies both identifiers together.
    pub fn request_selection(&mut self, item: ItemId, timing: &TransitionTiming, now: Instant) {
        if !self.is_busy() && self.selected_item.as_ref() == Some(&item) {
            return;
        }
        if let Some(p) = &self.pending
            && p.item == item
        {
            return;
        }
        self.transition = None;
        self.selected_item = None;
        self.video_visible = false;
        self.pending = Some(Pending {
            item,
            deadline: now + timing.promote,
        });
    }

    /// Clear the selection with the same staged sequence. No-op when
    /// already at the top level with nothing in flight.
    pub fn go_back(&mut self, timing: &TransitionTiming, now: Instant) {
        if !self.is_busy() && self.selected_section.is_none() && self.selected_item.is_none() {
            return;
        }
        if let Some(t) = &self.transition
            && t.target == Target::Top
        {
            return;
        }
        self.pending = None;
        self.video_visible = false;
        self.transition = Some(Transition {
            stage: Stage::HidingMedia,
            deadline: now + timing.hide,
            target: Target::Top,
        });
    }

    /// Fire every deadline that has come due, in order. Returns true if
    /// anything fired (the caller redraws).
    pub fn advance(
        &mut self,
        content: &ContentSet,
        timing: &TransitionTiming,
        now: Instant,
    ) -> bool {
        let mut fired = false;

        if let Some(Pending { item, deadline }) = self.pending.take_if(|p| p.deadline <= now) {
            fired = true;
            match content.section_of(&item) {
                Some(section) => {
                    // Promotion applies both identifiers together, then
                    // settles before media is allowed back.
                    self.selected_section = Some(section.id.clone());
                    self.selected_item = Some(item.clone());
                    self.transition = Some(Transition {
                        stage: Stage::Settling,
                        deadline: deadline + timing.settle,
                        target: Target::Item {
                            section: section.id.clone(),
                            item,
                        },
                    });
                }
                None => {
                    debug!("pending selection '{item}' is not in the content set, dropping");
                }
            }
        }

        loop {
            let due = match &self.transition {
                Some(t) if t.deadline <= now => t.clone(),
                _ => break,
            };
            fired = true;
            match due.stage {
                Stage::HidingMedia => {
                    match &due.target {
                        Target::Item { section, item } => {
                            self.selected_section = Some(section.clone());
                            self.selected_item = Some(item.clone());
                        }
                        Target::Top => {
                            self.selected_section = None;
                            self.selected_item = None;
                        }
                    }
                    self.transition = Some(Transition {
                        stage: Stage::Switching,
                        deadline: due.deadline + timing.switch,
                        target: due.target,
                    });
                }
                Stage::Switching => {
                    self.transition = Some(Transition {
                        stage: Stage::Settling,
                        deadline: due.deadline + timing.settle,
                        target: due.target,
                    });
                }
                Stage::Settling => {
                    self.transition = None;
                    self.video_visible = self.selected_item.is_some();
                }
            }
        }

        fired
    }
}
