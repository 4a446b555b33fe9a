//! The built-in content table: the November 2024 Epic quick-tip set for
//! pharmacy staff. Six sections, each item with a stable id, plus the
//! expanded detail for every item.
//!
//! Step lines reuse the marker vocabulary the renderer understands:
//! `→` continuation, `✓` confirmation, `♦` tip; untagged lines are
//! numbered main steps.

use std::collections::HashMap;

use super::{ContentSet, Detail, Item, ItemId, Section, SectionId};

fn item(id: &str, text: &str, tip: &str) -> Item {
    Item {
        id: ItemId::new(id),
        text: text.to_string(),
        tip: tip.to_string(),
        new_feature: false,
    }
}

fn new_item(id: &str, text: &str, tip: &str) -> Item {
    Item {
        new_feature: true,
        ..item(id, text, tip)
    }
}

fn section(id: &str, title: &str, icon: &str, items: Vec<Item>) -> Section {
    Section {
        id: SectionId::new(id),
        title: title.to_string(),
        icon: icon.to_string(),
        items,
    }
}

fn detail(
    what: &str,
    when: &str,
    shortcut: &[&str],
    steps: &[&str],
    video_url: Option<&str>,
) -> Detail {
    Detail {
        what: what.to_string(),
        when: when.to_string(),
        shortcut: shortcut.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        video_url: video_url.map(|s| s.to_string()),
    }
}

/// Build the full built-in content set.
pub fn content() -> ContentSet {
    let sections = vec![
        section(
            "search-nav",
            "Search & Navigation",
            "🔍",
            vec![
                new_item(
                    "enhanced-assistant-bar",
                    "Enhanced Assistant Bar",
                    "Centralizes chart search with enhanced capabilities for trending and calculations",
                ),
                new_item(
                    "quick-search",
                    "Quick Search",
                    "Provides system-wide search capabilities outside of patient charts",
                ),
                new_item(
                    "chart-search",
                    "Chart Search",
                    "Enables comprehensive search within patient charts",
                ),
                item(
                    "patient-lookup",
                    "Patient lookup",
                    "Provides quick access to patient charts",
                ),
                item(
                    "trending-labs-vitals",
                    "Trending labs and vitals",
                    "Creates visual representations of patient data trends",
                ),
            ],
        ),
        section(
            "workspace",
            "Workspace Customization",
            "⚙️",
            vec![
                item(
                    "default-workspace",
                    "Default workspace settings",
                    "Sets preferred initial workspace upon login",
                ),
                item(
                    "chart-review-tabs",
                    "Chart review tab customization",
                    "Allows personalization of chart review tab layout",
                ),
                item(
                    "report-pane",
                    "Report pane organization",
                    "Enables rearrangement of report information blocks",
                ),
                item(
                    "moving-tools",
                    "Moving tools and buttons",
                    "Enables drag-and-drop customization of Epic interface elements",
                ),
            ],
        ),
        section(
            "medication",
            "Medication Management",
            "💊",
            vec![
                item(
                    "medication-holds",
                    "Medication holds with duration",
                    "Allows setting specific durations for medication holds",
                ),
                item(
                    "order-panels",
                    "Order panels creation and modification",
                    "Enables creation and customization of order panels",
                ),
            ],
        ),
        section(
            "infusion",
            "Infusion Plans",
            "💉",
            vec![
                item(
                    "therapy-plans",
                    "Creating Therapy Plans",
                    "Streamlines creation of infusion therapy protocols",
                ),
                item(
                    "managing-plans",
                    "Managing Plans",
                    "Provides tools for organizing and editing therapy plans",
                ),
                item(
                    "treatment-timing",
                    "Treatment Timing",
                    "Manages start times for infusion orders",
                ),
                item(
                    "protocol-names",
                    "Protocol Names",
                    "Enables customization of therapy plan names",
                ),
                item(
                    "plan-properties",
                    "Plan Properties",
                    "Enables customization of therapy plan settings and speed buttons",
                ),
            ],
        ),
        section(
            "communication",
            "Communication & Handoffs",
            "📱",
            vec![
                item(
                    "sticky-notes",
                    "Sticky Notes",
                    "Enables personal and team communication about patients",
                ),
                item(
                    "advanced-sticky-notes",
                    "Advanced Sticky Notes Features",
                    "Adds smart phrases and auto-launch options to notes",
                ),
                item(
                    "sticky-notes-visibility",
                    "Sticky Notes Visibility and Integration",
                    "Expands sticky note visibility across Epic modules",
                ),
                item(
                    "reminder-lists",
                    "Patient reminder lists",
                    "Creates organized lists of patient-specific reminders",
                ),
                item(
                    "notification-center",
                    "Notification center",
                    "Centralizes all system notifications and messages",
                ),
            ],
        ),
        section(
            "clinical-resources",
            "Clinical Resources",
            "📚",
            vec![
                item(
                    "emmi-education",
                    "EMMI patient education resources",
                    "Provides access to patient education materials",
                ),
                item(
                    "connie-hie",
                    "External records access (Connie HIE)",
                    "Enables view of external facility records",
                ),
            ],
        ),
    ];

    let mut details = HashMap::new();

    // Search & Navigation
    details.insert(
        ItemId::new("enhanced-assistant-bar"),
        detail(
            "Centralizes chart search with enhanced capabilities for trending and calculations",
            "Whenever you need to search within a patient's chart or perform quick calculations",
            &["Ctrl + Space"],
            &[
                "Open patient chart",
                "Press Ctrl + Space (or click center bar)",
                "Type search term",
                "→ Use 'trend' or 'graph' for visuals",
                "→ Use calculations directly",
                "✓ Review results in right panel",
            ],
            Some("https://epicvideos.s3.us-east-2.amazonaws.com/Nov+10%2C+2024+Upgrade+-+Meet+the+new+Chart+Search%2C+The+Assistant+Bar.mp4"),
        ),
    );
    details.insert(
        ItemId::new("quick-search"),
        detail(
            "Provides system-wide search capabilities outside of patient charts",
            "For accessing Epic tools, activities, or sending messages",
            &["Alt key"],
            &[
                "Press Alt key",
                "Type search term",
                "Select from results",
                "→ Recent searches shown below",
                "✓ Launch selected item",
            ],
            Some("https://epicvideos.s3.us-east-2.amazonaws.com/Changes+to+the+Quick+Search+in+Epic.mp4"),
        ),
    );
    details.insert(
        ItemId::new("chart-search"),
        detail(
            "Enables comprehensive search within patient charts",
            "To find specific patient information or perform calculations",
            &["Ctrl + Space"],
            &[
                "Access chart search",
                "Enter search terms",
                "View results",
                "→ Use calculations/conversions",
                "✓ Select desired info",
            ],
            Some("https://epicvideos.s3.us-east-2.amazonaws.com/Trend+Vitals+and+Labs+in+Chart+Search.mp4"),
        ),
    );
    details.insert(
        ItemId::new("patient-lookup"),
        detail(
            "Provides quick access to patient charts",
            "When you need to find and open a patient's chart",
            &["Alt + C"],
            &[
                "Press Alt + C",
                "Enter patient info",
                "Verify patient",
                "✓ Click Accept",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("trending-labs-vitals"),
        detail(
            "Creates visual representations of patient data trends",
            "To analyze patterns in patient labs and vitals over time",
            &["Ctrl + Space (then type \"trend\")"],
            &[
                "Open chart search",
                "Type \"trend\" + metric",
                "Select timeframe",
                "✓ Review graph",
            ],
            None,
        ),
    );

    // Workspace Customization
    details.insert(
        ItemId::new("default-workspace"),
        detail(
            "Sets preferred initial workspace upon login",
            "To streamline workflow by starting in most-used area",
            &[],
            &[
                "Open desired workspace",
                "Click star icon",
                "✓ Confirm selection",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("chart-review-tabs"),
        detail(
            "Allows personalization of chart review tab layout",
            "To optimize chart review workflow",
            &[],
            &[
                "Right-click any tab",
                "Choose options:",
                "→ Assign colors",
                "→ Manage tab order",
                "✓ Save changes",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("report-pane"),
        detail(
            "Enables rearrangement of report information blocks",
            "To prioritize most-referenced information",
            &[],
            &[
                "Click Wrench icon",
                "Select Modify Layout",
                "Drag blocks",
                "✓ Click Accept",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("moving-tools"),
        detail(
            "Enables drag-and-drop customization of Epic interface elements",
            "When optimizing your workspace layout",
            &[],
            &[
                "Click and hold item",
                "Drag to new location",
                "→ Works for toolbar buttons",
                "→ Works for activity tabs",
                "→ Works for navigator buttons",
                "✓ Release to place",
            ],
            None,
        ),
    );

    // Medication Management
    details.insert(
        ItemId::new("medication-holds"),
        detail(
            "Allows setting specific durations for medication holds",
            "When temporarily suspending medications for a known period",
            &[],
            &[
                "Open Manage Orders",
                "Select medication(s)",
                "Choose Hold",
                "→ Specify duration/end time",
                "→ Or select \"until manually unhold\"",
                "✓ Sign the hold",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("order-panels"),
        detail(
            "Enables creation and customization of order panels",
            "When frequently ordering the same set of medications together",
            &[],
            &[
                "Fill shopping cart",
                "Options → Create Panel",
                "Name panel",
                "→ Adjust order details",
                "✓ Save panel",
            ],
            None,
        ),
    );

    // Infusion Plans
    details.insert(
        ItemId::new("therapy-plans"),
        detail(
            "Streamlines creation of infusion therapy protocols",
            "When initiating new infusion therapy regimens",
            &[],
            &[
                "Select episode type",
                "Choose protocol",
                "→ Preview displays on right",
                "Adjust details",
                "✓ Accept protocol",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("managing-plans"),
        detail(
            "Provides tools for organizing and editing therapy plans",
            "During ongoing management of infusion therapies",
            &[],
            &[
                "Access therapy plan",
                "Drag/drop orders",
                "Toggle calendar view",
                "✓ Release lock when done",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("treatment-timing"),
        detail(
            "Manages start times for infusion orders",
            "When coordinating multiple infusions for a patient",
            &[],
            &[
                "Click Actions",
                "Select start times",
                "Adjust schedule",
                "✓ Complete treatment",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("protocol-names"),
        detail(
            "Enables customization of therapy plan names",
            "For clearer identification of specific protocols",
            &[],
            &[
                "Edit plan properties",
                "Modify plan name",
                "✓ Save changes",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("plan-properties"),
        detail(
            "Enables customization of therapy plan settings and speed buttons",
            "When setting up or modifying infusion therapy plans",
            &[],
            &[
                "Click wrench icon",
                "Set speed buttons:",
                "→ Start dates",
                "→ Plan providers",
                "→ Departments",
                "Add problem/diagnosis",
                "✓ Create plan",
            ],
            None,
        ),
    );

    // Communication & Handoffs
    details.insert(
        ItemId::new("sticky-notes"),
        detail(
            "Enables personal and team communication about patients",
            "For important non-medical record reminders",
            &[],
            &[
                "Click note icon",
                "→ Yellow: personal",
                "→ Blue: specialty",
                "Add/edit note",
                "✓ Save",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("advanced-sticky-notes"),
        detail(
            "Adds smart phrases and auto-launch options to notes",
            "To standardize communication and improve efficiency",
            &[],
            &[
                "Click star dropdown",
                "Select smart phrase",
                "Set auto-launch",
                "✓ Save note",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("sticky-notes-visibility"),
        detail(
            "Expands sticky note visibility across Epic modules",
            "To access patient notes in various workflows",
            &[],
            &[
                "Add to patient lists",
                "View in messages",
                "Check in-basket details",
                "✓ Update as needed",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("reminder-lists"),
        detail(
            "Creates organized lists of patient-specific reminders",
            "To track multiple patient-related tasks",
            &[],
            &[
                "Right-click patient",
                "Add to reminder list",
                "Set due date",
                "✓ Monitor in basket",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("notification-center"),
        detail(
            "Centralizes all system notifications and messages",
            "To monitor and manage all communications",
            &[],
            &[
                "Check toolbar badges",
                "Click relevant badge",
                "✓ Handle notifications",
            ],
            None,
        ),
    );

    // Clinical Resources
    details.insert(
        ItemId::new("emmi-education"),
        detail(
            "Provides access to patient education materials",
            "When providing patient education or discharge instructions",
            &[],
            &[
                "Open Plan tab",
                "Click Clinical References",
                "Select content",
                "→ Print now",
                "→ Send to MyChart",
                "✓ Star favorites",
            ],
            None,
        ),
    );
    details.insert(
        ItemId::new("connie-hie"),
        detail(
            "Enables view of external facility records",
            "When reviewing patient's external care history",
            &[],
            &[
                "Find circle icon",
                "Access Connie portal",
                "Select category",
                "✓ Review records",
            ],
            None,
        ),
    );

    ContentSet::new(
        "Epic Quick Tips for Healthcare Staff",
        "Essential Epic Features & Updates - November 2024",
        sections,
        details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_has_a_detail() {
        let content = content();
        for section in content.sections() {
            for item in &section.items {
                assert!(
                    content.detail_for(&item.id).is_some(),
                    "missing detail for {}",
                    item.id
                );
            }
        }
    }

    #[test]
    fn test_new_feature_badges_mark_the_upgrade_items() {
        let content = content();
        let flagged: Vec<&str> = content
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.new_feature)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            flagged,
            vec!["enhanced-assistant-bar", "quick-search", "chart-search"]
        );
    }

    #[test]
    fn test_video_urls_only_on_upgrade_items() {
        let content = content();
        let with_video: Vec<&str> = content
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| {
                content
                    .detail_for(&i.id)
                    .is_some_and(|d| d.video_url.is_some())
            })
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            with_video,
            vec!["enhanced-assistant-bar", "quick-search", "chart-search"]
        );
    }
}
