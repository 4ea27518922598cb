//! Property-based invariant tests for frame rendering.
//!
//! 1. Painted elements keep their insertion order and form a suffix.
//! 2. The erase directive never exceeds the previous frame's line count.
//! 3. A frame never draws more lines than the row budget.
//! 4. Fragments render exactly like their children added one by one.

mod common;

use proptest::prelude::*;
use spark_document::{Element, fragment, text};

use common::{document, erased, visible};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Elements as (label, extra lines) pairs.
fn elements_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..100, 0u8..3), 0..12)
}

fn element(label: u8, extra: u8) -> Element {
    let mut content = format!("e{label}");
    for i in 0..extra {
        content.push_str(&format!("\n.{i}"));
    }
    text(content).into()
}

fn expected_lines(label: u8, extra: u8) -> Vec<String> {
    let mut lines = vec![format!("e{label}")];
    lines.extend((0..extra).map(|i| format!(".{i}")));
    lines
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Order preservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn painted_elements_are_an_ordered_suffix(specs in elements_strategy(), rows in 0u16..30) {
        let (doc, sink) = document(rows, 40);
        doc.add(specs.iter().map(|&(l, e)| element(l, e)));
        doc.render_frame();

        let painted: Vec<String> = visible(&sink.take())
            .lines()
            .map(str::to_string)
            .collect();

        // Find the suffix whose lines match what was painted
        let mut suffix: Vec<String> = Vec::new();
        for &(l, e) in specs.iter().rev() {
            let mut lines = expected_lines(l, e);
            if suffix.len() + lines.len() > painted.len() {
                break;
            }
            lines.extend(suffix);
            suffix = lines;
        }
        prop_assert_eq!(painted, suffix);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Erase bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn erase_never_exceeds_previous_frame(
        batches in prop::collection::vec(elements_strategy(), 1..5),
        rows in 0u16..30,
    ) {
        let (doc, sink) = document(rows, 40);
        let mut previous = 0usize;

        for batch in batches {
            doc.add(batch.iter().map(|&(l, e)| element(l, e)));
            doc.render_frame();

            let out = sink.take();
            let count = doc.last_count();
            prop_assert!(usize::from(erased(&out)) <= previous);
            prop_assert!(usize::from(erased(&out)) <= count);
            previous = count;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Row budget
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn frame_fits_row_budget(specs in elements_strategy(), rows in 0u16..30) {
        let (doc, sink) = document(rows, 40);
        doc.add(specs.iter().map(|&(l, e)| element(l, e)));
        doc.render_frame();

        let painted = visible(&sink.take()).matches('\n').count();
        prop_assert!(painted <= usize::from(rows.saturating_sub(1)));
        prop_assert_eq!(painted, doc.last_count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fragment transparency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fragment_matches_flat_children(specs in prop::collection::vec((0u8..100, 0u8..3), 1..6)) {
        let (flat, flat_sink) = document(100, 40);
        let mut flat_text = String::new();
        for &(l, e) in &specs {
            // One element wrapping each child alone, painted as a single block
            flat.add([fragment([element(l, e)])]);
        }
        flat.render_frame();
        flat_text.push_str(&visible(&flat_sink.take()));

        let (grouped, grouped_sink) = document(100, 40);
        grouped.add([fragment(specs.iter().map(|&(l, e)| element(l, e)))]);
        grouped.render_frame();

        prop_assert_eq!(visible(&grouped_sink.take()), flat_text);
    }
}
