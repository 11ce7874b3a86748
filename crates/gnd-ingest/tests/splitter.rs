//! Property tests for the record block splitter.

use proptest::prelude::*;

use gnd_ingest::{BlockBoundaries, Result, split_blocks};

fn collect_blocks(lines: Vec<String>) -> Vec<Vec<String>> {
    let iter = lines.into_iter().map(Ok);
    split_blocks(iter, BlockBoundaries::default())
        .collect::<Result<Vec<_>>>()
        .expect("in-memory lines cannot fail")
}

/// Lines that can never match a record boundary marker.
fn filler_line() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,16}"
}

fn filler_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(filler_line(), 0..4)
}

proptest! {
    #[test]
    fn one_block_per_balanced_marker_pair(
        bodies in prop::collection::vec(filler_lines(), 0..8),
        preamble in filler_lines(),
        epilogue in filler_lines(),
    ) {
        let mut lines: Vec<String> = preamble;
        for body in &bodies {
            lines.push("<record>".to_string());
            lines.extend(body.iter().cloned());
            lines.push("</record>".to_string());
        }
        lines.extend(epilogue);

        let blocks = collect_blocks(lines);
        prop_assert_eq!(blocks.len(), bodies.len());
        for (block, body) in blocks.iter().zip(&bodies) {
            prop_assert!(block[0].contains("<record"));
            prop_assert!(block.last().expect("non-empty block").contains("</record"));
            prop_assert_eq!(block.len(), body.len() + 2);
        }
    }

    #[test]
    fn stray_end_markers_never_create_blocks(
        stray_ends in 1usize..4,
        body in filler_lines(),
    ) {
        let mut lines: Vec<String> = Vec::new();
        for _ in 0..stray_ends {
            lines.push("</record>".to_string());
        }
        lines.push("<record>".to_string());
        lines.extend(body.iter().cloned());
        lines.push("</record>".to_string());

        let blocks = collect_blocks(lines);
        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].len(), body.len() + 2);
    }

    #[test]
    fn nested_start_markers_extend_the_open_block(
        nested_starts in 1usize..4,
        body in filler_lines(),
    ) {
        let mut lines: Vec<String> = vec!["<record>".to_string()];
        for _ in 0..nested_starts {
            lines.push("<record>".to_string());
        }
        lines.extend(body.iter().cloned());
        lines.push("</record>".to_string());

        let blocks = collect_blocks(lines);
        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].len(), body.len() + nested_starts + 2);
    }
}
