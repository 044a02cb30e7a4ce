use crate::toc::heading::Heading;
use crate::toc::node::{TocNode, TocTree, TreeError};

/// Level of the implicit root the first heading hangs from.
///
/// This is one above the shallowest heading, so the shallowest headings
/// always land at depth 1. For `h1` documents that is level 0, which is what
/// keeps a run of `h1` headings as top-level siblings. Flooring it at 1
/// would make any `h1` ascend past the root and fail the build.
pub fn root_level(headings: &[Heading]) -> u8 {
    headings
        .iter()
        .map(|heading| heading.level().get())
        .min()
        .map_or(0, |level| level - 1)
}

/// Build a TOC forest from headings in document order.
///
/// Skipped levels are filled with placeholder entries so every entry sits at
/// `level - root_level` below the (discarded) root.
pub fn build_toc_items(headings: &[Heading]) -> Result<Vec<TocNode>, TreeError> {
    if headings.is_empty() {
        return Ok(Vec::new());
    }

    let mut tree = TocTree::new();
    attach_headings(&mut tree, headings, root_level(headings))?;
    Ok(tree.into_forest())
}

/// Walk `headings` in order from the root of `tree`, which sits at `start_level`
fn attach_headings(tree: &mut TocTree, headings: &[Heading], start_level: u8) -> Result<(), TreeError> {
    let mut cursor = tree.root();
    let mut last_level = start_level;

    for heading in headings {
        let level = heading.level().get();

        while level != last_level + 1 {
            if level <= last_level {
                cursor = tree.parent(cursor).ok_or(TreeError::AscendPastRoot)?;
                last_level -= 1;
            } else {
                let placeholder = tree.create_placeholder();
                tree.add(cursor, placeholder)?;
                cursor = placeholder;
                last_level += 1;
            }
        }

        let node = tree.create(
            heading.id(),
            heading.text(),
            heading.link_target().map(str::to_string),
        );
        tree.add(cursor, node)?;
        cursor = node;
        last_level = level;
    }

    Ok(())
}
