//! Dependency flattening over the template graph.

use std::collections::HashSet;

use crate::Template;

/// Default bound on dependency expansion.
///
/// Far above any realistic template graph; it exists so that a mistakenly
/// cyclic `dependencies()` declaration terminates instead of spinning.
pub const DEFAULT_MAX_TEMPLATE_DEPTH: usize = 25;

/// Flatten root templates plus their transitive dependencies into a single
/// ordered, deduplicated list.
///
/// Traversal is breadth-first in first-seen order: the roots come first,
/// then the dependencies they declare, level by level. A template already
/// collected is never re-entered, so diamond and duplicate dependency edges
/// collapse to one instance. Once `max_depth` levels have been expanded,
/// templates found at that depth are still included but their own
/// dependencies are not, which bounds the traversal even on cyclic graphs.
pub fn collect_all_templates(
    roots: Vec<Box<dyn Template>>,
    max_depth: usize,
) -> Vec<Box<dyn Template>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut collected: Vec<Box<dyn Template>> = Vec::new();

    let mut level = roots;
    let mut depth = 0;
    while !level.is_empty() {
        let expand = depth < max_depth;
        let mut next_level: Vec<Box<dyn Template>> = Vec::new();
        for template in level {
            if !seen.insert(template.name()) {
                continue;
            }
            if expand {
                next_level.extend(template.dependencies());
            }
            collected.push(template);
        }
        level = next_level;
        depth += 1;
    }

    collected
}
