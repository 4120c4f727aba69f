//! Focus handles and the per-render focus table.
//!
//! Every render pass rebuilds the table from the current data: one entry per
//! rendered item, in render order, indexed by `(section, item name)`. Items
//! of one section occupy a contiguous run of handles, which is what the
//! wraparound traversal relies on.

use super::types::{element_id, ListError, RowLayout};
use std::collections::{HashMap, HashSet};

/// Reference to one rendered item, used to move keyboard focus to it.
///
/// Handles are only meaningful for the render pass that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusHandle(usize);

impl FocusHandle {
    /// Position of the item in render order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Where keyboard focus sits relative to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Focus is elsewhere in the application.
    #[default]
    Outside,
    /// The list container holds focus.
    Container,
    /// An item holds focus.
    Item(FocusHandle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FocusEntry {
    pub(super) section_index: usize,
    pub(super) item_index: usize,
    pub(super) section: String,
    pub(super) name: String,
    pub(super) id: String,
    pub(super) row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionRun {
    start: usize,
    len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FocusTable {
    entries: Vec<FocusEntry>,
    index: HashMap<(String, String), FocusHandle>,
    runs: Vec<SectionRun>,
    item_height: usize,
}

impl FocusTable {
    /// Builds the table for one render pass, rejecting data the traversal
    /// cannot handle.
    pub(super) fn build<T, F>(
        sections: &[String],
        items_by_section: &HashMap<String, Vec<T>>,
        name_of: F,
        layout: RowLayout,
    ) -> Result<Self, ListError>
    where
        F: Fn(&T) -> String,
    {
        let mut table = FocusTable {
            item_height: layout.item_height,
            ..Default::default()
        };
        let mut seen = HashSet::new();
        let mut row = layout.top_inset + layout.title_height;

        for (section_index, section) in sections.iter().enumerate() {
            if !seen.insert(section.as_str()) {
                return Err(ListError::DuplicateSection(section.clone()));
            }
            let items = items_by_section
                .get(section)
                .ok_or_else(|| ListError::MissingSection(section.clone()))?;
            if items.is_empty() {
                return Err(ListError::EmptySection(section.clone()));
            }
            if section_index > 0 {
                row += layout.section_gap;
            }
            row += layout.section_title_height;

            let section_id = element_id(section);
            table.runs.push(SectionRun {
                start: table.entries.len(),
                len: items.len(),
            });

            for (item_index, item) in items.iter().enumerate() {
                let name = name_of(item);
                let handle = FocusHandle(table.entries.len());
                if table
                    .index
                    .insert((section.clone(), name.clone()), handle)
                    .is_some()
                {
                    return Err(ListError::DuplicateItemName {
                        section: section.clone(),
                        name,
                    });
                }
                table.entries.push(FocusEntry {
                    section_index,
                    item_index,
                    section: section.clone(),
                    id: format!("{}-{}", section_id, element_id(&name)),
                    name,
                    row,
                });
                row += layout.item_height;
            }
        }

        Ok(table)
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn entry(&self, handle: FocusHandle) -> Option<&FocusEntry> {
        self.entries.get(handle.0)
    }

    pub(super) fn lookup(&self, section: &str, name: &str) -> Option<FocusHandle> {
        self.index
            .get(&(section.to_string(), name.to_string()))
            .copied()
    }

    /// Next item: same section if possible, else first item of the next
    /// section, wrapping from the last section to the first.
    pub(super) fn next(&self, handle: FocusHandle) -> Option<FocusHandle> {
        let entry = self.entry(handle)?;
        let run = self.runs[entry.section_index];
        if entry.item_index + 1 < run.len {
            return Some(FocusHandle(handle.0 + 1));
        }
        let next_section = (entry.section_index + 1) % self.runs.len();
        Some(FocusHandle(self.runs[next_section].start))
    }

    /// Previous item: same section if possible, else last item of the
    /// previous section, wrapping from the first section to the last.
    pub(super) fn prev(&self, handle: FocusHandle) -> Option<FocusHandle> {
        let entry = self.entry(handle)?;
        if entry.item_index > 0 {
            return Some(FocusHandle(handle.0 - 1));
        }
        let count = self.runs.len();
        let prev_section = (entry.section_index + count - 1) % count;
        let run = self.runs[prev_section];
        Some(FocusHandle(run.start + run.len - 1))
    }

    /// Item drawn on `row`, counted from the top of the list.
    pub(super) fn hit_test(&self, row: usize) -> Option<FocusHandle> {
        let height = self.item_height.max(1);
        self.entries
            .iter()
            .position(|e| row >= e.row && row < e.row + height)
            .map(FocusHandle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FocusTable {
        let sections = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut items = HashMap::new();
        items.insert("A".to_string(), vec![1, 2]);
        items.insert("B".to_string(), vec![2, 3, 4]);
        items.insert("C".to_string(), vec![5]);
        FocusTable::build(&sections, &items, |i: &i32| i.to_string(), RowLayout::default())
            .unwrap()
    }

    fn name(t: &FocusTable, h: FocusHandle) -> (String, String) {
        let e = t.entry(h).unwrap();
        (e.section.clone(), e.name.clone())
    }

    #[test]
    fn test_one_entry_per_item() {
        let t = table();
        assert_eq!(t.len(), 6);
        assert_eq!(t.lookup("B", "3"), Some(FocusHandle(3)));
        assert_eq!(t.lookup("C", "3"), None);
        assert_eq!(t.entry(FocusHandle(3)).unwrap().id, "B-3");
    }

    #[test]
    fn test_next_wraps_across_sections() {
        let t = table();
        let last = t.lookup("C", "5").unwrap();
        assert_eq!(name(&t, t.next(last).unwrap()), ("A".into(), "1".into()));
        let end_of_a = t.lookup("A", "2").unwrap();
        assert_eq!(name(&t, t.next(end_of_a).unwrap()), ("B".into(), "2".into()));
    }

    #[test]
    fn test_prev_wraps_across_sections() {
        let t = table();
        let first = t.lookup("A", "1").unwrap();
        assert_eq!(name(&t, t.prev(first).unwrap()), ("C".into(), "5".into()));
        let start_of_c = t.lookup("C", "5").unwrap();
        assert_eq!(name(&t, t.prev(start_of_c).unwrap()), ("B".into(), "4".into()));
    }

    #[test]
    fn test_single_item_single_section_wraps_to_itself() {
        let sections = vec!["Only".to_string()];
        let mut items = HashMap::new();
        items.insert("Only".to_string(), vec!["x"]);
        let t = FocusTable::build(&sections, &items, |s: &&str| s.to_string(), RowLayout::default())
            .unwrap();
        let h = t.lookup("Only", "x").unwrap();
        assert_eq!(t.next(h), Some(h));
        assert_eq!(t.prev(h), Some(h));
    }

    #[test]
    fn test_rejects_unrenderable_data() {
        let sections = vec!["A".to_string(), "B".to_string()];
        let mut items: HashMap<String, Vec<i32>> = HashMap::new();
        items.insert("A".to_string(), vec![1]);
        items.insert("B".to_string(), vec![]);
        let err = FocusTable::build(&sections, &items, |i| i.to_string(), RowLayout::default());
        assert_eq!(err, Err(ListError::EmptySection("B".into())));

        items.remove("B");
        let err = FocusTable::build(&sections, &items, |i| i.to_string(), RowLayout::default());
        assert_eq!(err, Err(ListError::MissingSection("B".into())));

        items.insert("B".to_string(), vec![7, 7]);
        let err = FocusTable::build(&sections, &items, |i| i.to_string(), RowLayout::default());
        assert_eq!(
            err,
            Err(ListError::DuplicateItemName {
                section: "B".into(),
                name: "7".into()
            })
        );

        let dup = vec!["A".to_string(), "A".to_string()];
        let err = FocusTable::build(&dup, &items, |i| i.to_string(), RowLayout::default());
        assert_eq!(err, Err(ListError::DuplicateSection("A".into())));
    }

    #[test]
    fn test_rows_follow_layout() {
        let t = table();
        // title, "A" heading, then items
        assert_eq!(t.hit_test(0), None);
        assert_eq!(t.hit_test(1), None);
        assert_eq!(t.hit_test(2), t.lookup("A", "1"));
        assert_eq!(t.hit_test(3), t.lookup("A", "2"));
        assert_eq!(t.hit_test(4), None);
        assert_eq!(t.hit_test(5), t.lookup("B", "2"));
        assert_eq!(t.hit_test(9), t.lookup("C", "5"));
        assert_eq!(t.hit_test(10), None);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        assert_eq!(table(), table());
    }
}
