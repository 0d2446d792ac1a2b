use guidebook_store::{MenuCategory, SubItem};
use serde::Serialize;

/// Label used for entries whose stored title is blank.
pub const UNTITLED: &str = "Untitled";

/// The four record kinds, in result-rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Category,
    SubItem,
    Video,
    File,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Category,
        RecordKind::SubItem,
        RecordKind::Video,
        RecordKind::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::SubItem => "subitem",
            Self::Video => "video",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable entry.  Each variant carries what is needed to render its
/// label and to resolve a click without going back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchRecord {
    Category {
        id: String,
        title: String,
    },
    SubItem {
        category_id: String,
        title: String,
        item: SubItem,
    },
    Video {
        category_id: String,
        title: String,
        video_id: String,
    },
    File {
        category_id: String,
        title: String,
        url: String,
    },
}

impl SearchRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Category { .. } => RecordKind::Category,
            Self::SubItem { .. } => RecordKind::SubItem,
            Self::Video { .. } => RecordKind::Video,
            Self::File { .. } => RecordKind::File,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Category { title, .. }
            | Self::SubItem { title, .. }
            | Self::Video { title, .. }
            | Self::File { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct IndexEntry {
    record: SearchRecord,
    /// Lower-cased title, matched against lower-cased queries.
    folded: String,
}

/// Immutable flattened view of a category tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Flatten `tree` into search records.
    ///
    /// Categories come in tree order; under each category its sub-items,
    /// then videos, then files, each in stored order.  Blank titles are
    /// replaced by [`UNTITLED`] so every record has a label.
    pub fn build(tree: &[MenuCategory]) -> Self {
        let capacity = tree
            .iter()
            .map(|c| 1 + c.items.len() + c.videos.len() + c.files.len())
            .sum();
        let mut entries = Vec::with_capacity(capacity);
        let mut push = |record: SearchRecord| {
            let folded = record.title().to_lowercase();
            entries.push(IndexEntry { record, folded });
        };

        for category in tree {
            push(SearchRecord::Category {
                id: category.id.clone(),
                title: label(&category.title),
            });

            for item in &category.items {
                push(SearchRecord::SubItem {
                    category_id: category.id.clone(),
                    title: label(&item.title),
                    item: item.clone(),
                });
            }

            for video in &category.videos {
                push(SearchRecord::Video {
                    category_id: category.id.clone(),
                    title: label(&video.title),
                    video_id: video.video_id.clone(),
                });
            }

            for file in &category.files {
                push(SearchRecord::File {
                    category_id: category.id.clone(),
                    title: label(&file.title),
                    url: file.url.clone(),
                });
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in build order.
    pub fn records(&self) -> impl Iterator<Item = &SearchRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Records whose lower-cased title contains `folded_query`, in build
    /// order.
    pub(crate) fn matching<'a>(
        &'a self,
        folded_query: &'a str,
    ) -> impl Iterator<Item = &'a SearchRecord> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.folded.contains(folded_query))
            .map(|e| &e.record)
    }
}

fn label(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use guidebook_store::{FileRef, VideoRef};

    pub(crate) fn sample_tree() -> Vec<MenuCategory> {
        let mut safety = MenuCategory::new("safety", "Safety");
        safety.items.push(SubItem::text("Safety Briefing", "Wear goggles."));
        safety.items.push(SubItem::text("First Aid", "Call 112."));
        safety.videos.push(VideoRef {
            title: "Safety drill".into(),
            video_id: "yt-1".into(),
        });
        safety.files.push(FileRef {
            title: "Safety handbook".into(),
            url: "https://files/handbook.pdf".into(),
        });

        let mut pumps = MenuCategory::new("pumps", "Pumps");
        pumps.items.push(SubItem::text("Priming", "Fill the basket."));
        pumps.videos.push(VideoRef {
            title: "Pump teardown".into(),
            video_id: "yt-2".into(),
        });

        vec![safety, pumps]
    }

    #[test]
    fn build_emits_one_record_per_node() {
        let tree = sample_tree();
        let index = SearchIndex::build(&tree);

        let expected: usize = tree
            .iter()
            .map(|c| 1 + c.items.len() + c.videos.len() + c.files.len())
            .sum();
        assert_eq!(index.len(), expected);
        assert!(index.records().all(|r| !r.title().is_empty()));
    }

    #[test]
    fn build_order_is_category_then_items_videos_files() {
        let index = SearchIndex::build(&sample_tree());
        let kinds: Vec<_> = index.records().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            [
                RecordKind::Category,
                RecordKind::SubItem,
                RecordKind::SubItem,
                RecordKind::Video,
                RecordKind::File,
                RecordKind::Category,
                RecordKind::SubItem,
                RecordKind::Video,
            ]
        );
    }

    #[test]
    fn sub_item_records_keep_parent_and_payload() {
        let index = SearchIndex::build(&sample_tree());
        let first_item = index
            .records()
            .find(|r| r.kind() == RecordKind::SubItem)
            .unwrap();
        match first_item {
            SearchRecord::SubItem {
                category_id, item, ..
            } => {
                assert_eq!(category_id, "safety");
                assert_eq!(item.content, "Wear goggles.");
            }
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn blank_titles_get_a_label() {
        let mut category = MenuCategory::new("c", "  ");
        category.items.push(SubItem::text("", "body"));
        let index = SearchIndex::build(&[category]);

        assert_eq!(index.len(), 2);
        assert!(index.records().all(|r| r.title() == UNTITLED));
    }

    #[test]
    fn build_is_deterministic() {
        let tree = sample_tree();
        assert_eq!(SearchIndex::build(&tree), SearchIndex::build(&tree));
    }

    #[test]
    fn empty_tree_builds_empty_index() {
        assert!(SearchIndex::build(&[]).is_empty());
    }
}
