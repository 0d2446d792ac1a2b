//! Domain model structs persisted in the document store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be written as
//! a document field set and handed to the UI layer unchanged.  Document ids
//! are not part of the field set; they are filled in by the [`Catalog`]
//! readers after decoding.
//!
//! [`Catalog`]: crate::Catalog

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Content type
// ---------------------------------------------------------------------------

/// Content classification attached to sub-items produced by the legacy
/// import.  Manually authored sub-items carry no type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Notifications,
    Calendar,
    ProductResources,
    Videos,
    External,
    Docs,
    Images,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::Calendar => "calendar",
            Self::ProductResources => "product_resources",
            Self::Videos => "videos",
            Self::External => "external",
            Self::Docs => "docs",
            Self::Images => "images",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sub-item
// ---------------------------------------------------------------------------

/// A content block nested in a category.
///
/// Imported sub-items keep their legacy metadata (`type`, `url`, `folder`,
/// `images`, `is_module`) as plain fields; nothing resolves them into
/// [`VideoRef`] or [`FileRef`] entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubItem {
    #[serde(default)]
    pub title: String,
    /// Free-text body rendered in the detail view.
    #[serde(default)]
    pub content: String,
    /// Sort key used while importing.
    #[serde(default)]
    pub order: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_module: bool,
}

impl SubItem {
    /// A plain text block with no legacy metadata.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ---------------------------------------------------------------------------
// Video / file references
// ---------------------------------------------------------------------------

/// An external video.  Unique per category by `video_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_id: String,
}

/// A downloadable document.  Unique per category by `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A named top-level grouping of content (a "menu").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    /// Document id.  Not stored in the field set.
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<SubItem>,
    #[serde(default)]
    pub videos: Vec<VideoRef>,
    #[serde(default)]
    pub files: Vec<FileRef>,
}

impl MenuCategory {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: Some(String::new()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A corporate notification.  Created and deleted, never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Document id.  Not stored in the field set.
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Always serialized, as `null` when absent.
    #[serde(default)]
    pub link: Option<String>,
    /// Wall-clock milliseconds at write time.
    #[serde(default)]
    pub created_at: i64,
}

// ---------------------------------------------------------------------------
// Calendar module
// ---------------------------------------------------------------------------

/// Fixed placeholder record standing in for the external calendar feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarModule {
    pub title: String,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_id_is_not_part_of_the_field_set() {
        let category = MenuCategory::new("Safety", "Safety");
        let value = serde_json::to_value(&category).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["subtitle"], json!(""));
    }

    #[test]
    fn sub_item_omits_absent_metadata() {
        let value = serde_json::to_value(SubItem::text("Intro", "Hello")).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Intro", "content": "Hello", "order": 0.0 })
        );
    }

    #[test]
    fn sub_item_reads_legacy_type_tag() {
        let item: SubItem = serde_json::from_value(json!({
            "title": "Price list",
            "type": "product_resources",
            "order": 2.0,
            "folder": "prices"
        }))
        .unwrap();
        assert_eq!(item.content_type, Some(ContentType::ProductResources));
        assert_eq!(item.folder.as_deref(), Some("prices"));
        assert!(item.content.is_empty());
    }

    #[test]
    fn notification_link_serializes_as_null() {
        let n = Notification {
            id: String::new(),
            title: "Update".into(),
            body: Some(String::new()),
            link: None,
            created_at: 1,
        };
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(value["link"], serde_json::Value::Null);
    }
}
