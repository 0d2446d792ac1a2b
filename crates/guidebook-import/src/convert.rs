//! Conversion of classified legacy records into sub-items.

use guidebook_store::{ContentType, SubItem};
use tracing::debug;

use crate::classify::classify;
use crate::legacy::LegacyRecord;

/// Title given to records without a display name.
pub const UNTITLED: &str = "Untitled";

/// Directory prefix and extension of legacy image ids.
pub const IMAGE_DIR: &str = "images";
pub const IMAGE_EXTENSION: &str = ".png";

/// Type-specific part of a converted record.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Notifications,
    Calendar,
    ProductResources { folder: Option<String> },
    Videos { folder: Option<String> },
    External { url: Option<String> },
    Docs { folder: Option<String> },
    Images { images: Vec<String> },
}

impl Payload {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Notifications => ContentType::Notifications,
            Self::Calendar => ContentType::Calendar,
            Self::ProductResources { .. } => ContentType::ProductResources,
            Self::Videos { .. } => ContentType::Videos,
            Self::External { .. } => ContentType::External,
            Self::Docs { .. } => ContentType::Docs,
            Self::Images { .. } => ContentType::Images,
        }
    }
}

/// A legacy record in its target shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedItem {
    pub title: String,
    pub order: f64,
    pub payload: Payload,
}

impl ConvertedItem {
    /// Link target, present only for external pages.
    pub fn url(&self) -> Option<&str> {
        match &self.payload {
            Payload::External { url } => url.as_deref(),
            _ => None,
        }
    }
}

/// Classify `record` and convert it.
pub fn convert(record: &LegacyRecord) -> ConvertedItem {
    let content_type = classify(record);

    let title = match record.name() {
        "" => UNTITLED.to_string(),
        name => name.to_string(),
    };
    let order = parse_order(record.order_hint());
    let secondary = non_empty(record.secondary_hint());

    let payload = match content_type {
        ContentType::Notifications => Payload::Notifications,
        ContentType::Calendar => Payload::Calendar,
        ContentType::ProductResources => Payload::ProductResources { folder: secondary },
        ContentType::Videos => Payload::Videos { folder: secondary },
        ContentType::External => Payload::External { url: secondary },
        ContentType::Docs => Payload::Docs { folder: secondary },
        ContentType::Images => Payload::Images {
            images: image_paths(record.image_hint()),
        },
    };

    debug!(title = %title, %content_type, order, "converted legacy record");

    ConvertedItem {
        title,
        order,
        payload,
    }
}

/// Numeric order from the longest numeric prefix of the hint, so `"3a"`
/// is 3.  Anything unparsable or non-finite counts as 0, and `-0` is folded
/// into `0` so the two tie when sorting.
pub fn parse_order(hint: &str) -> f64 {
    let hint = hint.trim();
    let order = hint
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .rev()
        .find_map(|end| hint[..end].parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0);

    if order == 0.0 {
        0.0
    } else {
        order
    }
}

/// `"23, 24,,25"` becomes `images/23.png`, `images/24.png`, `images/25.png`.
pub fn image_paths(hint: &str) -> Vec<String> {
    hint.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| format!("{IMAGE_DIR}/{id}{IMAGE_EXTENSION}"))
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<ConvertedItem> for SubItem {
    fn from(item: ConvertedItem) -> Self {
        let content_type = item.payload.content_type();
        let mut sub = SubItem {
            title: item.title,
            order: item.order,
            content_type: Some(content_type),
            ..SubItem::default()
        };

        match item.payload {
            Payload::Notifications | Payload::Calendar => sub.is_module = true,
            Payload::External { url } => sub.url = url,
            Payload::ProductResources { folder }
            | Payload::Videos { folder }
            | Payload::Docs { folder } => sub.folder = folder,
            Payload::Images { images } => sub.images = images,
        }

        sub
    }
}
