//! Click resolution for search results.
//!
//! The action is a pure function of the record's kind.  A result that lacks
//! the field its action needs is reported as an error at this point instead
//! of opening an empty viewer.

use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::search::SearchRecord;

const VIDEO_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";
const VIDEO_EMBED_PARAMS: &str = "rel=0&showinfo=0&modestbranding=1&playsinline=1&autoplay=1";

/// The view a clicked result opens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClickAction {
    /// Open the category detail view.
    OpenCategory { category_id: String },
    /// Open the category detail view, then show one sub-item's content.
    OpenSubItem {
        category_id: String,
        title: String,
        content: String,
    },
    PlayVideo { title: String, video_id: String },
    OpenFile { title: String, url: String },
}

impl ClickAction {
    /// Player URL for [`ClickAction::PlayVideo`].
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Self::PlayVideo { video_id, .. } => Some(format!(
                "{VIDEO_EMBED_BASE}/{video_id}?{VIDEO_EMBED_PARAMS}"
            )),
            _ => None,
        }
    }
}

/// Map a search record to the view it opens.
pub fn resolve(record: &SearchRecord) -> Result<ClickAction> {
    match record {
        SearchRecord::Category { id, .. } => Ok(ClickAction::OpenCategory {
            category_id: id.clone(),
        }),
        SearchRecord::SubItem {
            category_id,
            title,
            item,
        } => Ok(ClickAction::OpenSubItem {
            category_id: category_id.clone(),
            title: title.clone(),
            content: item.content.clone(),
        }),
        SearchRecord::Video {
            title, video_id, ..
        } => {
            if video_id.trim().is_empty() {
                return Err(ClientError::MissingVideoId {
                    title: title.clone(),
                });
            }
            Ok(ClickAction::PlayVideo {
                title: title.clone(),
                video_id: video_id.clone(),
            })
        }
        SearchRecord::File { title, url, .. } => {
            if url.trim().is_empty() {
                return Err(ClientError::MissingFileUrl {
                    title: title.clone(),
                });
            }
            Ok(ClickAction::OpenFile {
                title: title.clone(),
                url: url.clone(),
            })
        }
    }
}
