//! Writing prepared groups to the catalog.
//!
//! Each group is written on its own.  A failed group is recorded and the
//! run moves on; groups written earlier stay written.

use guidebook_store::{Catalog, MenuCategory, StoreError, SubItem};
use tracing::{error, info, warn};

use crate::group::{Destination, Group};

/// What a successfully written group produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Written {
    Category,
    Notifications { count: usize },
    Calendar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    Written(Written),
    /// `written` counts the notifications that were stored before the
    /// failing write.  They stay stored.
    Failed { error: String, written: usize },
}

/// Outcome of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub items: usize,
    pub status: GroupStatus,
}

impl GroupReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, GroupStatus::Failed { .. })
    }
}

/// Per-group outcomes of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of legacy records fetched.
    pub records: usize,
    pub groups: Vec<GroupReport>,
}

impl ImportSummary {
    pub fn written(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_failed()).count()
    }

    pub fn failed(&self) -> usize {
        self.groups.iter().filter(|g| g.is_failed()).count()
    }

    /// Notifications stored by this run, including those of groups that
    /// failed part-way.
    pub fn notifications_written(&self) -> usize {
        self.groups
            .iter()
            .map(|g| match g.status {
                GroupStatus::Written(Written::Notifications { count }) => count,
                GroupStatus::Failed { written, .. } => written,
                _ => 0,
            })
            .sum()
    }
}

/// Write every group in order, collecting one report per group.
pub async fn upload_groups(catalog: &Catalog, groups: Vec<Group>) -> Vec<GroupReport> {
    let mut reports = Vec::with_capacity(groups.len());

    for group in groups {
        let name = group.name.clone();
        let items = group.items.len();
        info!(category = %name, items, "Uploading category");

        let status = match write_group(catalog, group).await {
            Ok(written) => GroupStatus::Written(written),
            Err(failure) => {
                error!(
                    category = %name,
                    error = %failure.error,
                    written = failure.written,
                    "Failed to write group"
                );
                GroupStatus::Failed {
                    error: failure.error.to_string(),
                    written: failure.written,
                }
            }
        };

        reports.push(GroupReport {
            name,
            items,
            status,
        });
    }

    reports
}

/// A group write that stopped part-way.
#[derive(Debug)]
pub struct WriteFailure {
    pub error: StoreError,
    /// Documents stored before `error`.
    pub written: usize,
}

impl From<StoreError> for WriteFailure {
    fn from(error: StoreError) -> Self {
        Self { error, written: 0 }
    }
}

/// Write one group according to its destination.
///
/// Notification groups append one notification per item on every run, so
/// importing the same source twice doubles them.
pub async fn write_group(catalog: &Catalog, group: Group) -> Result<Written, WriteFailure> {
    match group.destination() {
        Destination::Notifications => {
            warn!(
                items = group.items.len(),
                "Notifications are appended, re-running the import duplicates them"
            );
            for (written, item) in group.items.iter().enumerate() {
                catalog
                    .post_notification(&item.title, Some(""), item.url())
                    .await
                    .map_err(|error| WriteFailure { error, written })?;
            }
            Ok(Written::Notifications {
                count: group.items.len(),
            })
        }
        Destination::Calendar => {
            catalog.put_calendar_module().await?;
            Ok(Written::Calendar)
        }
        Destination::Category => {
            let mut category = MenuCategory::new(group.name.clone(), group.name);
            category.items = group.items.into_iter().map(SubItem::from).collect();
            catalog.put_category(&category).await?;
            info!(category = %category.id, "Uploaded category");
            Ok(Written::Category)
        }
    }
}
