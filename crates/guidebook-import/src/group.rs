//! Grouping of converted records by destination category.

use std::collections::HashMap;

use crate::classify::{is_module_name, CALENDAR_NAME, NOTIFICATIONS_NAME};
use crate::convert::ConvertedItem;

/// Group name for records without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Where a group is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// One notification per item; no category is created.
    Notifications,
    /// The fixed calendar placeholder; items are discarded.
    Calendar,
    /// A category keyed by the group name.
    Category,
}

impl Destination {
    pub fn for_group(name: &str) -> Self {
        if is_module_name(name, NOTIFICATIONS_NAME) {
            Self::Notifications
        } else if is_module_name(name, CALENDAR_NAME) {
            Self::Calendar
        } else {
            Self::Category
        }
    }
}

/// Converted records sharing one category name, sorted by order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub items: Vec<ConvertedItem>,
}

impl Group {
    pub fn destination(&self) -> Destination {
        Destination::for_group(&self.name)
    }
}

/// Partition `(category name, item)` pairs into groups in order of first
/// appearance, then sort every group by ascending order.
///
/// The sort is stable: items with equal order keep their input sequence.
pub fn group_by_category<I>(entries: I) -> Vec<Group>
where
    I: IntoIterator<Item = (String, ConvertedItem)>,
{
    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (name, item) in entries {
        let name = match name.trim() {
            "" => UNCATEGORIZED.to_string(),
            trimmed => trimmed.to_string(),
        };
        let slot = *positions.entry(name.clone()).or_insert_with(|| {
            groups.push(Group {
                name,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    for group in &mut groups {
        group.items.sort_by(|a, b| a.order.total_cmp(&b.order));
    }

    groups
}
