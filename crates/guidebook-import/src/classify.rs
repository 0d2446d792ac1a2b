//! Content-type classification of legacy records.
//!
//! Rules are evaluated top to bottom and the first match wins.  Name rules
//! come before hint rules.  A record no rule matches is treated as an image
//! page, so every record ends up with a type.

use guidebook_store::ContentType;

use crate::legacy::LegacyRecord;

pub const NOTIFICATIONS_NAME: &str = "CORPORATE NOTIFICATIONS";
pub const CALENDAR_NAME: &str = "CALENDAR OF EVENTS";
pub const PRODUCT_RESOURCES_NAME: &str = "Product Related Resources";
pub const VIDEOS_NAME: &str = "Videos";

pub const EXTERNAL_HINT: &str = "www";
pub const DOCS_HINT: &str = "docs";

type Rule = (fn(&LegacyRecord) -> bool, ContentType);

static RULES: &[Rule] = &[
    (is_notifications, ContentType::Notifications),
    (is_calendar, ContentType::Calendar),
    (is_product_resources, ContentType::ProductResources),
    (is_videos, ContentType::Videos),
    (is_external, ContentType::External),
    (is_docs, ContentType::Docs),
    (is_image_list, ContentType::Images),
];

/// Content type of a legacy record.
pub fn classify(record: &LegacyRecord) -> ContentType {
    RULES
        .iter()
        .find(|(matches, _)| matches(record))
        .map_or(ContentType::Images, |(_, content_type)| *content_type)
}

/// Case-insensitive comparison against an upper-case module name.
pub fn is_module_name(name: &str, module: &str) -> bool {
    name.trim().to_uppercase() == module
}

fn is_notifications(record: &LegacyRecord) -> bool {
    is_module_name(record.name(), NOTIFICATIONS_NAME)
}

fn is_calendar(record: &LegacyRecord) -> bool {
    is_module_name(record.name(), CALENDAR_NAME)
}

fn is_product_resources(record: &LegacyRecord) -> bool {
    record.name() == PRODUCT_RESOURCES_NAME
}

fn is_videos(record: &LegacyRecord) -> bool {
    record.name() == VIDEOS_NAME
}

fn is_external(record: &LegacyRecord) -> bool {
    record.image_hint() == EXTERNAL_HINT
}

fn is_docs(record: &LegacyRecord) -> bool {
    record.image_hint() == DOCS_HINT
}

/// `"7"` or `"23,24,25"`.
fn is_image_list(record: &LegacyRecord) -> bool {
    let hint = record.image_hint();
    !hint.is_empty()
        && hint.split(',').all(|token| {
            let token = token.trim();
            !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, img: &str) -> LegacyRecord {
        LegacyRecord {
            name: Some(name.to_string()),
            image_hint: Some(img.to_string()),
            ..LegacyRecord::default()
        }
    }

    #[test]
    fn module_names_are_case_insensitive() {
        assert_eq!(
            classify(&record("Corporate Notifications", "")),
            ContentType::Notifications
        );
        assert_eq!(
            classify(&record("calendar of events", "")),
            ContentType::Calendar
        );
    }

    #[test]
    fn name_rules_beat_hint_rules() {
        assert_eq!(
            classify(&record("CORPORATE NOTIFICATIONS", "www")),
            ContentType::Notifications
        );
        assert_eq!(classify(&record("Videos", "docs")), ContentType::Videos);
    }

    #[test]
    fn folder_names_are_exact() {
        assert_eq!(
            classify(&record("Product Related Resources", "")),
            ContentType::ProductResources
        );
        assert_eq!(
            classify(&record("product related resources", "")),
            ContentType::Images
        );
        assert_eq!(classify(&record("VIDEOS", "")), ContentType::Images);
    }

    #[test]
    fn hint_rules() {
        assert_eq!(classify(&record("Supplier site", "www")), ContentType::External);
        assert_eq!(classify(&record("Spec sheets", "docs")), ContentType::Docs);
        assert_eq!(classify(&record("Gallery", "23,24,25")), ContentType::Images);
        assert_eq!(classify(&record("Cover", "7")), ContentType::Images);
    }

    #[test]
    fn unclassifiable_records_fall_back_to_images() {
        assert_eq!(classify(&LegacyRecord::default()), ContentType::Images);
        assert_eq!(classify(&record("Odd", "banner.jpg")), ContentType::Images);
    }

    #[test]
    fn image_list_shape() {
        assert!(is_image_list(&record("", "1")));
        assert!(is_image_list(&record("", "1, 2,3")));
        assert!(!is_image_list(&record("", "")));
        assert!(!is_image_list(&record("", "1,,2")));
        assert!(!is_image_list(&record("", "a,2")));
    }
}
