/// Collection holding one document per menu category.
pub const MENUS_COLLECTION: &str = "menus";

/// Flat collection of corporate notifications.
pub const NOTIFICATIONS_COLLECTION: &str = "notifications";

/// Collection holding the calendar module placeholder.
pub const CALENDAR_COLLECTION: &str = "calendar";

/// Fixed document id of the calendar module placeholder.
pub const CALENDAR_MODULE_ID: &str = "module";

/// Title written to the calendar module placeholder.
pub const CALENDAR_MODULE_TITLE: &str = "Calendar of Events";

/// Prefix under which uploaded files are placed in the blob store.
pub const UPLOADS_PREFIX: &str = "uploads";

/// Default maximum blob size in bytes (50 MiB).
pub const DEFAULT_MAX_BLOB_SIZE: usize = 50 * 1024 * 1024;

/// File name of the SQLite document database.
pub const DATABASE_FILE_NAME: &str = "guidebook.db";
