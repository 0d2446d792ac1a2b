//! The calendar module placeholder.

use chrono::Utc;

use crate::catalog::Catalog;
use crate::constants::{CALENDAR_COLLECTION, CALENDAR_MODULE_ID, CALENDAR_MODULE_TITLE};
use crate::document::to_fields;
use crate::error::Result;
use crate::models::CalendarModule;

impl Catalog {
    /// Write (or refresh) the fixed calendar module record.
    pub async fn put_calendar_module(&self) -> Result<CalendarModule> {
        let module = CalendarModule {
            title: CALENDAR_MODULE_TITLE.to_string(),
            updated_at: Utc::now().timestamp_millis(),
        };
        self.documents()
            .set(CALENDAR_COLLECTION, CALENDAR_MODULE_ID, to_fields(&module)?)
            .await?;
        Ok(module)
    }

    pub async fn calendar_module(&self) -> Result<Option<CalendarModule>> {
        self.documents()
            .get(CALENDAR_COLLECTION, CALENDAR_MODULE_ID)
            .await?
            .map(|doc| doc.decode())
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::memory::MemoryDocumentStore;

    #[tokio::test]
    async fn calendar_module_is_a_single_fixed_record() {
        let store = Arc::new(MemoryDocumentStore::new());
        let catalog = Catalog::new(store.clone());

        assert!(catalog.calendar_module().await.unwrap().is_none());
        catalog.put_calendar_module().await.unwrap();
        catalog.put_calendar_module().await.unwrap();

        assert_eq!(store.count(CALENDAR_COLLECTION).await, 1);
        let module = catalog.calendar_module().await.unwrap().unwrap();
        assert_eq!(module.title, "Calendar of Events");
    }
}
