//! Drawing Gallery Model
//!
//! Submitted drawings, kept apart from the task list.

use crate::error::Result;
use crate::models::DrawingRecord;
use crate::repository::DrawingRepository;
use crate::storage::KeyValueStore;

/// A gallery entry. `id` only keys the rendered row; deletion matches on the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub id: u32,
    pub record: DrawingRecord,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    drawings: Vec<Drawing>,
    next_id: u32,
}

impl Gallery {
    pub fn from_records(records: Vec<DrawingRecord>) -> Self {
        let mut gallery = Self::default();
        for record in records {
            gallery.push(record);
        }
        gallery
    }

    pub fn load_from<S: KeyValueStore>(store: &S) -> Self {
        Self::from_records(DrawingRepository::drawings(store).load())
    }

    pub fn save_to<S: KeyValueStore>(&self, store: &S) -> Result<()> {
        DrawingRepository::drawings(store).save(&self.to_records())
    }

    pub fn push(&mut self, record: DrawingRecord) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.drawings.push(Drawing { id, record });
        id
    }

    /// Remove every entry with this exact URL, returning how many went
    pub fn remove_url(&mut self, url: &str) -> usize {
        let before = self.drawings.len();
        self.drawings.retain(|d| d.record.image_url != url);
        before - self.drawings.len()
    }

    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    pub fn to_records(&self) -> Vec<DrawingRecord> {
        self.drawings.iter().map(|d| d.record.clone()).collect()
    }

    /// Persist the gallery with `record` appended, then append it in memory.
    /// A failed write leaves the gallery untouched so a retry cannot duplicate it.
    pub fn submit_and_save<S: KeyValueStore>(&mut self, store: &S, record: DrawingRecord) -> Result<u32> {
        let mut records = self.to_records();
        records.push(record.clone());
        DrawingRepository::drawings(store).save(&records)?;
        Ok(self.push(record))
    }

    /// Remove every entry with this URL and rewrite storage if anything went.
    /// On `Err` the removal is kept in memory.
    pub fn remove_url_and_save<S: KeyValueStore>(&mut self, store: &S, url: &str) -> Result<usize> {
        let removed = self.remove_url(url);
        if removed > 0 {
            self.save_to(store)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DRAWINGS_KEY;
    use crate::models::sample_png_uri;
    use crate::storage::memory::MemoryStore;

    fn record(tag: u8) -> DrawingRecord {
        DrawingRecord::from_data_uri(sample_png_uri(tag)).unwrap()
    }

    #[test]
    fn test_submit_then_delete_restores_length() {
        let store = MemoryStore::default();
        let mut gallery = Gallery::load_from(&store);
        gallery.push(record(1));
        gallery.save_to(&store).unwrap();
        let before = DrawingRepository::drawings(&store).load().len();

        let url = sample_png_uri(2);
        gallery.push(DrawingRecord::from_data_uri(url.clone()).unwrap());
        gallery.save_to(&store).unwrap();
        let stored = DrawingRepository::drawings(&store).load();
        assert_eq!(stored.len(), before + 1);
        assert!(stored.iter().any(|d| d.image_url == url));

        assert_eq!(gallery.remove_url(&url), 1);
        gallery.save_to(&store).unwrap();
        assert_eq!(DrawingRepository::drawings(&store).load().len(), before);
    }

    #[test]
    fn test_delete_removes_all_duplicates() {
        let mut gallery = Gallery::default();
        gallery.push(record(1));
        gallery.push(record(2));
        gallery.push(record(1));
        assert_eq!(gallery.remove_url(&sample_png_uri(1)), 2);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.drawings()[0].record, record(2));
    }

    #[test]
    fn test_remove_unknown_url_is_noop() {
        let mut gallery = Gallery::default();
        gallery.push(record(3));
        assert_eq!(gallery.remove_url("data:image/png;base64,AAAA"), 0);
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_submit_and_delete_reach_storage() {
        let store = MemoryStore::default();
        let mut gallery = Gallery::default();

        gallery.submit_and_save(&store, record(1)).unwrap();
        gallery.submit_and_save(&store, record(2)).unwrap();
        assert_eq!(
            store.raw(DRAWINGS_KEY).unwrap(),
            format!("[\"{}\",\"{}\"]", sample_png_uri(1), sample_png_uri(2))
        );

        assert_eq!(gallery.remove_url_and_save(&store, &sample_png_uri(1)).unwrap(), 1);
        assert_eq!(store.raw(DRAWINGS_KEY).unwrap(), format!("[\"{}\"]", sample_png_uri(2)));
    }

    #[test]
    fn test_deleting_unknown_url_does_not_write() {
        let store = MemoryStore::default();
        let mut gallery = Gallery::default();
        assert_eq!(gallery.remove_url_and_save(&store, "data:,").unwrap(), 0);
        assert_eq!(store.raw(DRAWINGS_KEY), None);
    }

    #[test]
    fn test_failed_submit_leaves_gallery_unchanged() {
        let store = MemoryStore::failing();
        let mut gallery = Gallery::default();
        assert!(gallery.submit_and_save(&store, record(4)).is_err());
        assert!(gallery.submit_and_save(&store, record(4)).is_err());
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_load_keeps_stored_order() {
        let raw = format!("[\"{}\",\"{}\"]", sample_png_uri(5), sample_png_uri(6));
        let store = MemoryStore::with_item(DRAWINGS_KEY, &raw);
        let gallery = Gallery::load_from(&store);
        assert_eq!(gallery.to_records(), vec![record(5), record(6)]);
        assert_ne!(gallery.drawings()[0].id, gallery.drawings()[1].id);
    }
}
