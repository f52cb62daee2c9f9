use crate::database::models::AttendanceRecord;
use crate::database::store::RecordStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-process `RecordStore` for exercising the attendance logic without SQLite.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<AttendanceRecord>>,
    next_id: Mutex<i64>,
    fail_writes: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AttendanceRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert_or_replace(record);
        }
        store
    }

    /// Make every subsequent `save` fail, as a broken database would.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<AttendanceRecord> {
        self.records.lock().unwrap().clone()
    }

    fn insert_or_replace(&self, mut record: AttendanceRecord) -> AttendanceRecord {
        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.user_id == record.user_id && r.date == record.date)
        {
            record.id = existing.id;
            *existing = record.clone();
            return record;
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        record.id = Some(*next_id);
        records.push(record.clone());
        record
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find_record_for_user_and_day(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.user_id == user_id && r.date == day)
            .cloned())
    }

    async fn save(&self, record: &AttendanceRecord) -> Result<AttendanceRecord> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("database is locked"));
        }
        Ok(self.insert_or_replace(record.clone()))
    }

    async fn find_records_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = self.records.lock().unwrap();
        let mut matching: Vec<AttendanceRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(matching)
    }
}
