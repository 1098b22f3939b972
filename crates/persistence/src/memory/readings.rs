//! In-memory reading and medical record store.

use async_trait::async_trait;
use domain::models::{
    DailyTally, MedicalRecord, NewMedicalRecord, NewReading, Reading, RecentScan,
};
use domain::stores::ReadingStore;
use domain::StoreError;
use tokio::sync::Mutex;

use super::table::Table;

#[derive(Default)]
struct State {
    readings: Table<String, Reading>,
    records: Table<i64, MedicalRecord>,
    next_record_id: i64,
}

/// Process-local [`ReadingStore`]. Starts empty.
#[derive(Default)]
pub struct InMemoryReadingStore {
    state: Mutex<State>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_reading(&self, id: &str) -> Option<Reading> {
        self.state.lock().await.readings.get(&id.to_string()).cloned()
    }

    pub async fn reading_count(&self) -> usize {
        self.state.lock().await.readings.len()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn create_reading(&self, reading: NewReading) -> Result<String, StoreError> {
        let mut state = self.state.lock().await;
        let id = shared::crypto::generate_record_id();
        if !state
            .readings
            .insert(id.clone(), reading.into_reading(id.clone()))
        {
            return Err(StoreError::Conflict(format!("reading id {id} already exists")));
        }
        Ok(id)
    }

    async fn daily_stats(&self) -> Result<DailyTally, StoreError> {
        let since = shared::time::start_of_today();
        let state = self.state.lock().await;

        let mut tally = DailyTally::with_known_buckets();
        for reading in state.readings.iter().filter(|r| r.created_at >= since) {
            tally.record(&reading.classification);
        }
        Ok(tally)
    }

    async fn recent_scans(&self, limit: usize) -> Result<Vec<RecentScan>, StoreError> {
        let since = shared::time::start_of_today();
        let state = self.state.lock().await;

        let mut today: Vec<&Reading> = state
            .readings
            .iter()
            .filter(|r| r.created_at >= since)
            .collect();
        // Stable sort over insertion order, so equal timestamps keep newest-inserted first.
        today.reverse();
        today.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(today.into_iter().take(limit).map(RecentScan::from).collect())
    }

    async fn create_medical_record(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, StoreError> {
        let mut state = self.state.lock().await;
        state.next_record_id += 1;
        let stored = record.into_record(state.next_record_id);
        state.records.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, StoreError> {
        let state = self.state.lock().await;
        let mut records: Vec<MedicalRecord> = state
            .records
            .iter()
            .rev()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.scan_date.cmp(&a.scan_date));
        Ok(records)
    }
}
