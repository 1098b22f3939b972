//! Medical record creation and patient history.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::errors::DomainError;
use crate::models::{MedicalRecord, MedicalRecordInput, NewMedicalRecord};
use crate::services::classification::classify;
use crate::stores::ReadingStore;

#[derive(Clone)]
pub struct MedicalRecordService {
    store: Arc<dyn ReadingStore>,
}

impl MedicalRecordService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Stores a record with a server-computed diagnosis.
    pub async fn create_medical_record(
        &self,
        input: MedicalRecordInput,
    ) -> Result<MedicalRecord, DomainError> {
        if input.patient_id.trim().is_empty() {
            return Err(DomainError::validation("patient_id required"));
        }
        shared::validation::validate_t_score(input.t_score)?;

        let record = NewMedicalRecord {
            diagnosis: classify(input.t_score).as_str().to_string(),
            scan_date: input.scan_date.unwrap_or_else(Utc::now),
            patient_id: input.patient_id,
            t_score: input.t_score,
            notes: input.notes,
        };

        let stored = self.store.create_medical_record(record).await?;
        info!(
            record_id = stored.id,
            patient_id = %stored.patient_id,
            diagnosis = %stored.diagnosis,
            "Medical record created"
        );
        Ok(stored)
    }

    /// A patient's history, most recent scan first.
    pub async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, DomainError> {
        Ok(self.store.patient_records(patient_id).await?)
    }
}
