//! In-memory patient directory.

use async_trait::async_trait;
use chrono::Utc;
use domain::models::{Patient, PatientInput};
use domain::stores::PatientDirectory;
use domain::StoreError;
use tokio::sync::Mutex;

use super::table::Table;

#[derive(Default)]
pub struct InMemoryPatientDirectory {
    patients: Mutex<Table<String, Patient>>,
}

impl InMemoryPatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientDirectory for InMemoryPatientDirectory {
    async fn create(&self, input: PatientInput) -> Result<Patient, StoreError> {
        let now = Utc::now();
        let patient = Patient {
            id: shared::crypto::generate_record_id(),
            nik: input.nik,
            name: input.name,
            gender: input.gender,
            birth_date: input.birth_date,
            address: input.address,
            created_at: now,
            updated_at: now,
        };

        let mut patients = self.patients.lock().await;
        if !patients.insert(patient.id.clone(), patient.clone()) {
            return Err(StoreError::Conflict(format!(
                "patient id {} already exists",
                patient.id
            )));
        }
        Ok(patient)
    }

    async fn list(&self) -> Result<Vec<Patient>, StoreError> {
        let patients = self.patients.lock().await;
        Ok(patients.iter().rev().cloned().collect())
    }

    async fn update(&self, id: &str, input: PatientInput) -> Result<Option<Patient>, StoreError> {
        let mut patients = self.patients.lock().await;
        let Some(patient) = patients.get_mut(&id.to_string()) else {
            return Ok(None);
        };
        patient.nik = input.nik;
        patient.name = input.name;
        patient.gender = input.gender;
        patient.birth_date = input.birth_date;
        patient.address = input.address;
        patient.updated_at = patient.updated_at.max(Utc::now());
        Ok(Some(patient.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.patients.lock().await.remove(&id.to_string()).is_some())
    }
}
