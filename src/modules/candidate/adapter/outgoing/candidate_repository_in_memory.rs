use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::candidate::application::ports::outgoing::{
    CandidateRepository, CandidateRepositoryError, RemovedCandidate,
};
use crate::candidate::domain::{
    CandidateId, CandidateListFilter, CandidateProfile, CandidateRecord, ResumeLocation,
};

// ============================================================================
// Table
// ============================================================================

/// Rows keyed by insertion position, so iteration is creation order.
#[derive(Default)]
struct CandidateTable {
    rows: BTreeMap<u64, CandidateRecord>,
    positions: HashMap<CandidateId, u64>,
    next_position: u64,
}

impl CandidateTable {
    fn insert_at(&mut self, position: u64, record: CandidateRecord) {
        self.positions.insert(record.id, position);
        self.rows.insert(position, record);
    }
}

// ============================================================================
// Repository Implementation
// ============================================================================

/// Process-local candidate table. Everything is lost on restart.
///
/// Writers (`next_id`, create, delete, restore) hold the write lock for the
/// whole mutation; readers clone what they need under the read lock.
#[derive(Clone, Default)]
pub struct CandidateRepositoryInMemory {
    table: Arc<RwLock<CandidateTable>>,
}

impl CandidateRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_profile(profile: &CandidateProfile) -> Result<(), CandidateRepositoryError> {
    if profile.full_name.trim().is_empty() {
        return Err(CandidateRepositoryError::InvalidRecord(
            "full name is empty".to_string(),
        ));
    }

    if !profile.years_of_experience.is_finite() || profile.years_of_experience < 0.0 {
        return Err(CandidateRepositoryError::InvalidRecord(format!(
            "years of experience must be non-negative, got {}",
            profile.years_of_experience
        )));
    }

    if profile.skill_set.iter().any(|skill| skill.is_empty()) {
        return Err(CandidateRepositoryError::InvalidRecord(
            "skill set contains an empty entry".to_string(),
        ));
    }

    Ok(())
}

#[async_trait]
impl CandidateRepository for CandidateRepositoryInMemory {
    async fn next_id(&self) -> CandidateId {
        let table = self.table.write().await;
        loop {
            let id = CandidateId::new_random();
            if !table.positions.contains_key(&id) {
                return id;
            }
        }
    }

    async fn create_candidate(
        &self,
        id: CandidateId,
        profile: CandidateProfile,
        resume_location: ResumeLocation,
    ) -> Result<CandidateRecord, CandidateRepositoryError> {
        check_profile(&profile)?;

        let mut table = self.table.write().await;
        if table.positions.contains_key(&id) {
            return Err(CandidateRepositoryError::DuplicateId(id));
        }

        let position = table.next_position;
        table.next_position += 1;

        let record = CandidateRecord::new(id, profile, resume_location);
        table.insert_at(position, record.clone());

        Ok(record)
    }

    async fn list_candidates(
        &self,
        filter: CandidateListFilter,
    ) -> Result<Vec<CandidateRecord>, CandidateRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    async fn fetch_candidate_by_id(
        &self,
        id: CandidateId,
    ) -> Result<CandidateRecord, CandidateRepositoryError> {
        let table = self.table.read().await;
        table
            .positions
            .get(&id)
            .and_then(|position| table.rows.get(position))
            .cloned()
            .ok_or(CandidateRepositoryError::NotFound)
    }

    async fn delete_candidate(
        &self,
        id: CandidateId,
    ) -> Result<RemovedCandidate, CandidateRepositoryError> {
        let mut table = self.table.write().await;
        let position = table
            .positions
            .remove(&id)
            .ok_or(CandidateRepositoryError::NotFound)?;
        let record = table
            .rows
            .remove(&position)
            .ok_or(CandidateRepositoryError::NotFound)?;

        Ok(RemovedCandidate { record, position })
    }

    async fn restore_candidate(
        &self,
        removed: RemovedCandidate,
    ) -> Result<CandidateRecord, CandidateRepositoryError> {
        let mut table = self.table.write().await;
        let RemovedCandidate { record, position } = removed;

        if table.positions.contains_key(&record.id) {
            return Err(CandidateRepositoryError::DuplicateId(record.id));
        }
        if table.rows.contains_key(&position) {
            return Err(CandidateRepositoryError::InvalidRecord(format!(
                "position {position} is occupied"
            )));
        }

        table.insert_at(position, record.clone());
        Ok(record)
    }
}
