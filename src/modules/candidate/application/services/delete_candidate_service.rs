use async_trait::async_trait;
use tracing::{error, info};

use crate::candidate::application::ports::{
    incoming::use_cases::{DeleteCandidateError, DeleteCandidateUseCase},
    outgoing::{CandidateRepository, CandidateRepositoryError, ResumeStorage},
};
use crate::candidate::domain::CandidateId;

/// Deletes the record, then its file. If the file cannot be removed the
/// record is put back where it was, so neither outlives the other.
#[derive(Debug, Clone)]
pub struct DeleteCandidateService<R, S>
where
    R: CandidateRepository,
    S: ResumeStorage,
{
    repository: R,
    storage: S,
}

impl<R, S> DeleteCandidateService<R, S>
where
    R: CandidateRepository,
    S: ResumeStorage,
{
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R, S> DeleteCandidateUseCase for DeleteCandidateService<R, S>
where
    R: CandidateRepository + Send + Sync,
    S: ResumeStorage + Send + Sync,
{
    async fn execute(&self, candidate_id: CandidateId) -> Result<(), DeleteCandidateError> {
        let removed = self
            .repository
            .delete_candidate(candidate_id)
            .await
            .map_err(|e| match e {
                CandidateRepositoryError::NotFound => DeleteCandidateError::CandidateNotFound,
                other => DeleteCandidateError::RepositoryError(other.to_string()),
            })?;

        let location = removed.resume_location().clone();

        if let Err(storage_err) = self.storage.remove_resume(&location).await {
            error!(
                %candidate_id,
                %location,
                error = %storage_err,
                "Failed to remove resume, restoring candidate"
            );

            if let Err(restore_err) = self.repository.restore_candidate(removed).await {
                error!(
                    %candidate_id,
                    error = %restore_err,
                    "Failed to restore candidate after storage failure"
                );
                return Err(DeleteCandidateError::RepositoryError(restore_err.to_string()));
            }

            return Err(DeleteCandidateError::StorageError(storage_err.to_string()));
        }

        info!(%candidate_id, "Candidate deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use mockall::predicate::*;

    use crate::candidate::application::ports::outgoing::{RemovedCandidate, ResumeStorageError};
    use crate::candidate::domain::ResumeLocation;
    use crate::tests::support::candidate_fixtures::sample_record;
    use crate::tests::support::mocks::MockCandidateRepositoryMock;

    #[derive(Clone, Default)]
    struct RemoveOnlyStorage {
        fail: bool,
        removed: Arc<Mutex<Vec<ResumeLocation>>>,
    }

    #[async_trait]
    impl ResumeStorage for RemoveOnlyStorage {
        async fn store_resume(
            &self,
            _candidate_id: CandidateId,
            _original_filename: &str,
            _bytes: &[u8],
        ) -> Result<ResumeLocation, ResumeStorageError> {
            unimplemented!("not used")
        }

        async fn remove_resume(&self, location: &ResumeLocation) -> Result<(), ResumeStorageError> {
            self.removed.lock().unwrap().push(location.clone());
            if self.fail {
                Err(ResumeStorageError::RemoveFailed("permission denied".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn removed_candidate() -> RemovedCandidate {
        RemovedCandidate {
            record: sample_record("Margaret"),
            position: 3,
        }
    }

    #[tokio::test]
    async fn deletes_record_then_file() {
        let removed = removed_candidate();
        let id = removed.record.id;
        let location = removed.resume_location().clone();

        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_delete_candidate()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(removed.clone()));
        repo.expect_restore_candidate().never();

        let storage = RemoveOnlyStorage::default();
        let service = DeleteCandidateService::new(repo, storage.clone());

        assert_eq!(service.execute(id).await, Ok(()));
        assert_eq!(*storage.removed.lock().unwrap(), vec![location]);
    }

    #[tokio::test]
    async fn unknown_candidate_touches_no_file() {
        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_delete_candidate()
            .returning(|_| Err(CandidateRepositoryError::NotFound));

        let storage = RemoveOnlyStorage::default();
        let service = DeleteCandidateService::new(repo, storage.clone());

        assert_eq!(
            service.execute(CandidateId::new_random()).await,
            Err(DeleteCandidateError::CandidateNotFound)
        );
        assert!(storage.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_restores_record() {
        let removed = removed_candidate();
        let id = removed.record.id;
        let expected_restore = removed.clone();

        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_delete_candidate()
            .returning(move |_| Ok(removed.clone()));
        repo.expect_restore_candidate()
            .with(eq(expected_restore))
            .times(1)
            .returning(|removed| Ok(removed.record));

        let storage = RemoveOnlyStorage {
            fail: true,
            ..Default::default()
        };
        let service = DeleteCandidateService::new(repo, storage);

        let result = service.execute(id).await;

        assert!(matches!(
            result,
            Err(DeleteCandidateError::StorageError(msg)) if msg.contains("permission denied")
        ));
    }

    #[tokio::test]
    async fn failed_restore_is_a_repository_error() {
        let removed = removed_candidate();
        let id = removed.record.id;

        let mut repo = MockCandidateRepositoryMock::new();
        repo.expect_delete_candidate()
            .returning(move |_| Ok(removed.clone()));
        repo.expect_restore_candidate()
            .returning(|removed| Err(CandidateRepositoryError::DuplicateId(removed.record.id)));

        let storage = RemoveOnlyStorage {
            fail: true,
            ..Default::default()
        };
        let service = DeleteCandidateService::new(repo, storage);

        assert!(matches!(
            service.execute(id).await,
            Err(DeleteCandidateError::RepositoryError(_))
        ));
    }
}
