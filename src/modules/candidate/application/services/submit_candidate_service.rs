use async_trait::async_trait;
use tracing::{error, info};

use crate::candidate::application::ports::{
    incoming::use_cases::{SubmitCandidateCommand, SubmitCandidateError, SubmitCandidateUseCase},
    outgoing::{CandidateRepository, CandidateRepositoryError, ResumeStorage},
};
use crate::candidate::domain::CandidateRecord;

/// Writes the resume first, then the record. A record that cannot be created
/// takes its freshly written file with it.
#[derive(Debug, Clone)]
pub struct SubmitCandidateService<R, S>
where
    R: CandidateRepository,
    S: ResumeStorage,
{
    repository: R,
    storage: S,
}

impl<R, S> SubmitCandidateService<R, S>
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
impl<R, S> SubmitCandidateUseCase for SubmitCandidateService<R, S>
where
    R: CandidateRepository + Send + Sync,
    S: ResumeStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitCandidateCommand,
    ) -> Result<CandidateRecord, SubmitCandidateError> {
        let candidate_id = self.repository.next_id().await;

        // 1) Persist the file under the candidate's id.
        let location = self
            .storage
            .store_resume(
                candidate_id,
                command.original_filename(),
                command.resume_bytes(),
            )
            .await
            .map_err(|e| SubmitCandidateError::StorageError(e.to_string()))?;

        // 2) Create the record pointing at it.
        let created = self
            .repository
            .create_candidate(candidate_id, command.into_profile(), location.clone())
            .await;

        match created {
            Ok(record) => {
                info!(%candidate_id, "Candidate created");
                Ok(record)
            }
            Err(err) => {
                // 3) Roll back the file.
                if let Err(cleanup) = self.storage.remove_resume(&location).await {
                    error!(
                        %candidate_id,
                        %location,
                        error = %cleanup,
                        "Failed to remove resume after rejected candidate"
                    );
                }

                Err(match err {
                    CandidateRepositoryError::InvalidRecord(msg) => {
                        SubmitCandidateError::InvalidCandidate(msg)
                    }
                    other => SubmitCandidateError::RepositoryError(other.to_string()),
                })
            }
        }
    }
}
