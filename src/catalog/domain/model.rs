use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RunStatus {
    Running,
    Completed,
    Aborted,
}

// RunSummary reports what a single cache sync did. It is only logged, the process exit
// status does not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_id: String,
    pub status: RunStatus,
    pub total: usize,
    pub found: usize,
    pub missing: usize,
    pub failed: usize,
    pub written: usize,
    pub output_path: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    pub fn start(output_path: &str) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            status: RunStatus::Running,
            total: 0,
            found: 0,
            missing: 0,
            failed: 0,
            written: 0,
            output_path: output_path.to_string(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn aborted(self) -> Self {
        self.finish(RunStatus::Aborted)
    }

    pub fn completed(self, written: usize) -> Self {
        Self { written, ..self.finish(RunStatus::Completed) }
    }

    fn finish(self, status: RunStatus) -> Self {
        Self { status, finished_at: Some(Utc::now()), ..self }
    }
}
