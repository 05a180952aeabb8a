use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Pending,
    Downloading,
    Chunking,
    Transcribing,
    Merging,
    Completed,
    Stopped,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Downloading => "DOWNLOADING",
            JobStatus::Chunking => "CHUNKING",
            JobStatus::Transcribing => "TRANSCRIBING",
            JobStatus::Merging => "MERGING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Stopped => "STOPPED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// Terminal states are never left once entered.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Stopped | JobStatus::Failed
        )
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(JobStatus::Pending),
            "DOWNLOADING" => Ok(JobStatus::Downloading),
            "CHUNKING" => Ok(JobStatus::Chunking),
            "TRANSCRIBING" => Ok(JobStatus::Transcribing),
            "MERGING" => Ok(JobStatus::Merging),
            "COMPLETED" => Ok(JobStatus::Completed),
            "STOPPED" => Ok(JobStatus::Stopped),
            "FAILED" => Ok(JobStatus::Failed),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
