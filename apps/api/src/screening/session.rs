//! Analysis sessions: retained extraction results, re-scored on demand.
//!
//! In-memory only; sessions live as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::screening::jd_analyzer::JobRequirements;
use crate::screening::resume_analyzer::ParsedResume;

/// Everything needed to re-score an analysis without new completion calls.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub requirements: JobRequirements,
    pub jd_warning: Option<String>,
    pub resumes: Vec<ParsedResume>,
}

impl AnalysisSession {
    pub fn new(
        requirements: JobRequirements,
        jd_warning: Option<String>,
        resumes: Vec<ParsedResume>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            requirements,
            jd_warning,
            resumes,
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<AnalysisSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: AnalysisSession) -> Arc<AnalysisSession> {
        let session = Arc::new(session);
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<AnalysisSession>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
