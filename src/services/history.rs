use std::collections::VecDeque;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::analysis::MenuAnalysis;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// In-memory record of recent analyses, most recent first.
///
/// Bounded: once `limit` entries are held, recording a new analysis drops the
/// oldest one.
#[derive(Debug)]
pub struct AnalysisHistory {
    entries: RwLock<VecDeque<MenuAnalysis>>,
    limit: usize,
}

impl AnalysisHistory {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(limit)),
            limit,
        }
    }

    pub async fn record(&self, analysis: MenuAnalysis) {
        let mut entries = self.entries.write().await;
        entries.push_front(analysis);
        entries.truncate(self.limit);
    }

    pub async fn list(&self) -> Vec<MenuAnalysis> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<MenuAnalysis> {
        self.entries
            .read()
            .await
            .iter()
            .find(|analysis| analysis.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
