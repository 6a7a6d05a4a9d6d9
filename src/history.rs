//! Bounded in-memory history of answered queries, newest first on read

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One answered query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    pub query: String,
    pub response: String,
    pub asked_at: DateTime<Utc>,
}

/// Keeps the last `capacity` exchanges for the lifetime of the process
#[derive(Debug)]
pub struct ConversationHistory {
    entries: Mutex<VecDeque<Exchange>>,
    capacity: usize,
}

impl ConversationHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Record an exchange, evicting the oldest when full
    pub async fn record(&self, query: impl Into<String>, response: impl Into<String>) -> Exchange {
        let exchange = Exchange {
            query: query.into(),
            response: response.into(),
            asked_at: Utc::now(),
        };

        let mut entries = self.entries.lock().await;
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(exchange.clone());
        exchange
    }

    /// Most recent exchange first
    pub async fn recent(&self) -> Vec<Exchange> {
        self.entries.lock().await.iter().rev().cloned().collect()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
