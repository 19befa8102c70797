// src/api/state.rs
use crate::config::AppConfig;
use crate::executor::{CodeExecutor, RemoteExecutor};
use crate::generator::{RandomSource, ThreadRandom};
use crate::session::PracticeSession;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub executor: Arc<dyn CodeExecutor>,
    pub rng: Arc<dyn RandomSource>,
    pub sessions: Arc<RwLock<HashMap<Uuid, PracticeSession>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let executor = RemoteExecutor::new(Client::new(), config.execution_url.clone());
        Self::with_parts(config, Arc::new(executor), Arc::new(ThreadRandom))
    }

    pub fn with_parts(
        config: AppConfig,
        executor: Arc<dyn CodeExecutor>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            executor,
            rng,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drops sessions idle for longer than `session_idle_secs`. Returns how many went.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let max_idle = chrono::Duration::seconds(self.config.session_idle_secs as i64);
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, max_idle));
        before - sessions.len()
    }

    /// Runs `evict_idle` every `every` on the current runtime.
    pub fn spawn_session_sweeper(&self, every: Duration) -> actix_rt::task::JoinHandle<()> {
        let state = self.clone();
        actix_rt::spawn(async move {
            let mut ticker = actix_rt::time::interval(every);
            loop {
                ticker.tick().await;
                let evicted = state.evict_idle(Utc::now()).await;
                if evicted > 0 {
                    log::info!("Evicted {} idle sessions", evicted);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionDefaults;

    fn idle_session(minutes_ago: i64) -> PracticeSession {
        let mut session = PracticeSession::new(&SessionDefaults::default(), 100);
        session.touch(Utc::now() - chrono::Duration::minutes(minutes_ago));
        session
    }

    #[actix_rt::test]
    async fn test_evict_idle_sessions() {
        let state = AppState::new(AppConfig::default());
        let fresh = Uuid::new_v4();
        let stale = Uuid::new_v4();
        let busy = Uuid::new_v4();
        {
            let mut sessions = state.sessions.write().await;
            sessions.insert(fresh, idle_session(1));
            sessions.insert(stale, idle_session(45));
            let mut running = idle_session(45);
            running.is_submitting = true;
            sessions.insert(busy, running);
        }

        assert_eq!(state.evict_idle(Utc::now()).await, 1);

        let sessions = state.sessions.read().await;
        assert!(sessions.contains_key(&fresh));
        assert!(sessions.contains_key(&busy));
        assert!(!sessions.contains_key(&stale));
    }

    #[actix_rt::test]
    async fn test_sweeper_runs_on_interval() {
        let mut config = AppConfig::default();
        config.session_idle_secs = 60;
        let state = AppState::new(config);
        state.sessions.write().await.insert(Uuid::new_v4(), idle_session(5));

        let handle = state.spawn_session_sweeper(Duration::from_millis(10));
        actix_rt::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert!(state.sessions.read().await.is_empty());
    }
}
