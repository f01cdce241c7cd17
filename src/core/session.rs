use crate::core::conversation::{AnswerOptions, Session, Transition};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub type UserId = i64;

/// Where the transport layer keeps in-flight conversations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, user_id: UserId) -> Result<Option<Session>>;
    async fn save(&self, user_id: UserId, session: Session) -> Result<()>;

    /// Read-modify-write of one user's session as a single step. `apply`
    /// receives the current session and returns the one to keep (`None`
    /// drops it) along with its result.
    async fn update<T, F>(&self, user_id: UserId, apply: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(Option<Session>) -> (Option<Session>, Result<T>) + Send;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<UserId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: UserId) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(&user_id).cloned())
    }

    async fn save(&self, user_id: UserId, session: Session) -> Result<()> {
        self.sessions.write().await.insert(user_id, session);
        Ok(())
    }

    async fn update<T, F>(&self, user_id: UserId, apply: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(Option<Session>) -> (Option<Session>, Result<T>) + Send,
    {
        // 整個轉換期間持有寫鎖，同一使用者的併發回答不會互相覆蓋
        let mut sessions = self.sessions.write().await;
        let (kept, result) = apply(sessions.remove(&user_id));
        if let Some(session) = kept {
            sessions.insert(user_id, session);
        }
        result
    }
}

/// Drives sessions held in a [`SessionStore`], one per user.
pub struct ProfileCollector<S: SessionStore> {
    store: S,
    options: AnswerOptions,
}

impl<S: SessionStore> ProfileCollector<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, AnswerOptions::default())
    }

    pub fn with_options(store: S, options: AnswerOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 重新開始，覆蓋既有的對話
    pub async fn start(&self, user_id: UserId) -> Result<Session> {
        let session = Session::new();
        self.store.save(user_id, session.clone()).await?;
        tracing::debug!("Started profile session for user {}", user_id);
        Ok(session)
    }

    /// Applies one answer. Users without a session get a fresh one first.
    pub async fn handle(&self, user_id: UserId, input: &str) -> Result<Transition> {
        let options = &self.options;
        self.store
            .update(user_id, move |current| {
                let mut session = current.unwrap_or_default();
                let transition = session.answer(input, options);
                (keep_open(session), transition)
            })
            .await
    }

    pub async fn cancel(&self, user_id: UserId) -> Result<Transition> {
        let transition = self
            .store
            .update(user_id, |current| match current {
                Some(mut session) => {
                    let transition = session.cancel();
                    (keep_open(session), transition)
                }
                None => (None, Ok(Transition::Cancelled)),
            })
            .await?;

        tracing::info!("Profile session cancelled for user {}", user_id);
        Ok(transition)
    }
}

/// 完成或取消的對話不保留
fn keep_open(session: Session) -> Option<Session> {
    if session.state().is_terminal() {
        None
    } else {
        Some(session)
    }
}
