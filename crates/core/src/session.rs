//! Session state and its storage backends
//!
//! The session is one document: the logged-in user plus the bearer token the
//! server handed out, stored and cleared as a unit. There is no separate
//! "authenticated" flag anywhere — being authenticated IS having a stored
//! session, so partial updates cannot be observed.

use crate::error::{CoreError, CoreResult};
use crate::types::Usuario;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Logged-in session, persisted as a single JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Usuario,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    pub fn new(user: Usuario, token: Option<String>) -> Self {
        Self { user, token }
    }
}

/// Durable storage for the session document
///
/// `store` and `clear` replace the whole document. Backends are synchronous;
/// callers never await on session state.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> CoreResult<Option<Session>>;
    fn store(&self, session: &Session) -> CoreResult<()>;
    fn clear(&self) -> CoreResult<()>;
}

/// In-memory store for tests and short-lived tools
#[derive(Default)]
pub struct MemorySessionStore {
    cell: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> CoreResult<Option<Session>> {
        Ok(self.cell.read().expect("session cell poisoned").clone())
    }

    fn store(&self, session: &Session) -> CoreResult<()> {
        *self.cell.write().expect("session cell poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.cell.write().expect("session cell poisoned") = None;
        Ok(())
    }
}

/// File-backed store under the platform data directory
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader sees either the previous document or the new one, never a torn
/// write.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location: `<data_dir>/contrato/session.json`,
    /// with `CONTRATO_STATE_DIR` overriding the base directory.
    pub fn at_default_path() -> CoreResult<Self> {
        let base = if let Ok(dir) = std::env::var("CONTRATO_STATE_DIR") {
            PathBuf::from(dir)
        } else {
            directories::ProjectDirs::from("com", "contratomais", "contrato")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| CoreError::internal_error("no usable data directory"))?
        };
        Ok(Self::new(base.join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> CoreResult<Option<Session>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn store(&self, session: &Session) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Shared in-process view of the session, write-through to its store
///
/// Cheap to clone; the client and every consumer hold the same cell. Writes
/// hit the store first and only then the cache, so a failed store leaves the
/// cached state untouched.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<SessionHandleInner>,
}

struct SessionHandleInner {
    cached: RwLock<Option<Session>>,
    store: Box<dyn SessionStore>,
}

impl SessionHandle {
    /// Wrap a store, priming the cache from whatever it holds
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let initial = store.load().unwrap_or_else(|err| {
            tracing::warn!("failed to load stored session, starting logged out: {err}");
            None
        });
        Self {
            inner: Arc::new(SessionHandleInner {
                cached: RwLock::new(initial),
                store: Box::new(store),
            }),
        }
    }

    /// Handle over an in-memory store, logged out
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::new())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.cached.read().expect("session cache poisoned").clone()
    }

    pub fn user(&self) -> Option<Usuario> {
        self.current().map(|s| s.user)
    }

    pub fn token(&self) -> Option<String> {
        self.current().and_then(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.cached.read().expect("session cache poisoned").is_some()
    }

    /// Replace the session as a unit
    pub fn replace(&self, session: Session) -> CoreResult<()> {
        self.inner.store.store(&session)?;
        *self.inner.cached.write().expect("session cache poisoned") = Some(session);
        Ok(())
    }

    /// Swap in a fresh user record, keeping the current token
    pub fn refresh_user(&self, user: Usuario) -> CoreResult<()> {
        let token = self.token();
        self.replace(Session::new(user, token))
    }

    /// Drop the session as a unit
    ///
    /// The cache is cleared even when the store fails: the caller asked to be
    /// logged out and must not keep acting authenticated.
    pub fn clear(&self) -> CoreResult<()> {
        *self.inner.cached.write().expect("session cache poisoned") = None;
        self.inner.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario() -> Usuario {
        Usuario {
            id: 1,
            nome_completo: "Maria Souza".into(),
            email: "maria@exemplo.com.br".into(),
        }
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);

        let session = Session::new(usuario(), Some("tok-123".into()));
        store.store(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load().unwrap(), None);

        let session = Session::new(usuario(), None);
        store.store(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // clearing an already-clear store is fine
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/deeper/session.json"));
        store.store(&Session::new(usuario(), None)).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn handle_primes_cache_from_store() {
        let store = MemorySessionStore::new();
        store
            .store(&Session::new(usuario(), Some("tok".into())))
            .unwrap();

        let handle = SessionHandle::new(store);
        assert!(handle.is_authenticated());
        assert_eq!(handle.token().as_deref(), Some("tok"));
        assert_eq!(handle.user().unwrap().nome_completo, "Maria Souza");
    }

    #[test]
    fn handle_replace_and_clear_are_units() {
        let handle = SessionHandle::in_memory();
        assert!(!handle.is_authenticated());
        assert_eq!(handle.token(), None);

        handle
            .replace(Session::new(usuario(), Some("tok".into())))
            .unwrap();
        assert!(handle.is_authenticated());

        handle.clear().unwrap();
        assert!(!handle.is_authenticated());
        assert_eq!(handle.user(), None);
        assert_eq!(handle.token(), None);
    }

    #[test]
    fn refresh_user_keeps_token() {
        let handle = SessionHandle::in_memory();
        handle
            .replace(Session::new(usuario(), Some("tok".into())))
            .unwrap();

        let mut updated = usuario();
        updated.nome_completo = "Maria S. Lima".into();
        handle.refresh_user(updated.clone()).unwrap();

        let session = handle.current().unwrap();
        assert_eq!(session.user, updated);
        assert_eq!(session.token.as_deref(), Some("tok"));
    }
}
