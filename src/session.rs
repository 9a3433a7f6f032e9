//! Session-store collaborator boundary and the persisted paging snapshot.
//!
//! The store works with opaque string blobs; this module owns the versioned
//! encode/decode contract so the stored representation stays explicit across
//! releases instead of riding on a language-specific serialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Current snapshot encoding version.
///
/// Bump when the [`LastPaging`] wire shape changes incompatibly; snapshots
/// carrying any other version decode as absent and resolution falls back to
/// defaults.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Identity of one user session.
///
/// Mirrors the session-record key of the surrounding panel: the session hash
/// plus user id, client address, user agent, and whether this is an admin
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
   pub hash: String,
   pub user_id: i64,
   pub ip_address: String,
   pub user_agent: String,
   pub admin_session: bool,
}

/// The persisted "last paging state" snapshot.
///
/// One snapshot exists per session and records the most recent resolution for
/// *any* table; its values are only eligible as fallbacks when `table` matches
/// the view currently being resolved. Attribute values are stored raw and
/// re-validated on every read, so a single stale attribute (say, a field that
/// no longer exists) never invalidates the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastPaging {
   pub table: String,
   #[serde(default)]
   pub sort_order: Option<String>,
   #[serde(default)]
   pub sort_field: Option<String>,
   #[serde(default)]
   pub search_field: Option<String>,
   #[serde(default)]
   pub search_text: Option<String>,
   #[serde(default)]
   pub page_no: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
   v: u32,
   #[serde(flatten)]
   snapshot: LastPaging,
}

impl LastPaging {
   /// Encode as a versioned blob for the session store.
   pub fn encode(&self) -> Result<String> {
      let envelope = Envelope {
         v: SNAPSHOT_VERSION,
         snapshot: self.clone(),
      };
      Ok(serde_json::to_string(&envelope)?)
   }

   /// Decode a stored blob.
   ///
   /// Returns `None` for malformed blobs and for version mismatches — a
   /// snapshot that cannot be decoded is simply treated as absent.
   pub fn decode(blob: &str) -> Option<Self> {
      let envelope: Envelope = serde_json::from_str(blob).ok()?;
      if envelope.v != SNAPSHOT_VERSION {
         return None;
      }
      Some(envelope.snapshot)
   }
}

/// Key-value storage for per-session paging snapshots.
///
/// Implementations typically front the panel's session table or cache. Reads
/// are infallible from the resolver's point of view (a failed read is the
/// same as no snapshot); a failed write is surfaced but never blocks the
/// current response.
pub trait SessionStore {
   /// Stored blob for `key`, if any.
   fn read(&self, key: &SessionKey) -> Option<String>;

   /// Store `blob` for `key`, replacing any previous value.
   fn write(&mut self, key: &SessionKey, blob: &str) -> Result<()>;
}

/// In-process [`SessionStore`] backed by a `HashMap`.
///
/// Suitable for single-process deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
   entries: HashMap<SessionKey, String>,
}

impl MemorySessionStore {
   pub fn new() -> Self {
      Self::default()
   }
}

impl SessionStore for MemorySessionStore {
   fn read(&self, key: &SessionKey) -> Option<String> {
      self.entries.get(key).cloned()
   }

   fn write(&mut self, key: &SessionKey, blob: &str) -> Result<()> {
      self.entries.insert(key.clone(), blob.to_string());
      Ok(())
   }
}
