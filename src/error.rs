/// Result type alias for paging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for paging-state resolution and persistence.
///
/// Attribute resolution itself never fails — invalid request or session values
/// silently fall through the precedence chain to a valid default. The variants
/// here cover construction-time validation and session-store persistence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// A pager cannot be built without at least one selectable field.
   #[error("field list must contain at least one field")]
   EmptyFieldList,

   /// Encoding or decoding the persisted paging snapshot failed.
   #[error("paging snapshot serialization failed: {0}")]
   Snapshot(#[from] serde_json::Error),

   /// The session store rejected the snapshot write.
   ///
   /// Persistence is best-effort continuity for the next request; the current
   /// request's resolved state remains fully usable when this occurs.
   #[error("session store write failed: {0}")]
   SessionWrite(String),
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_empty_field_list_message() {
      let err = Error::EmptyFieldList;
      assert!(err.to_string().contains("at least one field"));
   }

   #[test]
   fn test_session_write_message() {
      let err = Error::SessionWrite("connection reset".into());
      assert!(err.to_string().contains("connection reset"));
   }

   #[test]
   fn test_snapshot_error_from_serde() {
      let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
      let err = Error::from(parse_err);
      assert!(matches!(err, Error::Snapshot(_)));
   }
}
