//! # paging-toolkit
//!
//! Paging, sorting, and search state for tabular list views in multi-user
//! admin panels: resolves the effective state from request parameters and a
//! persisted per-session snapshot, then generates SQL fragments and
//! presentation descriptors consistent with it.
//!
//! ## Core Types
//!
//! - **[`Pager`]**: resolved state for one table view, built via [`Pager::resolve`]
//! - **[`PagerConfig`]**: table name, selectable [`FieldList`], page size, defaults
//! - **[`SessionStore`]** / **[`RequestSource`]**: collaborator seams for the
//!   session backend and the request parameter source
//! - **[`SqlClause`]**: a `WHERE`/`AND` fragment with `?` placeholders and bind values
//! - **[`PageLink`]**, [`SortControls`], [`SearchControls`], [`ArrowIndicator`]:
//!   structured presentation data, rendered by the consumer
//!
//! ## Resolution model
//!
//! Every attribute (sort order, sort field, search field, search text, page
//! number) is resolved per request: a valid request parameter wins, else the
//! persisted snapshot when it belongs to the same table, else the configured
//! default. Invalid values never error — they fall through. The resolved
//! state is written back to the session store so the next request without
//! parameters lands on the same view.
//!
//! ```
//! use paging_toolkit::{
//!    FieldList, MemorySessionStore, PagerConfig, Pager, ParamMap, SessionKey,
//! };
//!
//! let key = SessionKey {
//!    hash: "d41d8cd9".into(),
//!    user_id: 7,
//!    ip_address: "192.0.2.1".into(),
//!    user_agent: "Mozilla/5.0".into(),
//!    admin_session: false,
//! };
//! let mut store = MemorySessionStore::new();
//!
//! let fields = FieldList::new()
//!    .with_field("loginname", "Username")
//!    .with_field("diskspace_used", "Disk space");
//! let config = PagerConfig::new("panel_customers", fields).entries_per_page(25);
//!
//! let request = ParamMap::new()
//!    .with("searchfield", "diskspace_used")
//!    .with("searchtext", ">500");
//!
//! let resolved = Pager::resolve(config, &key, &request, &mut store).unwrap();
//! let mut pager = resolved.pager;
//!
//! let condition = pager.sql_where(false);
//! assert_eq!(condition.sql, r#"WHERE "diskspace_used" > ?"#);
//!
//! pager.set_total_entries(120);
//! assert_eq!(pager.total_pages(), 5);
//! ```

mod error;
mod fields;
mod present;
mod request;
mod session;
mod sql;
mod state;
mod window;

// Re-export public types
pub use error::{Error, Result};
pub use fields::FieldList;
pub use present::{ArrowIndicator, SearchControls, SelectOption, SortControls};
pub use request::{NoParams, ParamMap, RequestSource, params};
pub use session::{LastPaging, MemorySessionStore, SNAPSHOT_VERSION, SessionKey, SessionStore};
pub use sql::SqlClause;
pub use state::{Pager, PagerConfig, Resolved, SortOrder};
pub use window::{PageLink, PageLinkKind};
