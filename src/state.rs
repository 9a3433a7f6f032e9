//! Paging-state resolution.
//!
//! [`Pager::resolve`] decides — for one request against one table view —
//! which sort field/order, search field/text, and page number are in effect.
//! Each attribute is taken from the current request when present and valid,
//! else from the persisted per-session snapshot when it belongs to the same
//! table, else from a static default. The resolved tuple is then written back
//! to the session store for the next request.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fields::FieldList;
use crate::request::{RequestSource, params};
use crate::session::{LastPaging, SessionKey, SessionStore};

/// Sort direction for the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
   /// Ascending order (smallest first)
   #[default]
   Asc,
   /// Descending order (largest first)
   Desc,
}

impl SortOrder {
   /// Parse a request or snapshot value, case-insensitively.
   ///
   /// Anything other than `asc`/`desc` is rejected so it falls through the
   /// precedence chain.
   pub fn parse(value: &str) -> Option<Self> {
      if value.eq_ignore_ascii_case("asc") {
         Some(SortOrder::Asc)
      } else if value.eq_ignore_ascii_case("desc") {
         Some(SortOrder::Desc)
      } else {
         None
      }
   }

   /// SQL keyword form, `ASC`/`DESC`.
   pub fn as_sql(self) -> &'static str {
      match self {
         SortOrder::Asc => "ASC",
         SortOrder::Desc => "DESC",
      }
   }

   /// Request-parameter form, `asc`/`desc`.
   pub fn as_param(self) -> &'static str {
      match self {
         SortOrder::Asc => "asc",
         SortOrder::Desc => "desc",
      }
   }
}

/// Static configuration for one table view's pager.
///
/// # Examples
///
/// ```
/// use paging_toolkit::{FieldList, PagerConfig, SortOrder};
///
/// let fields = FieldList::new()
///    .with_field("loginname", "Username")
///    .with_field("diskspace_used", "Disk space");
///
/// let config = PagerConfig::new("panel_customers", fields)
///    .entries_per_page(25)
///    .default_order(SortOrder::Desc);
/// ```
#[derive(Debug, Clone)]
pub struct PagerConfig {
   pub table: String,
   pub fields: FieldList,
   /// Rows per page; `0` disables paging entirely (every row is shown).
   pub entries_per_page: u32,
   /// Instance default for natural-order ORDER BY, overridable per call.
   pub natural_sort: bool,
   /// Index into `fields` of the default sort field.
   pub default_field_index: usize,
   pub default_order: SortOrder,
}

impl PagerConfig {
   pub fn new(table: impl Into<String>, fields: FieldList) -> Self {
      Self {
         table: table.into(),
         fields,
         entries_per_page: 0,
         natural_sort: false,
         default_field_index: 0,
         default_order: SortOrder::Asc,
      }
   }

   /// Set the page size, chainable.
   pub fn entries_per_page(mut self, entries: u32) -> Self {
      self.entries_per_page = entries;
      self
   }

   /// Enable or disable natural-order sorting by default, chainable.
   pub fn natural_sort(mut self, enabled: bool) -> Self {
      self.natural_sort = enabled;
      self
   }

   /// Set the default sort field by display index, chainable.
   pub fn default_field_index(mut self, index: usize) -> Self {
      self.default_field_index = index;
      self
   }

   /// Set the default sort order, chainable.
   pub fn default_order(mut self, order: SortOrder) -> Self {
      self.default_order = order;
      self
   }
}

/// Outcome of one paging-state resolution.
pub struct Resolved {
   /// The fully resolved pager, usable regardless of persistence outcome.
   pub pager: Pager,
   /// Result of writing the snapshot back to the session store. Snapshot
   /// persistence is best-effort continuity for the next request, so a
   /// failure here never blocks rendering the current page.
   pub persist: Result<()>,
}

/// Resolved paging/sorting/searching state for one table view.
///
/// Built exclusively through [`Pager::resolve`]; afterwards the only mutation
/// is [`set_total_entries`](Pager::set_total_entries), which may clamp the
/// page number once the filtered result set has been counted.
#[derive(Debug, Clone)]
pub struct Pager {
   pub(crate) table: String,
   pub(crate) fields: FieldList,
   pub(crate) entries_per_page: u32,
   pub(crate) total_entries: u64,
   pub(crate) sort_field: String,
   pub(crate) sort_order: SortOrder,
   pub(crate) search_field: String,
   pub(crate) search_text: String,
   pub(crate) page_no: u32,
   pub(crate) natural_sort: bool,
}

impl Pager {
   /// Resolve the paging state for the current request and persist it.
   ///
   /// Precedence per attribute: valid request parameter, then the persisted
   /// snapshot when it belongs to the same table, then the configured
   /// default. Invalid values at any level fall through silently.
   ///
   /// The only error is [`Error::EmptyFieldList`]; a session-store write
   /// failure is reported through [`Resolved::persist`] instead.
   pub fn resolve(
      config: PagerConfig,
      key: &SessionKey,
      request: &dyn RequestSource,
      store: &mut dyn SessionStore,
   ) -> Result<Resolved> {
      if config.fields.is_empty() {
         return Err(Error::EmptyFieldList);
      }

      // Snapshot continuity: a snapshot persisted for another table must not
      // leak into this view's resolution.
      let last = store
         .read(key)
         .and_then(|blob| LastPaging::decode(&blob))
         .filter(|snapshot| snapshot.table == config.table);

      let sort_order = request
         .param(params::SORT_ORDER)
         .and_then(SortOrder::parse)
         .or_else(|| {
            last
               .as_ref()
               .and_then(|s| s.sort_order.as_deref())
               .and_then(SortOrder::parse)
         })
         .unwrap_or(config.default_order);

      let sort_field = pick_field(
         request.param(params::SORT_FIELD),
         last.as_ref().and_then(|s| s.sort_field.as_deref()),
         &config.fields,
      )
      .or_else(|| config.fields.key_at(config.default_field_index))
      // An out-of-range default index falls back to the first field, which
      // exists because the list is non-empty.
      .or_else(|| config.fields.first_key())
      .unwrap_or_default()
      .to_string();

      let search_field = pick_field(
         request.param(params::SEARCH_FIELD),
         last.as_ref().and_then(|s| s.search_field.as_deref()),
         &config.fields,
      )
      .or_else(|| config.fields.first_key())
      .unwrap_or_default()
      .to_string();

      let search_text = request
         .param(params::SEARCH_TEXT)
         .map(str::trim)
         .filter(|text| text.is_empty() || is_valid_search_text(text))
         .map(str::to_string)
         .or_else(|| {
            last
               .as_ref()
               .and_then(|s| s.search_text.as_deref())
               .filter(|text| is_valid_search_text(text))
               .map(str::to_string)
         })
         .unwrap_or_default();

      let page_no = request
         .param(params::PAGE_NO)
         .and_then(|raw| raw.trim().parse::<i64>().ok())
         .and_then(valid_page_no)
         .or_else(|| last.as_ref().and_then(|s| s.page_no).and_then(valid_page_no))
         .unwrap_or(1);

      debug!(
         table = %config.table,
         sort_field = %sort_field,
         sort_order = sort_order.as_param(),
         search_field = %search_field,
         page_no,
         "resolved paging state"
      );

      // Unconditionally replace the snapshot with the newly resolved state,
      // switching its table to the current view.
      let snapshot = LastPaging {
         table: config.table.clone(),
         sort_order: Some(sort_order.as_param().to_string()),
         sort_field: Some(sort_field.clone()),
         search_field: Some(search_field.clone()),
         search_text: Some(search_text.clone()),
         page_no: Some(i64::from(page_no)),
      };
      let persist = snapshot
         .encode()
         .and_then(|blob| store.write(key, &blob));
      if let Err(err) = &persist {
         warn!(table = %config.table, error = %err, "failed to persist paging snapshot");
      }

      Ok(Resolved {
         pager: Pager {
            table: config.table,
            fields: config.fields,
            entries_per_page: config.entries_per_page,
            total_entries: 0,
            sort_field,
            sort_order,
            search_field,
            search_text,
            page_no,
            natural_sort: config.natural_sort,
         },
         persist,
      })
   }

   pub fn table(&self) -> &str {
      &self.table
   }

   pub fn fields(&self) -> &FieldList {
      &self.fields
   }

   pub fn entries_per_page(&self) -> u32 {
      self.entries_per_page
   }

   pub fn total_entries(&self) -> u64 {
      self.total_entries
   }

   pub fn sort_field(&self) -> &str {
      &self.sort_field
   }

   pub fn sort_order(&self) -> SortOrder {
      self.sort_order
   }

   pub fn search_field(&self) -> &str {
      &self.search_field
   }

   pub fn search_text(&self) -> &str {
      &self.search_text
   }

   /// Current page, 1-based.
   pub fn page_no(&self) -> u32 {
      self.page_no
   }

   pub fn uses_natural_sort(&self) -> bool {
      self.natural_sort
   }
}

/// Pick the first of request/snapshot values that names an existing field.
fn pick_field<'a>(
   request_value: Option<&'a str>,
   snapshot_value: Option<&'a str>,
   fields: &FieldList,
) -> Option<&'a str> {
   request_value
      .filter(|f| fields.contains(f))
      .or_else(|| snapshot_value.filter(|f| fields.contains(f)))
}

/// Page numbers are 1-based; zero and negative values fall through.
fn valid_page_no(value: i64) -> Option<u32> {
   u32::try_from(value).ok().filter(|&n| n >= 1)
}

/// Validate non-empty search text: an optional leading comparison operator
/// (`<`, `>`, `=`) followed by one or more word characters, unicode
/// letters/digits, `-`, `_`, `@`, `*`, or `.`.
pub(crate) fn is_valid_search_text(text: &str) -> bool {
   let rest = text
      .strip_prefix(['<', '>', '='])
      .unwrap_or(text);
   !rest.is_empty()
      && rest
         .chars()
         .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '@' | '*' | '.'))
}

/// Split a leading comparison operator off the search text, if present.
pub(crate) fn split_operator(text: &str) -> (Option<char>, &str) {
   let mut chars = text.chars();
   match chars.next() {
      Some(op @ ('<' | '>' | '=')) => (Some(op), chars.as_str()),
      _ => (None, text),
   }
}
