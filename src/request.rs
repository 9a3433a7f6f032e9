//! Request-parameter collaborator boundary.
//!
//! The resolver never touches ambient request state; the surrounding web
//! handler implements [`RequestSource`] over whatever query-string or form
//! parsing it already does.

use std::collections::HashMap;

/// Request parameter names recognized by the resolver.
pub mod params {
   pub const SORT_ORDER: &str = "sortorder";
   pub const SORT_FIELD: &str = "sortfield";
   pub const SEARCH_FIELD: &str = "searchfield";
   pub const SEARCH_TEXT: &str = "searchtext";
   pub const PAGE_NO: &str = "pageno";
}

/// Optional string-valued parameter lookups from the current request.
pub trait RequestSource {
   /// Raw value of the named parameter, if the request carried one.
   fn param(&self, name: &str) -> Option<&str>;
}

/// A request with no parameters. Resolution falls straight through to the
/// persisted snapshot or defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl RequestSource for NoParams {
   fn param(&self, _name: &str) -> Option<&str> {
      None
   }
}

/// Map-backed [`RequestSource`] for handlers and tests.
///
/// # Examples
///
/// ```
/// use paging_toolkit::{ParamMap, RequestSource, params};
///
/// let request = ParamMap::new()
///    .with(params::SORT_ORDER, "desc")
///    .with(params::PAGE_NO, "3");
///
/// assert_eq!(request.param("sortorder"), Some("desc"));
/// assert_eq!(request.param("searchtext"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
   values: HashMap<String, String>,
}

impl ParamMap {
   pub fn new() -> Self {
      Self::default()
   }

   /// Set a parameter, chainable.
   pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
      self.values.insert(name.into(), value.into());
      self
   }
}

impl RequestSource for ParamMap {
   fn param(&self, name: &str) -> Option<&str> {
      self.values.get(name).map(String::as_str)
   }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
   fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
      Self {
         values: iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
      }
   }
}
