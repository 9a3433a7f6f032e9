//! Ordered field-key → caption mapping for one list view.

use indexmap::IndexMap;

/// The selectable fields of a table view, in UI display order.
///
/// Keys are column identifiers (optionally qualified, e.g. `c.loginname`);
/// values are human-readable captions. Insertion order is preserved and is
/// the order presentation helpers emit options in.
///
/// # Examples
///
/// ```
/// use paging_toolkit::FieldList;
///
/// let fields = FieldList::new()
///    .with_field("loginname", "Username")
///    .with_field("diskspace", "Disk space");
///
/// assert!(fields.contains("diskspace"));
/// assert_eq!(fields.key_at(0), Some("loginname"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
   fields: IndexMap<String, String>,
}

impl FieldList {
   /// Create an empty field list.
   pub fn new() -> Self {
      Self::default()
   }

   /// Add a field, chainable. Re-adding a key replaces its caption in place.
   pub fn with_field(mut self, key: impl Into<String>, caption: impl Into<String>) -> Self {
      self.fields.insert(key.into(), caption.into());
      self
   }

   /// Whether `key` is one of the selectable fields.
   pub fn contains(&self, key: &str) -> bool {
      self.fields.contains_key(key)
   }

   /// Field key at `index` in display order.
   pub fn key_at(&self, index: usize) -> Option<&str> {
      self.fields.get_index(index).map(|(key, _)| key.as_str())
   }

   /// First field key in display order.
   pub fn first_key(&self) -> Option<&str> {
      self.key_at(0)
   }

   /// Caption for `key`, if present.
   pub fn caption(&self, key: &str) -> Option<&str> {
      self.fields.get(key).map(String::as_str)
   }

   pub fn len(&self) -> usize {
      self.fields.len()
   }

   pub fn is_empty(&self) -> bool {
      self.fields.is_empty()
   }

   /// Iterate `(key, caption)` pairs in display order.
   pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
      self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
   }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldList {
   fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
      Self {
         fields: iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn preserves_insertion_order() {
      let fields = FieldList::new()
         .with_field("z_last", "Z")
         .with_field("a_first", "A");

      assert_eq!(fields.key_at(0), Some("z_last"));
      assert_eq!(fields.key_at(1), Some("a_first"));
      assert_eq!(fields.first_key(), Some("z_last"));
   }

   #[test]
   fn readding_a_key_keeps_its_position() {
      let fields = FieldList::new()
         .with_field("name", "Name")
         .with_field("email", "Email")
         .with_field("name", "Full name");

      assert_eq!(fields.len(), 2);
      assert_eq!(fields.key_at(0), Some("name"));
      assert_eq!(fields.caption("name"), Some("Full name"));
   }

   #[test]
   fn from_iterator_of_pairs() {
      let fields: FieldList = [("id", "ID"), ("name", "Name")].into_iter().collect();
      assert_eq!(fields.len(), 2);
      assert!(fields.contains("id"));
   }

   #[test]
   fn key_at_out_of_range() {
      let fields = FieldList::new().with_field("only", "Only");
      assert_eq!(fields.key_at(5), None);
   }

   #[test]
   fn empty_list() {
      let fields = FieldList::new();
      assert!(fields.is_empty());
      assert_eq!(fields.first_key(), None);
   }
}
