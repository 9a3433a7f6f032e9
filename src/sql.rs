//! SQL fragment generation from resolved paging state.
//!
//! Fragments are literal SQL text with `?` placeholders plus the bind values
//! to supply alongside them; values never get string-escaped into the SQL
//! itself. Identifier quoting is applied per dotted segment so qualified
//! field keys like `c.loginname` work.

use serde_json::Value as JsonValue;

use crate::state::{Pager, split_operator};

/// A SQL fragment plus its bind values.
///
/// `sql` contains one `?` placeholder per entry of `bind_values`, in order.
/// An empty clause (no search text) has empty `sql` and no values.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlClause {
   pub sql: String,
   pub bind_values: Vec<JsonValue>,
}

impl SqlClause {
   /// The empty clause, appended verbatim by callers without effect.
   pub fn empty() -> Self {
      Self {
         sql: String::new(),
         bind_values: Vec::new(),
      }
   }

   pub fn is_empty(&self) -> bool {
      self.sql.is_empty()
   }
}

impl Pager {
   /// Build the search condition for the current state.
   ///
   /// Returns the empty clause when no search text is set. Otherwise the
   /// fragment starts with `WHERE`, or with `AND` when `append` is true and
   /// the caller's query already has a WHERE clause.
   ///
   /// A leading `<`, `>`, or `=` on the search text selects comparison mode.
   /// Fields whose key contains `diskspace` or `traffic` store scaled units,
   /// so a numeric search value is multiplied by 1024 or 1024×1024 and
   /// compared (with `=` when no operator was given). Everything else becomes
   /// a `LIKE` match with `*` wildcards translated to `%`.
   pub fn sql_where(&self, append: bool) -> SqlClause {
      if self.search_text.is_empty() {
         return SqlClause::empty();
      }

      let prefix = if append { "AND" } else { "WHERE" };
      let field = quote_dotted_identifier(&self.search_field);
      let (operator, value_text) = split_operator(&self.search_text);

      // Unit scaling by field-naming convention: *_diskspace columns hold
      // KiB, *_traffic columns hold bytes entered as MiB.
      let scale: Option<i64> = if self.search_field.contains("diskspace") {
         Some(1024)
      } else if self.search_field.contains("traffic") {
         Some(1024 * 1024)
      } else {
         None
      };

      if let Some(factor) = scale
         && let Some(scaled) = value_text
            .parse::<i64>()
            .ok()
            .and_then(|n| n.checked_mul(factor))
      {
         // Scaling forces comparison mode even without an explicit operator.
         let op = operator.unwrap_or('=');
         return SqlClause {
            sql: format!("{prefix} {field} {op} ?"),
            bind_values: vec![JsonValue::from(scaled)],
         };
      }

      if let Some(op) = operator
         && let Some(number) = parse_number(value_text)
      {
         return SqlClause {
            sql: format!("{prefix} {field} {op} ?"),
            bind_values: vec![number],
         };
      }

      // Pattern match on the full search text, operator prefix included.
      let pattern = self.search_text.replace('*', "%");
      SqlClause {
         sql: format!("{prefix} {field} LIKE ?"),
         bind_values: vec![JsonValue::from(pattern)],
      }
   }

   /// Build the ORDER BY fragment for the current state.
   ///
   /// `natural` overrides the instance default from the configuration when
   /// set. Natural mode emits a padding expression that approximates
   /// human-expected ordering of mixed alphanumeric values (`file2` before
   /// `file10`); it is a best-effort heuristic, not a full natural sort.
   pub fn sql_order_by(&self, natural: Option<bool>) -> String {
      let field = quote_dotted_identifier(&self.sort_field);
      let order = self.sort_order.as_sql();

      if natural.unwrap_or(self.natural_sort) {
         format!(
            "ORDER BY CONCAT( IF( ASCII( LEFT( {field}, 5 ) ) > 57, LEFT( {field}, 1 ), 0 ), \
             IF( ASCII( RIGHT( {field}, 1 ) ) > 57, LPAD( {field}, 255, '0' ), \
             LPAD( CONCAT( {field}, '-' ), 255, '0' ) )) {order}"
         )
      } else {
         format!("ORDER BY {field} {order}")
      }
   }

   /// Reserved: paging is applied by row filtering in the caller, not by SQL
   /// LIMIT. Always returns the empty string.
   pub fn sql_limit(&self) -> String {
      String::new()
   }
}

/// Quote an identifier per dotted segment, adding missing leading/trailing
/// quote characters so already-quoted segments pass through unchanged.
pub(crate) fn quote_dotted_identifier(name: &str) -> String {
   name
      .split('.')
      .map(quote_segment)
      .collect::<Vec<_>>()
      .join(".")
}

fn quote_segment(segment: &str) -> String {
   let mut quoted = String::with_capacity(segment.len() + 2);
   if !segment.starts_with('"') {
      quoted.push('"');
   }
   quoted.push_str(segment);
   if !segment.ends_with('"') {
      quoted.push('"');
   }
   quoted
}

/// Explicit numeric parse for comparison mode: integer first, then finite
/// float. Non-numeric text is not coerced.
fn parse_number(text: &str) -> Option<JsonValue> {
   if let Ok(n) = text.parse::<i64>() {
      return Some(JsonValue::from(n));
   }
   text
      .parse::<f64>()
      .ok()
      .filter(|f| f.is_finite())
      .and_then(serde_json::Number::from_f64)
      .map(JsonValue::Number)
}
