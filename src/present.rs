//! Presentation descriptors for sort/search controls and arrow indicators.
//!
//! Plain structured data only — rendering into markup is the consuming
//! template layer's job.

use serde::Serialize;

use crate::state::{Pager, SortOrder};

/// One entry of a selector control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
   /// Request-parameter value this option submits.
   pub value: String,
   /// Human-readable label.
   pub label: String,
   /// True for the option matching the current state.
   pub selected: bool,
}

/// Data for the sort controls: a field selector plus an order selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortControls {
   pub field_options: Vec<SelectOption>,
   pub order_options: Vec<SelectOption>,
}

/// Data for the search box: a field selector plus the current search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchControls {
   pub field_options: Vec<SelectOption>,
   pub text: String,
}

/// Sort-arrow state for one field's column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowIndicator {
   pub field: String,
   /// True when the view is currently sorted ascending by this field.
   pub asc_active: bool,
   /// True when the view is currently sorted descending by this field.
   pub desc_active: bool,
}

impl Pager {
   /// Sort controls for the current state. Order labels come from the caller
   /// so the crate stays language-agnostic.
   pub fn sort_controls(&self, asc_label: &str, desc_label: &str) -> SortControls {
      SortControls {
         field_options: self.field_options(&self.sort_field),
         order_options: vec![
            SelectOption {
               value: SortOrder::Asc.as_param().to_string(),
               label: asc_label.to_string(),
               selected: self.sort_order == SortOrder::Asc,
            },
            SelectOption {
               value: SortOrder::Desc.as_param().to_string(),
               label: desc_label.to_string(),
               selected: self.sort_order == SortOrder::Desc,
            },
         ],
      }
   }

   /// Search controls for the current state.
   pub fn search_controls(&self) -> SearchControls {
      SearchControls {
         field_options: self.field_options(&self.search_field),
         text: self.search_text.clone(),
      }
   }

   /// Arrow indicators for every field, in display order.
   pub fn sort_arrows(&self) -> Vec<ArrowIndicator> {
      self
         .fields()
         .iter()
         .map(|(key, _)| self.arrow_for(key))
         .collect()
   }

   /// Arrow indicator for a single field, `None` when the field is unknown.
   pub fn sort_arrow(&self, field: &str) -> Option<ArrowIndicator> {
      self.fields().contains(field).then(|| self.arrow_for(field))
   }

   fn arrow_for(&self, field: &str) -> ArrowIndicator {
      let active = field == self.sort_field;
      ArrowIndicator {
         field: field.to_string(),
         asc_active: active && self.sort_order == SortOrder::Asc,
         desc_active: active && self.sort_order == SortOrder::Desc,
      }
   }

   fn field_options(&self, selected_key: &str) -> Vec<SelectOption> {
      self
         .fields()
         .iter()
         .map(|(key, caption)| SelectOption {
            value: key.to_string(),
            label: caption.to_string(),
            selected: key == selected_key,
         })
         .collect()
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::fields::FieldList;

   fn pager() -> Pager {
      Pager {
         table: "panel_customers".into(),
         fields: FieldList::new()
            .with_field("loginname", "Username")
            .with_field("email", "Email address"),
         entries_per_page: 25,
         total_entries: 0,
         sort_field: "email".into(),
         sort_order: SortOrder::Desc,
         search_field: "loginname".into(),
         search_text: "web*".into(),
         page_no: 1,
         natural_sort: false,
      }
   }

   #[test]
   fn sort_controls_mark_current_field_and_order() {
      let controls = pager().sort_controls("ascending", "descending");

      assert_eq!(controls.field_options.len(), 2);
      assert!(!controls.field_options[0].selected);
      assert!(controls.field_options[1].selected);
      assert_eq!(controls.field_options[1].value, "email");
      assert_eq!(controls.field_options[1].label, "Email address");

      assert_eq!(controls.order_options[0].value, "asc");
      assert_eq!(controls.order_options[0].label, "ascending");
      assert!(!controls.order_options[0].selected);
      assert!(controls.order_options[1].selected);
   }

   #[test]
   fn search_controls_carry_text_and_selected_field() {
      let controls = pager().search_controls();

      assert_eq!(controls.text, "web*");
      assert!(controls.field_options[0].selected);
      assert!(!controls.field_options[1].selected);
   }

   #[test]
   fn arrows_follow_current_sort() {
      let arrows = pager().sort_arrows();

      assert_eq!(arrows.len(), 2);
      assert_eq!(arrows[0].field, "loginname");
      assert!(!arrows[0].asc_active);
      assert!(!arrows[0].desc_active);
      assert_eq!(arrows[1].field, "email");
      assert!(!arrows[1].asc_active);
      assert!(arrows[1].desc_active);
   }

   #[test]
   fn single_arrow_lookup() {
      let p = pager();
      let arrow = p.sort_arrow("email").unwrap();
      assert!(arrow.desc_active);
      assert!(p.sort_arrow("nonexistent").is_none());
   }

   #[test]
   fn descriptors_serialize_to_camel_case() {
      let arrows = pager().sort_arrows();
      let json = serde_json::to_value(&arrows[1]).unwrap();
      assert_eq!(json["field"], "email");
      assert_eq!(json["ascActive"], false);
      assert_eq!(json["descActive"], true);
   }
}
