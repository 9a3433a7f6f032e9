//! Page window computation: total-count revalidation, row display checks,
//! and the set of page numbers to present as navigable links.

use serde::Serialize;

use crate::state::Pager;

/// Width of the sliding number window on each side of the current page.
const WINDOW_RADIUS: u32 = 4;

/// Role of one entry in the page-link strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLinkKind {
   /// Jump to page 1.
   First,
   /// Previous page, clamped to page 1.
   Previous,
   /// A page number inside the sliding window.
   Number,
   /// Next page, clamped to the last page.
   Next,
   /// Jump to the last page.
   Last,
}

/// One navigable page-link descriptor. Rendering into markup is the
/// consumer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
   pub kind: PageLinkKind,
   /// Target page number of this link, 1-based.
   pub page: u32,
   /// True for the window entry matching the current page, which should be
   /// rendered emphasized instead of linked.
   pub current: bool,
}

impl PageLink {
   fn new(kind: PageLinkKind, page: u32) -> Self {
      Self {
         kind,
         page,
         current: false,
      }
   }
}

impl Pager {
   /// Record the total row count of the filtered result set and re-validate
   /// the page number: a current page entirely past the end resets to 1.
   pub fn set_total_entries(&mut self, total: u64) {
      self.total_entries = total;

      let first_row = u64::from(self.page_no - 1) * u64::from(self.entries_per_page);
      if first_row > total {
         self.page_no = 1;
      }
   }

   /// Whether the row at `index` (0-based) falls on the current page.
   ///
   /// Always true when paging is disabled (`entries_per_page == 0`),
   /// whatever the index.
   pub fn should_display_row(&self, index: i64) -> bool {
      if self.entries_per_page == 0 {
         return true;
      }

      let begin = i64::from(self.page_no - 1) * i64::from(self.entries_per_page);
      let end = i64::from(self.page_no) * i64::from(self.entries_per_page);
      index >= begin && index < end
   }

   /// Number of pages for the recorded total, 0 when paging is disabled.
   pub fn total_pages(&self) -> u32 {
      if self.entries_per_page == 0 {
         return 0;
      }

      let per_page = u64::from(self.entries_per_page);
      let pages = self.total_entries.div_ceil(per_page);
      u32::try_from(pages).unwrap_or(u32::MAX)
   }

   /// Build the page-link strip for the current state.
   ///
   /// Empty when paging is disabled or everything fits on one page.
   /// Otherwise: first, previous (clamped), a number window of
   /// `max(1, page−4) ..= min(total, page+4)` with the current page flagged,
   /// next (clamped), last.
   pub fn page_links(&self) -> Vec<PageLink> {
      let total_pages = self.total_pages();
      if total_pages <= 1 {
         return Vec::new();
      }

      let (start, stop) = link_window(self.page_no, total_pages);
      let mut links = Vec::with_capacity((stop - start) as usize + 5);

      links.push(PageLink::new(PageLinkKind::First, 1));
      links.push(PageLink::new(PageLinkKind::Previous, self.page_no.max(2) - 1));

      for page in start..=stop {
         links.push(PageLink {
            kind: PageLinkKind::Number,
            page,
            current: page == self.page_no,
         });
      }

      links.push(PageLink::new(
         PageLinkKind::Next,
         (self.page_no + 1).min(total_pages),
      ));
      links.push(PageLink::new(PageLinkKind::Last, total_pages));

      links
   }
}

/// Sliding window bounds around the current page, inclusive.
fn link_window(page_no: u32, total_pages: u32) -> (u32, u32) {
   let start = page_no.saturating_sub(WINDOW_RADIUS).max(1);
   let stop = page_no.saturating_add(WINDOW_RADIUS).min(total_pages);
   (start, stop)
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::fields::FieldList;
   use crate::state::SortOrder;

   fn pager(entries_per_page: u32, page_no: u32) -> Pager {
      Pager {
         table: "panel_domains".into(),
         fields: FieldList::new().with_field("domain", "Domain"),
         entries_per_page,
         total_entries: 0,
         sort_field: "domain".into(),
         sort_order: SortOrder::Asc,
         search_field: "domain".into(),
         search_text: String::new(),
         page_no,
         natural_sort: false,
      }
   }

   fn numbers(links: &[PageLink]) -> Vec<u32> {
      links
         .iter()
         .filter(|l| l.kind == PageLinkKind::Number)
         .map(|l| l.page)
         .collect()
   }

   // ─── set_total_entries ───

   #[test]
   fn page_past_the_end_resets_to_one() {
      let mut p = pager(10, 5);
      p.set_total_entries(25);
      assert_eq!(p.page_no(), 1);
      assert_eq!(p.total_entries(), 25);
   }

   #[test]
   fn page_within_range_is_kept() {
      let mut p = pager(10, 3);
      p.set_total_entries(25);
      assert_eq!(p.page_no(), 3);
   }

   #[test]
   fn boundary_page_is_kept() {
      // First row of page 5 is index 40; with exactly 40 entries the page is
      // empty but not past the end, matching the strict > comparison.
      let mut p = pager(10, 5);
      p.set_total_entries(40);
      assert_eq!(p.page_no(), 5);
   }

   // ─── should_display_row ───

   #[test]
   fn unpaged_displays_every_row() {
      let p = pager(0, 1);
      assert!(p.should_display_row(0));
      assert!(p.should_display_row(9999));
      assert!(p.should_display_row(-5));
   }

   #[test]
   fn first_page_covers_first_rows() {
      let p = pager(10, 1);
      assert!(p.should_display_row(0));
      assert!(p.should_display_row(9));
      assert!(!p.should_display_row(10));
      assert!(!p.should_display_row(-1));
   }

   #[test]
   fn later_page_covers_its_slice() {
      let p = pager(10, 3);
      assert!(!p.should_display_row(19));
      assert!(p.should_display_row(20));
      assert!(p.should_display_row(29));
      assert!(!p.should_display_row(30));
   }

   // ─── total_pages ───

   #[test]
   fn total_pages_rounds_up() {
      let mut p = pager(10, 1);
      p.set_total_entries(25);
      assert_eq!(p.total_pages(), 3);
      p.set_total_entries(30);
      assert_eq!(p.total_pages(), 3);
      p.set_total_entries(31);
      assert_eq!(p.total_pages(), 4);
   }

   #[test]
   fn total_pages_zero_when_unpaged() {
      let mut p = pager(0, 1);
      p.set_total_entries(500);
      assert_eq!(p.total_pages(), 0);
   }

   // ─── page_links ───

   #[test]
   fn no_links_when_unpaged() {
      let mut p = pager(0, 1);
      p.set_total_entries(500);
      assert!(p.page_links().is_empty());
   }

   #[test]
   fn no_links_for_a_single_page() {
      let mut p = pager(10, 1);
      p.set_total_entries(8);
      assert!(p.page_links().is_empty());
   }

   #[test]
   fn window_at_the_start_is_clamped() {
      let mut p = pager(10, 1);
      p.set_total_entries(200); // 20 pages
      let links = p.page_links();

      assert_eq!(numbers(&links), vec![1, 2, 3, 4, 5]);
      assert_eq!(links[0], PageLink { kind: PageLinkKind::First, page: 1, current: false });
      // Previous clamps to page 1 from page 1
      assert_eq!(links[1].kind, PageLinkKind::Previous);
      assert_eq!(links[1].page, 1);
   }

   #[test]
   fn window_in_the_middle_spans_both_sides() {
      let mut p = pager(10, 10);
      p.set_total_entries(200);
      let links = p.page_links();

      assert_eq!(numbers(&links), (6..=14).collect::<Vec<_>>());
      let current: Vec<u32> = links.iter().filter(|l| l.current).map(|l| l.page).collect();
      assert_eq!(current, vec![10]);
   }

   #[test]
   fn window_at_the_end_is_clamped() {
      let mut p = pager(10, 20);
      p.set_total_entries(200);
      let links = p.page_links();

      assert_eq!(numbers(&links), vec![16, 17, 18, 19, 20]);
      let last = links.last().unwrap();
      assert_eq!(last.kind, PageLinkKind::Last);
      assert_eq!(last.page, 20);
      // Next clamps to the last page from the last page
      let next = links[links.len() - 2];
      assert_eq!(next.kind, PageLinkKind::Next);
      assert_eq!(next.page, 20);
   }

   #[test]
   fn previous_and_next_step_by_one() {
      let mut p = pager(10, 10);
      p.set_total_entries(200);
      let links = p.page_links();

      assert_eq!(links[1].kind, PageLinkKind::Previous);
      assert_eq!(links[1].page, 9);
      let next = links[links.len() - 2];
      assert_eq!(next.kind, PageLinkKind::Next);
      assert_eq!(next.page, 11);
   }
}
