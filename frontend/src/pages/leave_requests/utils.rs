use crate::api::LeaveRequestResponse;
use crate::options::{leave_type_label, reason_label};

pub const FIRST_PAGE: usize = 1;

/// Text a search term is matched against: type, reason and approver joined by spaces.
/// Type and reason appear both as codes and as the labels the table shows.
pub fn search_haystack(item: &LeaveRequestResponse) -> String {
    format!(
        "{} {} {} | {} {} {}",
        item.request_type,
        item.reason,
        item.approver,
        leave_type_label(&item.request_type),
        reason_label(&item.reason),
        item.approver
    )
    .to_lowercase()
}

pub fn matches_search(item: &LeaveRequestResponse, term: &str) -> bool {
    term.is_empty() || search_haystack(item).contains(&term.to_lowercase())
}

/// Keeps the original order.
pub fn filter_requests(items: &[LeaveRequestResponse], term: &str) -> Vec<LeaveRequestResponse> {
    items
        .iter()
        .filter(|item| matches_search(item, term))
        .cloned()
        .collect()
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    /// Zero-based position of the first item within the filtered list.
    pub first_index: usize,
}

impl<T> PageSlice<T> {
    pub fn has_prev(&self) -> bool {
        self.page > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn row_number(&self, offset: usize) -> usize {
        self.first_index + offset + 1
    }
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(page, total_pages);
    let first_index = (page - 1) * page_size;
    let items = items
        .iter()
        .skip(first_index)
        .take(page_size)
        .cloned()
        .collect();
    PageSlice {
        items,
        page,
        total_pages,
        first_index,
    }
}

/// Search term and current page of a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: FIRST_PAGE,
        }
    }
}

impl ListQuery {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = FIRST_PAGE;
    }

    // The list may have shrunk since the page was chosen, so clamp before stepping.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page, total_pages);
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page, total_pages);
        if self.page > FIRST_PAGE {
            self.page -= 1;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

pub fn format_duration(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
