//! Navigation history: a root-anchored path of menu page ids.

/// Page id of the menu tree root. Always the first history entry.
pub const ROOT_PAGE_ID: &str = "root";

/// Ordered list of page ids from the root to the current page.
///
/// The only permitted mutations are `push`, `pop` (a no-op at the root) and
/// `reset`; the first entry is `"root"` at all times.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    pages: Vec<String>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            pages: vec![ROOT_PAGE_ID.to_string()],
        }
    }

    /// Append a page id to the history.
    pub fn push(&mut self, id: impl Into<String>) {
        self.pages.push(id.into());
    }

    /// Remove the last entry unless only the root remains.
    pub fn pop(&mut self) {
        if self.pages.len() > 1 {
            self.pages.pop();
        }
    }

    /// Return to `["root"]`.
    pub fn reset(&mut self) {
        self.pages.truncate(1);
    }

    /// Id of the current page (the last history entry).
    pub fn current(&self) -> &str {
        self.pages.last().map(String::as_str).unwrap_or(ROOT_PAGE_ID)
    }

    /// The full path, root first.
    pub fn path(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_at_root(&self) -> bool {
        self.pages.len() == 1
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}
