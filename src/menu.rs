//! Menu tree node types and path resolution.
//!
//! A page's children map button ids to either nested pages or terminal
//! actions; the layout lists the ids row by row in render order. The tree is
//! rebuilt from scratch after every step, so a page is never mutated in
//! place.

use std::collections::HashMap;

use crate::error::WizardError;
use crate::event::Command;

/// What kind of interaction a page expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Buttons navigate to child pages.
    Category,
    /// Buttons store a decoded value in the field named by the page id.
    Select,
    /// Free text parsed as a whole number.
    IntInput,
    /// Free text parsed as a number.
    FloatInput,
    /// Free text stored verbatim.
    StrInput,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Select => "select",
            Self::IntInput => "int input",
            Self::FloatInput => "float input",
            Self::StrInput => "string input",
        }
    }
}

/// A terminal button: a label plus an optionally attached command.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuAction {
    pub label: String,
    pub command: Option<Command>,
}

impl MenuAction {
    pub fn new(label: impl Into<String>, command: Option<Command>) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// A child of a page: either a nested page or a terminal action.
#[derive(Debug, Clone)]
pub enum MenuNode {
    Page(MenuPage),
    Action(MenuAction),
}

/// A rendered button descriptor: id, label and attached command, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: String,
    pub label: String,
    pub command: Option<Command>,
}

/// One page of the menu tree.
#[derive(Debug, Clone)]
pub struct MenuPage {
    pub id: String,
    pub kind: PageKind,
    pub title: String,
    pub children: HashMap<String, MenuNode>,
    /// Ordered rows of child ids; every id must exist in `children`.
    pub layout: Vec<Vec<String>>,
    /// Set on pages where the caller should render the chart alongside the
    /// menu (the config is expected to be presentable at this point).
    pub shows_chart: bool,
}

impl MenuPage {
    pub fn new(id: impl Into<String>, kind: PageKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            children: HashMap::new(),
            layout: Vec::new(),
            shows_chart: false,
        }
    }

    pub fn child(&self, id: &str) -> Option<&MenuNode> {
        self.children.get(id)
    }

    pub fn child_page(&self, id: &str) -> Option<&MenuPage> {
        match self.children.get(id) {
            Some(MenuNode::Page(page)) => Some(page),
            _ => None,
        }
    }

    /// True when the page carries a finish button (tagged with `Validate`).
    pub fn has_finish_action(&self) -> bool {
        self.children.values().any(|node| {
            matches!(
                node,
                MenuNode::Action(action) if action.command == Some(Command::Validate)
            )
        })
    }

    /// Walk the tree along a navigation path. `path[0]` must be this page's
    /// own id (the root); a missing child or a path through an action means
    /// the tree and the history disagree, which is a defect.
    pub fn resolve(&self, path: &[String]) -> Result<&MenuPage, WizardError> {
        let mut current = self;
        for id in path.iter().skip(1) {
            current = match current.child(id) {
                Some(MenuNode::Page(page)) => page,
                Some(MenuNode::Action(_)) => {
                    return Err(WizardError::Internal(format!(
                        "navigation path runs through action \"{id}\""
                    )))
                }
                None => {
                    return Err(WizardError::Internal(format!(
                        "page \"{}\" has no child \"{id}\"",
                        current.id
                    )))
                }
            };
        }
        Ok(current)
    }

    /// Ordered rows of button descriptors for rendering, resolved from the
    /// layout. Ids missing from `children` are skipped.
    pub fn buttons(&self) -> Vec<Vec<Button>> {
        self.layout
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|id| {
                        self.child(id).map(|node| Button {
                            id: id.clone(),
                            label: match node {
                                MenuNode::Page(page) => page.title.clone(),
                                MenuNode::Action(action) => action.label.clone(),
                            },
                            command: match node {
                                MenuNode::Page(_) => None,
                                MenuNode::Action(action) => action.command,
                            },
                        })
                    })
                    .collect()
            })
            .filter(|row: &Vec<Button>| !row.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuAction, MenuNode, MenuPage, PageKind};
    use crate::event::Command;

    fn sample_tree() -> MenuPage {
        let mut leaf = MenuPage::new("x", PageKind::Select, "X axis");
        leaf.children.insert(
            "back".to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        leaf.layout = vec![vec!["back".to_string()]];

        let mut bar = MenuPage::new("bar", PageKind::Category, "Bar chart");
        bar.children.insert("x".to_string(), MenuNode::Page(leaf));
        bar.children.insert(
            "finish".to_string(),
            MenuNode::Action(MenuAction::new("Finish", Some(Command::Validate))),
        );
        bar.layout = vec![vec!["x".to_string()], vec!["finish".to_string()]];

        let mut root = MenuPage::new("root", PageKind::Category, "Chart type");
        root.children.insert("bar".to_string(), MenuNode::Page(bar));
        root.layout = vec![vec!["bar".to_string()]];
        root
    }

    #[test]
    fn resolve_walks_the_path() {
        let root = sample_tree();
        let path: Vec<String> = ["root", "bar", "x"].iter().map(|s| s.to_string()).collect();
        let page = root.resolve(&path).unwrap();
        assert_eq!(page.id, "x");
        assert_eq!(page.kind, PageKind::Select);
    }

    #[test]
    fn resolve_rejects_unknown_children() {
        let root = sample_tree();
        let path: Vec<String> = ["root", "pie"].iter().map(|s| s.to_string()).collect();
        let err = root.resolve(&path).unwrap_err();
        assert!(!err.is_user_error());
    }

    #[test]
    fn resolve_rejects_paths_through_actions() {
        let root = sample_tree();
        let path: Vec<String> = ["root", "bar", "finish"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(root.resolve(&path).is_err());
    }

    #[test]
    fn buttons_follow_the_layout() {
        let root = sample_tree();
        let bar = root.child_page("bar").unwrap();
        let rows = bar.buttons();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].id, "x");
        assert_eq!(rows[0][0].label, "X axis");
        assert_eq!(rows[1][0].command, Some(Command::Validate));
    }

    #[test]
    fn finish_action_detection() {
        let root = sample_tree();
        assert!(!root.has_finish_action());
        assert!(root.child_page("bar").unwrap().has_finish_action());
    }
}
