//! Menu tree construction: a pure function of (config, history, columns).
//!
//! Every step rebuilds the whole tree from the current config and navigation
//! position. Pages embed chosen values in their titles, option sets are
//! filtered against the config (an axis never offers a count pseudo-column
//! the other axis already holds), and several pages exist only
//! conditionally, so nothing here may cache state between calls.

use crate::config::{ChartConfig, ChartKind, Field};
use crate::event::Command;
use crate::menu::{MenuAction, MenuNode, MenuPage, PageKind};
use crate::navigation::{NavigationStack, ROOT_PAGE_ID};
use crate::source::ColumnCatalog;
use crate::value::{FieldValue, COUNT_X_ID, COUNT_Y_ID, FALSE_LITERAL, NONE_LITERAL, TRUE_LITERAL};

/// Page id of each kind's trailing options sub-category.
pub const OPTIONS_PAGE_ID: &str = "options";
/// Button id of the root "change data source" action.
pub const CHANGE_SOURCE_ID: &str = "change_source";

const BACK_ID: &str = "back";
const FINISH_ID: &str = "finish";

/// Build the menu tree for the given state. Pure: the result depends only on
/// the arguments.
pub fn build_menu(
    config: Option<&ChartConfig>,
    history: &NavigationStack,
    columns: &ColumnCatalog,
) -> MenuPage {
    MenuBuilder {
        config,
        history,
        columns,
    }
    .root()
}

struct MenuBuilder<'a> {
    config: Option<&'a ChartConfig>,
    history: &'a NavigationStack,
    columns: &'a ColumnCatalog,
}

impl MenuBuilder<'_> {
    fn get(&self, field: Field) -> &FieldValue {
        self.config
            .map(|config| config.get(field))
            .unwrap_or(&FieldValue::Null)
    }

    fn is_current(&self, id: &str) -> bool {
        self.history.current() == id
    }

    fn root(&self) -> MenuPage {
        let mut page = MenuPage::new(ROOT_PAGE_ID, PageKind::Category, "Chart type");
        for kind in ChartKind::ALL {
            page.children
                .insert(kind.as_str().to_string(), MenuNode::Page(self.kind_page(kind)));
        }
        page.children.insert(
            CHANGE_SOURCE_ID.to_string(),
            MenuNode::Action(MenuAction::new(
                "Change data source",
                Some(Command::ChangeSource),
            )),
        );
        layout(
            &mut page,
            &[
                &["bar", "scatter"],
                &["histogram", "pie"],
                &[CHANGE_SOURCE_ID],
            ],
        );
        page
    }

    fn kind_page(&self, kind: ChartKind) -> MenuPage {
        let mut page = MenuPage::new(kind.as_str(), PageKind::Category, kind.label());
        match kind {
            ChartKind::Bar => {
                self.insert(&mut page, self.axis_page(Field::X, "X axis"));
                self.insert(&mut page, self.axis_page(Field::Y, "Y axis"));
                self.insert(
                    &mut page,
                    self.axis_choice_page(Field::GroupBy, "Group by", "Do not group", false),
                );
                if let Some(agg) = self.agg_page(kind) {
                    self.insert(&mut page, agg);
                }
                self.insert(&mut page, self.outlier_page());
            }
            ChartKind::Histogram => {
                self.insert(&mut page, self.axis_page(Field::X, "X axis"));
                self.insert(&mut page, self.outlier_page());
            }
            ChartKind::Scatter => {
                self.insert(&mut page, self.axis_page(Field::X, "X axis"));
                self.insert(&mut page, self.axis_page(Field::Y, "Y axis"));
                self.insert(&mut page, self.outlier_page());
            }
            ChartKind::Pie => {
                self.insert(&mut page, self.axis_page(Field::X, "Category column"));
                self.insert(&mut page, self.axis_page(Field::Y, "Value column"));
                if let Some(agg) = self.agg_page(kind) {
                    self.insert(&mut page, agg);
                }
            }
        }
        self.insert(&mut page, self.options_page(kind));
        // Leaving a kind page discards its config, hence Reset rather than Back.
        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Reset))),
        );
        layout(
            &mut page,
            &[
                &["x", "y"],
                &["group_by"],
                &["agg"],
                &["outlier_filter"],
                &[BACK_ID, OPTIONS_PAGE_ID],
            ],
        );
        page
    }

    /// The per-kind trailing sub-category: free-text fields, kind-specific
    /// leaves and the validated finish action.
    fn options_page(&self, kind: ChartKind) -> MenuPage {
        let mut page = MenuPage::new(OPTIONS_PAGE_ID, PageKind::Category, "");
        page.shows_chart = true;
        page.title = if self.is_current(OPTIONS_PAGE_ID) {
            format!("{} options", kind.label())
        } else {
            "Continue".to_string()
        };

        match kind {
            ChartKind::Bar => {
                self.insert(
                    &mut page,
                    self.axis_choice_page(Field::SortBy, "Sort by", "Do not sort", true),
                );
                if let Some(sort_type) = self.sort_type_page() {
                    self.insert(&mut page, sort_type);
                }
                self.insert(
                    &mut page,
                    self.input_page(
                        Field::RowLimit,
                        PageKind::IntInput,
                        "Limit rows",
                        "Enter a whole number",
                    ),
                );
                self.insert_text_fields(&mut page, true);
            }
            ChartKind::Histogram => {
                self.insert(
                    &mut page,
                    self.input_page(
                        Field::Bins,
                        PageKind::IntInput,
                        "Number of bins",
                        "Enter a whole number",
                    ),
                );
                self.insert(&mut page, self.discrete_page());
                self.insert_text_fields(&mut page, true);
            }
            ChartKind::Scatter => {
                self.insert(
                    &mut page,
                    self.input_page(
                        Field::Alpha,
                        PageKind::FloatInput,
                        "Point opacity",
                        "Enter a number between 0 and 1",
                    ),
                );
                self.insert_text_fields(&mut page, true);
            }
            ChartKind::Pie => {
                self.insert(
                    &mut page,
                    self.input_page(
                        Field::GroupThreshold,
                        PageKind::FloatInput,
                        "Group slices below",
                        "Enter a fraction between 0 and 1",
                    ),
                );
                self.insert(
                    &mut page,
                    self.input_page(
                        Field::GroupLabel,
                        PageKind::StrInput,
                        "Grouped slice label",
                        "Enter a label for the grouped slice",
                    ),
                );
                self.insert_text_fields(&mut page, false);
            }
        }

        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        page.children.insert(
            FINISH_ID.to_string(),
            MenuNode::Action(MenuAction::new("Finish", Some(Command::Validate))),
        );
        layout(
            &mut page,
            &[
                &["sort_by"],
                &["sort_type"],
                &["row_limit"],
                &["bins", "discrete"],
                &["alpha"],
                &["group_threshold"],
                &["group_label"],
                &["title"],
                &["xlabel"],
                &["ylabel"],
                &[BACK_ID, FINISH_ID],
            ],
        );
        page
    }

    fn insert_text_fields(&self, page: &mut MenuPage, axis_labels: bool) {
        self.insert(
            page,
            self.input_page(
                Field::Title,
                PageKind::StrInput,
                "Chart title",
                "Enter the chart title",
            ),
        );
        if axis_labels {
            self.insert(
                page,
                self.input_page(
                    Field::XLabel,
                    PageKind::StrInput,
                    "X axis label",
                    "Enter a label for the x axis",
                ),
            );
            self.insert(
                page,
                self.input_page(
                    Field::YLabel,
                    PageKind::StrInput,
                    "Y axis label",
                    "Enter a label for the y axis",
                ),
            );
        }
    }

    /// Axis selector: the catalog's columns two per row, plus the count
    /// pseudo-column unless the opposite axis already holds one.
    fn axis_page(&self, field: Field, title: &str) -> MenuPage {
        let mut page = MenuPage::new(field.as_str(), PageKind::Select, "");
        let names: Vec<&str> = self.columns.names().collect();
        for name in &names {
            page.children.insert(
                name.to_string(),
                MenuNode::Action(MenuAction::new(*name, None)),
            );
        }
        let mut rows: Vec<Vec<String>> = names
            .chunks(2)
            .map(|pair| pair.iter().map(|name| name.to_string()).collect())
            .collect();

        let (count_id, count_label, other_axis) = match field {
            Field::X => (COUNT_Y_ID, "Count of Y values", Field::Y),
            _ => (COUNT_X_ID, "Count of X values", Field::X),
        };
        if !self.get(other_axis).is_count() {
            page.children.insert(
                count_id.to_string(),
                MenuNode::Action(MenuAction::new(count_label, None)),
            );
            rows.push(vec![count_id.to_string()]);
        }

        rows.push(vec![BACK_ID.to_string()]);
        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        page.layout = rows;
        page.title = suffix_title(&page, title, self.get(field), false);
        page
    }

    /// Selector over the axes currently in use (group_by and sort_by share
    /// this shape): chosen x, then chosen y, then the "none" option.
    fn axis_choice_page(
        &self,
        field: Field,
        title: &str,
        none_label: &str,
        shows_chart: bool,
    ) -> MenuPage {
        let mut page = MenuPage::new(field.as_str(), PageKind::Select, "");
        page.shows_chart = shows_chart;
        let mut rows: Vec<Vec<String>> = Vec::new();
        for axis in [Field::X, Field::Y] {
            if let Some(name) = self.get(axis).as_column() {
                if page.children.contains_key(name) {
                    continue;
                }
                page.children.insert(
                    name.to_string(),
                    MenuNode::Action(MenuAction::new(name, None)),
                );
                rows.push(vec![name.to_string()]);
            }
        }
        page.children.insert(
            NONE_LITERAL.to_string(),
            MenuNode::Action(MenuAction::new(none_label, None)),
        );
        rows.push(vec![NONE_LITERAL.to_string()]);
        rows.push(vec![BACK_ID.to_string()]);
        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        page.layout = rows;
        page.title = suffix_title(&page, title, self.get(field), true);
        page
    }

    /// Aggregation selector; absent while there is nothing to aggregate.
    fn agg_page(&self, kind: ChartKind) -> Option<MenuPage> {
        if self.get(Field::GroupBy).is_null() {
            return None;
        }
        if kind == ChartKind::Pie && self.get(Field::Y).is_count() {
            return None;
        }
        Some(self.select_page(
            Field::Agg,
            "Aggregation",
            &[&[("mean", "Mean"), ("median", "Median"), ("sum", "Sum")]],
            false,
            false,
        ))
    }

    /// Sort direction selector; only exists once a sort column is chosen.
    fn sort_type_page(&self) -> Option<MenuPage> {
        if self.get(Field::SortBy).is_null() {
            return None;
        }
        Some(self.select_page(
            Field::SortType,
            "Sort order",
            &[&[("ascending", "Ascending"), ("descending", "Descending")]],
            true,
            false,
        ))
    }

    fn outlier_page(&self) -> MenuPage {
        self.select_page(
            Field::OutlierFilter,
            "Outlier cleaning",
            &[
                &[
                    ("0.75", "75th percentile"),
                    ("0.90", "90th percentile"),
                    ("0.99", "99th percentile"),
                ],
                &[(NONE_LITERAL, "Do not clean")],
            ],
            false,
            true,
        )
    }

    fn discrete_page(&self) -> MenuPage {
        self.select_page(
            Field::Discrete,
            "Discrete values",
            &[&[(TRUE_LITERAL, "Yes"), (FALSE_LITERAL, "No")]],
            true,
            false,
        )
    }

    /// Fixed-option select page. `rows` lists `(id, label)` options in
    /// render order; a back action is appended.
    fn select_page(
        &self,
        field: Field,
        title: &str,
        rows: &[&[(&str, &str)]],
        shows_chart: bool,
        suffix_when_null: bool,
    ) -> MenuPage {
        let mut page = MenuPage::new(field.as_str(), PageKind::Select, "");
        page.shows_chart = shows_chart;
        let mut page_rows: Vec<Vec<String>> = Vec::new();
        for row in rows {
            for (id, label) in *row {
                page.children.insert(
                    id.to_string(),
                    MenuNode::Action(MenuAction::new(*label, None)),
                );
            }
            page_rows.push(row.iter().map(|(id, _)| id.to_string()).collect());
        }
        page_rows.push(vec![BACK_ID.to_string()]);
        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        page.layout = page_rows;
        page.title = suffix_title(&page, title, self.get(field), suffix_when_null);
        page
    }

    /// Typed free-text page. Shows the full prompt while active, the short
    /// button label otherwise, and embeds the stored value when set.
    fn input_page(
        &self,
        field: Field,
        kind: PageKind,
        button_label: &str,
        prompt: &str,
    ) -> MenuPage {
        let mut page = MenuPage::new(field.as_str(), kind, "");
        page.shows_chart = true;
        page.children.insert(
            NONE_LITERAL.to_string(),
            MenuNode::Action(MenuAction::new("Reset value", None)),
        );
        page.children.insert(
            BACK_ID.to_string(),
            MenuNode::Action(MenuAction::new("Back", Some(Command::Back))),
        );
        page.layout = vec![vec![NONE_LITERAL.to_string(), BACK_ID.to_string()]];

        let base = if self.is_current(field.as_str()) {
            prompt
        } else {
            button_label
        };
        let value = self.get(field);
        page.title = if value.is_null() {
            base.to_string()
        } else {
            format!("{base} ({})", value.label())
        };
        page
    }

    fn insert(&self, parent: &mut MenuPage, child: MenuPage) {
        parent
            .children
            .insert(child.id.clone(), MenuNode::Page(child));
    }
}

/// Apply a layout template, dropping ids the page does not carry and rows
/// that end up empty.
fn layout(page: &mut MenuPage, rows: &[&[&str]]) {
    page.layout = rows
        .iter()
        .map(|row| {
            row.iter()
                .filter(|id| page.children.contains_key(**id))
                .map(|id| id.to_string())
                .collect::<Vec<String>>()
        })
        .filter(|row| !row.is_empty())
        .collect();
}

/// Suffix a page title with the label of the currently chosen option. The
/// label is looked up among the page's own buttons so the title matches what
/// the user pressed; values without a button fall back to their plain label.
fn suffix_title(page: &MenuPage, base: &str, value: &FieldValue, suffix_when_null: bool) -> String {
    if value.is_null() && !suffix_when_null {
        return base.to_string();
    }
    let id = match value {
        FieldValue::Null => NONE_LITERAL.to_string(),
        FieldValue::Bool(true) => TRUE_LITERAL.to_string(),
        FieldValue::Bool(false) => FALSE_LITERAL.to_string(),
        FieldValue::Str(s) => s.clone(),
        FieldValue::CountX => COUNT_X_ID.to_string(),
        FieldValue::CountY => COUNT_Y_ID.to_string(),
        FieldValue::Int(n) => n.to_string(),
        FieldValue::Float(v) => v.to_string(),
    };
    let label = match page.child(&id) {
        Some(MenuNode::Action(action)) => action.label.clone(),
        _ => value.label(),
    };
    format!("{base} ({label})")
}
