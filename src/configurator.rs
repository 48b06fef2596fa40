//! The wizard state machine: one `(value, command)` event per step.
//!
//! Each update mutates the config and navigation history, then rebuilds the
//! menu tree so the caller can read `current_page` and render. User input
//! errors leave both untouched; internal errors mean the tree and the
//! dispatch logic disagree and are not recoverable.

use crate::builder::build_menu;
use crate::config::{ChartConfig, ChartKind, Field};
use crate::error::WizardError;
use crate::event::{Command, Event, Outcome};
use crate::menu::{MenuNode, MenuPage, PageKind};
use crate::navigation::NavigationStack;
use crate::source::ColumnCatalog;
use crate::validate::validate;
use crate::value::FieldValue;

/// One interactive configuration session.
pub struct Configurator {
    columns: ColumnCatalog,
    config: Option<ChartConfig>,
    history: NavigationStack,
    tree: MenuPage,
    done: bool,
}

impl Configurator {
    pub fn new(columns: ColumnCatalog) -> Self {
        let history = NavigationStack::new();
        let tree = build_menu(None, &history, &columns);
        Self {
            columns,
            config: None,
            history,
            tree,
            done: false,
        }
    }

    pub fn columns(&self) -> &ColumnCatalog {
        &self.columns
    }

    /// The config under construction; `None` until a chart kind is chosen.
    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_ref()
    }

    pub fn history(&self) -> &[String] {
        self.history.path()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The page the navigation history currently points at, resolved against
    /// the freshly rebuilt tree.
    pub fn current_page(&self) -> Result<&MenuPage, WizardError> {
        self.tree.resolve(self.history.path())
    }

    /// Discard the config and return to the root menu.
    pub fn reset(&mut self) {
        self.config = None;
        self.history.reset();
        self.done = false;
        self.rebuild();
    }

    /// Feed one event through the state machine.
    ///
    /// Commands bypass value routing entirely; otherwise the event value is
    /// dispatched on the current page's kind. Once the wizard has finished,
    /// further events are ignored.
    pub fn update(&mut self, event: &Event) -> Result<Outcome, WizardError> {
        if self.done {
            return Ok(Outcome {
                done: true,
                command: None,
            });
        }
        if let Some(command) = event.command {
            return self.run_command(command);
        }

        let kind = self.current_page()?.kind;
        match kind {
            PageKind::Category => self.enter_category(&event.value)?,
            PageKind::Select => self.select(&event.value)?,
            PageKind::IntInput | PageKind::FloatInput | PageKind::StrInput => {
                self.set_typed(kind, &event.value)?
            }
        }
        Ok(Outcome::step())
    }

    fn run_command(&mut self, command: Command) -> Result<Outcome, WizardError> {
        match command {
            Command::Back => {
                self.history.pop();
                self.rebuild();
                Ok(Outcome::command(Command::Back))
            }
            Command::Reset => {
                self.reset();
                Ok(Outcome::command(Command::Reset))
            }
            Command::ChangeSource => {
                // Hand-off: the caller swaps the data source and starts a
                // fresh session. No state changes here.
                Ok(Outcome::command(Command::ChangeSource))
            }
            Command::Validate => self.finish(),
            Command::Finish => {
                // A finish attempt is only honored from a page that carries
                // a validated finish button.
                if self.current_page()?.has_finish_action() {
                    self.finish()
                } else {
                    Ok(Outcome::step())
                }
            }
        }
    }

    /// Validate the active kind's config and, on success, complete the
    /// wizard. Failure reports the validation message and changes nothing.
    fn finish(&mut self) -> Result<Outcome, WizardError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| WizardError::Input("No chart has been configured yet".to_string()))?;
        config.check_schema()?;
        validate(config, &self.columns)?;
        self.done = true;
        Ok(Outcome::finished())
    }

    fn enter_category(&mut self, value: &str) -> Result<(), WizardError> {
        let page = self.current_page()?;
        match page.child(value) {
            Some(MenuNode::Page(_)) => {}
            Some(MenuNode::Action(_)) => {
                return Err(WizardError::Input(format!(
                    "\"{value}\" is not a sub-menu"
                )))
            }
            None => {
                return Err(WizardError::Input(format!(
                    "Unknown menu option \"{value}\""
                )))
            }
        }
        // Selecting a kind at the root replaces the config wholesale; no
        // values carry over from a previously configured kind.
        if self.history.is_at_root() {
            let kind = ChartKind::from_id(value).ok_or_else(|| {
                WizardError::Internal(format!("root page \"{value}\" is not a chart kind"))
            })?;
            self.config = Some(ChartConfig::defaults(kind));
        }
        self.history.push(value);
        self.rebuild();
        Ok(())
    }

    fn select(&mut self, raw: &str) -> Result<(), WizardError> {
        // Options are the command-less actions; anything else (a stale or
        // mistyped id, a command button sent without its command) is rejected.
        let page = self.current_page()?;
        match page.child(raw) {
            Some(MenuNode::Action(action)) if action.command.is_none() => {}
            _ => {
                return Err(WizardError::Input(format!(
                    "Unknown menu option \"{raw}\""
                )))
            }
        }
        let field = self.current_field()?;
        let value = FieldValue::decode_select(raw);
        let config = self
            .config
            .as_mut()
            .ok_or_else(|| WizardError::Internal("select page without an active config".into()))?;
        store_selected(config, field, value)?;
        self.history.pop();
        self.rebuild();
        Ok(())
    }

    /// Typed leaf setter. The page's declared kind must match the dispatch;
    /// a mismatch is a defect in the tree, not a user error.
    fn set_typed(&mut self, expected: PageKind, raw: &str) -> Result<(), WizardError> {
        let page = self.current_page()?;
        if page.kind != expected {
            return Err(WizardError::Internal(format!(
                "page \"{}\" is a {} page but the {} setter was invoked",
                page.id,
                page.kind.as_str(),
                expected.as_str()
            )));
        }
        let value = match expected {
            PageKind::IntInput => FieldValue::parse_int(raw)?,
            PageKind::FloatInput => FieldValue::parse_float(raw)?,
            PageKind::StrInput => FieldValue::parse_str(raw),
            PageKind::Category | PageKind::Select => {
                return Err(WizardError::Internal(format!(
                    "{} is not an input page kind",
                    expected.as_str()
                )))
            }
        };
        let field = self.current_field()?;
        let config = self
            .config
            .as_mut()
            .ok_or_else(|| WizardError::Internal("input page without an active config".into()))?;
        config.set(field, value)?;
        self.history.pop();
        self.rebuild();
        Ok(())
    }

    /// The field a select/input page stores into: named by the page id that
    /// is currently last in the history.
    fn current_field(&self) -> Result<Field, WizardError> {
        Field::from_id(self.history.current()).ok_or_else(|| {
            WizardError::Internal(format!(
                "page \"{}\" does not name a configuration field",
                self.history.current()
            ))
        })
    }

    fn rebuild(&mut self) {
        self.tree = build_menu(self.config.as_ref(), &self.history, &self.columns);
    }
}

/// Store a selected value and apply the cross-field invalidation rules, so
/// the menu never offers an inconsistent combination of parameters.
fn store_selected(
    config: &mut ChartConfig,
    field: Field,
    value: FieldValue,
) -> Result<(), WizardError> {
    match field {
        // Changing an axis invalidates everything derived from the axes.
        Field::X | Field::Y => {
            config.set(field, value)?;
            config.set_if_present(Field::GroupBy, FieldValue::Null);
            config.set_if_present(Field::SortBy, FieldValue::Null);
            if config.kind() == ChartKind::Pie {
                recompute_pie_grouping(config);
            }
        }
        Field::GroupBy => {
            let agg = follower_value(&value, config.get(Field::Agg), "mean");
            config.set(Field::GroupBy, value)?;
            config.set_if_present(Field::Agg, agg);
        }
        Field::SortBy => {
            let sort_type = follower_value(&value, config.get(Field::SortType), "ascending");
            config.set(Field::SortBy, value)?;
            config.set_if_present(Field::SortType, sort_type);
        }
        _ => config.set(field, value)?,
    }
    Ok(())
}

/// Pie charts derive their grouping from the axes: a count y axis means no
/// grouping at all, a value y axis groups by x and sorts by y.
fn recompute_pie_grouping(config: &mut ChartConfig) {
    if config.get(Field::Y).is_count() {
        config.set_if_present(Field::GroupBy, FieldValue::Null);
        config.set_if_present(Field::SortBy, FieldValue::Null);
        config.set_if_present(Field::Agg, FieldValue::Null);
    } else {
        let x = config.get(Field::X).clone();
        let y = config.get(Field::Y).clone();
        let agg = match config.get(Field::Agg) {
            FieldValue::Null => FieldValue::Str("mean".to_string()),
            agg => agg.clone(),
        };
        config.set_if_present(Field::GroupBy, x);
        config.set_if_present(Field::SortBy, y);
        config.set_if_present(Field::Agg, agg);
    }
}

/// A follower field (agg behind group_by, sort_type behind sort_by) is null
/// while its leader is null, and otherwise keeps its previous non-null value
/// or falls back to the given default.
fn follower_value(leader: &FieldValue, previous: &FieldValue, default: &str) -> FieldValue {
    if leader.is_null() {
        FieldValue::Null
    } else if previous.is_null() {
        FieldValue::Str(default.to_string())
    } else {
        previous.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{store_selected, Configurator};
    use crate::config::{ChartConfig, ChartKind, Field};
    use crate::event::Event;
    use crate::source::ColumnCatalog;
    use crate::value::FieldValue;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new([
            ("region".to_string(), false),
            ("sales".to_string(), true),
        ])
    }

    #[test]
    fn axis_selection_clears_grouping() {
        let mut config = ChartConfig::defaults(ChartKind::Bar);
        store_selected(&mut config, Field::GroupBy, FieldValue::Str("sales".into())).unwrap();
        store_selected(&mut config, Field::SortBy, FieldValue::Str("sales".into())).unwrap();
        store_selected(&mut config, Field::X, FieldValue::Str("region".into())).unwrap();
        assert_eq!(config.get(Field::GroupBy), &FieldValue::Null);
        assert_eq!(config.get(Field::SortBy), &FieldValue::Null);
    }

    #[test]
    fn group_by_drives_agg() {
        let mut config = ChartConfig::defaults(ChartKind::Bar);
        // Clear the default agg first to observe the fallback.
        store_selected(&mut config, Field::GroupBy, FieldValue::Null).unwrap();
        assert_eq!(config.get(Field::Agg), &FieldValue::Null);

        store_selected(&mut config, Field::GroupBy, FieldValue::Str("sales".into())).unwrap();
        assert_eq!(config.get(Field::Agg), &FieldValue::Str("mean".into()));

        config.set(Field::Agg, FieldValue::Str("sum".into())).unwrap();
        store_selected(&mut config, Field::GroupBy, FieldValue::Str("region".into())).unwrap();
        assert_eq!(config.get(Field::Agg), &FieldValue::Str("sum".into()));
    }

    #[test]
    fn sort_by_drives_sort_type() {
        let mut config = ChartConfig::defaults(ChartKind::Bar);
        store_selected(&mut config, Field::SortBy, FieldValue::Null).unwrap();
        assert_eq!(config.get(Field::SortType), &FieldValue::Null);
        store_selected(&mut config, Field::SortBy, FieldValue::Str("sales".into())).unwrap();
        assert_eq!(
            config.get(Field::SortType),
            &FieldValue::Str("ascending".into())
        );
    }

    #[test]
    fn pie_axis_selection_recomputes_grouping() {
        let mut config = ChartConfig::defaults(ChartKind::Pie);
        store_selected(&mut config, Field::X, FieldValue::Str("region".into())).unwrap();
        // y is still the count sentinel: everything stays null.
        assert_eq!(config.get(Field::GroupBy), &FieldValue::Null);
        assert_eq!(config.get(Field::SortBy), &FieldValue::Null);
        assert_eq!(config.get(Field::Agg), &FieldValue::Null);

        store_selected(&mut config, Field::Y, FieldValue::Str("sales".into())).unwrap();
        assert_eq!(config.get(Field::GroupBy), &FieldValue::Str("region".into()));
        assert_eq!(config.get(Field::SortBy), &FieldValue::Str("sales".into()));
        assert_eq!(config.get(Field::Agg), &FieldValue::Str("mean".into()));

        store_selected(&mut config, Field::Y, FieldValue::CountX).unwrap();
        assert_eq!(config.get(Field::GroupBy), &FieldValue::Null);
        assert_eq!(config.get(Field::SortBy), &FieldValue::Null);
        assert_eq!(config.get(Field::Agg), &FieldValue::Null);
    }

    #[test]
    fn unknown_select_option_is_a_user_error() {
        let mut wizard = Configurator::new(catalog());
        wizard.update(&Event::value("bar")).unwrap();
        wizard.update(&Event::value("x")).unwrap();
        let err = wizard.update(&Event::value("profit")).unwrap_err();
        assert!(err.is_user_error());
        // The back button needs its command; its bare id is not an option.
        let err = wizard.update(&Event::value("back")).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(
            wizard.config().unwrap().get(Field::X),
            &FieldValue::Null
        );
    }

    #[test]
    fn unknown_category_option_is_a_user_error() {
        let mut wizard = Configurator::new(catalog());
        let err = wizard.update(&Event::value("mosaic")).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(wizard.history(), ["root".to_string()]);
        assert!(wizard.config().is_none());
    }
}
