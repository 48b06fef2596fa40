//! chartwiz: a menu-driven chart configuration wizard.
//!
//! The wizard walks a user through assembling a chart specification (chart
//! kind plus per-kind parameters) one menu choice at a time, ending with a
//! finished, validated configuration object. The menu tree is not static
//! data: it is rebuilt from the accumulated choices and the navigation
//! position after every step, so pages appear and disappear as fields are
//! set and a selection can never produce an inconsistent combination of
//! parameters.
//!
//! The crate is transport-agnostic. A caller (chat bot, CLI, HTTP handler)
//! feeds [`Event`]s into a [`Configurator`], renders the buttons described
//! by `current_page`, and hands the finished [`ChartConfig`] to whatever
//! draws the chart. Loading data, computing series and rendering are all the
//! caller's business; the wizard only needs a [`ColumnCatalog`] describing
//! the source's columns.
//!
//! ```
//! use chartwiz::{ColumnCatalog, Configurator, Event};
//!
//! let columns = ColumnCatalog::new([
//!     ("region".to_string(), false),
//!     ("sales".to_string(), true),
//! ]);
//! let mut wizard = Configurator::new(columns);
//! wizard.update(&Event::value("bar")).unwrap();
//! wizard.update(&Event::value("x")).unwrap();
//! wizard.update(&Event::value("region")).unwrap();
//! assert_eq!(wizard.current_page().unwrap().id, "bar");
//! ```

pub mod builder;
pub mod config;
pub mod configurator;
pub mod error;
pub mod event;
pub mod menu;
pub mod navigation;
pub mod source;
pub mod validate;
pub mod value;

pub use builder::{build_menu, CHANGE_SOURCE_ID, OPTIONS_PAGE_ID};
pub use config::{ChartConfig, ChartKind, Field};
pub use configurator::Configurator;
pub use error::WizardError;
pub use event::{Command, Event, Outcome};
pub use menu::{Button, MenuAction, MenuNode, MenuPage, PageKind};
pub use navigation::{NavigationStack, ROOT_PAGE_ID};
pub use source::ColumnCatalog;
pub use value::FieldValue;
