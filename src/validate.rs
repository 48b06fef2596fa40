//! Finish-time validation: per-kind required fields and consistency.
//!
//! Runs only on the explicit validate transition; a failure is surfaced as a
//! user-facing message and leaves the wizard exactly where it was.

use crate::config::{ChartConfig, ChartKind, Field};
use crate::error::WizardError;
use crate::source::ColumnCatalog;
use crate::value::FieldValue;

/// Check that the config is complete and consistent for its chart kind.
pub fn validate(config: &ChartConfig, columns: &ColumnCatalog) -> Result<(), WizardError> {
    match config.kind() {
        ChartKind::Bar => {
            require_axis(config, Field::X)?;
            require_axis(config, Field::Y)?;
            require_distinct_axes(config)?;
            require_numeric_aggregation(config, columns)
        }
        ChartKind::Histogram => require_axis(config, Field::X),
        ChartKind::Pie | ChartKind::Scatter => {
            require_axis(config, Field::X)?;
            require_axis(config, Field::Y)?;
            require_distinct_axes(config)
        }
    }
}

fn require_axis(config: &ChartConfig, axis: Field) -> Result<(), WizardError> {
    if config.get(axis).is_null() {
        return Err(WizardError::Input(format!(
            "The {} axis is not set",
            axis.as_str()
        )));
    }
    Ok(())
}

fn require_distinct_axes(config: &ChartConfig) -> Result<(), WizardError> {
    if config.get(Field::X) == config.get(Field::Y) {
        return Err(WizardError::Input(
            "The x and y axes must use different columns".to_string(),
        ));
    }
    Ok(())
}

/// When grouping, the axis that gets aggregated must hold numeric data. The
/// count pseudo-columns are numeric by construction.
fn require_numeric_aggregation(
    config: &ChartConfig,
    columns: &ColumnCatalog,
) -> Result<(), WizardError> {
    let group_by = config.get(Field::GroupBy);
    if group_by.is_null() {
        return Ok(());
    }
    let aggregated = if group_by == config.get(Field::X) {
        config.get(Field::Y)
    } else {
        config.get(Field::X)
    };
    match aggregated {
        FieldValue::Str(name) if !columns.is_numeric(name) => Err(WizardError::Input(format!(
            "Column \"{name}\" is not numeric and cannot be aggregated"
        ))),
        _ => Ok(()),
    }
}
