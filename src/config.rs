//! Chart kinds, configuration fields and the per-session config store.
//!
//! The store is a single field-to-value mapping paired with a per-kind
//! required-key schema: exactly the fields of the active kind's schema are
//! present from kind selection until the wizard finishes, and `set` rejects
//! stray keys at the boundary.

use std::collections::BTreeMap;

use crate::error::WizardError;
use crate::value::FieldValue;

/// Chart kind: selected once at the root, fixes the config's field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Histogram,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Bar, Self::Histogram, Self::Pie, Self::Scatter];

    /// Stable id used as the kind's menu page id and in serialized configs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Histogram => "histogram",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
        }
    }

    /// Human label shown on the root menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar chart",
            Self::Histogram => "Histogram",
            Self::Pie => "Pie chart",
            Self::Scatter => "Scatter plot",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == id)
    }

    /// The exact field set of this kind's config.
    pub fn schema(self) -> &'static [Field] {
        match self {
            Self::Bar => &[
                Field::X,
                Field::Y,
                Field::GroupBy,
                Field::Agg,
                Field::OutlierFilter,
                Field::SortBy,
                Field::SortType,
                Field::RowLimit,
                Field::Title,
                Field::XLabel,
                Field::YLabel,
            ],
            Self::Histogram => &[
                Field::X,
                Field::OutlierFilter,
                Field::Title,
                Field::XLabel,
                Field::YLabel,
                Field::Bins,
                Field::Discrete,
            ],
            Self::Pie => &[
                Field::X,
                Field::Y,
                Field::GroupBy,
                Field::SortBy,
                Field::Agg,
                Field::Title,
                Field::GroupThreshold,
                Field::GroupLabel,
            ],
            Self::Scatter => &[
                Field::X,
                Field::Y,
                Field::Alpha,
                Field::OutlierFilter,
                Field::Title,
                Field::XLabel,
                Field::YLabel,
            ],
        }
    }
}

/// A configuration slot. The string id doubles as the menu page id of the
/// select or input page that sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    X,
    Y,
    GroupBy,
    Agg,
    OutlierFilter,
    SortBy,
    SortType,
    RowLimit,
    Title,
    XLabel,
    YLabel,
    Bins,
    Discrete,
    Alpha,
    GroupThreshold,
    GroupLabel,
}

impl Field {
    pub const ALL: [Self; 16] = [
        Self::X,
        Self::Y,
        Self::GroupBy,
        Self::Agg,
        Self::OutlierFilter,
        Self::SortBy,
        Self::SortType,
        Self::RowLimit,
        Self::Title,
        Self::XLabel,
        Self::YLabel,
        Self::Bins,
        Self::Discrete,
        Self::Alpha,
        Self::GroupThreshold,
        Self::GroupLabel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::GroupBy => "group_by",
            Self::Agg => "agg",
            Self::OutlierFilter => "outlier_filter",
            Self::SortBy => "sort_by",
            Self::SortType => "sort_type",
            Self::RowLimit => "row_limit",
            Self::Title => "title",
            Self::XLabel => "xlabel",
            Self::YLabel => "ylabel",
            Self::Bins => "bins",
            Self::Discrete => "discrete",
            Self::Alpha => "alpha",
            Self::GroupThreshold => "group_threshold",
            Self::GroupLabel => "group_label",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == id)
    }
}

/// The configuration of one chart, replaced wholesale on kind selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    kind: ChartKind,
    fields: BTreeMap<Field, FieldValue>,
}

impl ChartConfig {
    /// Default-config factory: exactly the kind's schema, with the kind's
    /// default values filled in.
    pub fn defaults(kind: ChartKind) -> Self {
        let mut fields = BTreeMap::new();
        for &field in kind.schema() {
            fields.insert(field, default_value(kind, field));
        }
        Self { kind, fields }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Current value of a field; `Null` when the field is not in the schema.
    pub fn get(&self, field: Field) -> &FieldValue {
        self.fields.get(&field).unwrap_or(&FieldValue::Null)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Store a value. Fields outside the active kind's schema are rejected,
    /// keeping the key set closed over the schema.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), WizardError> {
        if !self.fields.contains_key(&field) {
            return Err(WizardError::Internal(format!(
                "field \"{}\" is not part of the {} schema",
                field.as_str(),
                self.kind.as_str()
            )));
        }
        self.fields.insert(field, value);
        Ok(())
    }

    /// Store a value only when the field belongs to the schema. Used by
    /// cross-field rules that touch fields some kinds do not carry.
    pub fn set_if_present(&mut self, field: Field, value: FieldValue) {
        if let Some(slot) = self.fields.get_mut(&field) {
            *slot = value;
        }
    }

    /// Verify the key set still matches the kind's schema exactly.
    pub fn check_schema(&self) -> Result<(), WizardError> {
        let schema = self.kind.schema();
        if self.fields.len() != schema.len()
            || !schema.iter().all(|field| self.fields.contains_key(field))
        {
            return Err(WizardError::Internal(format!(
                "config keys diverged from the {} schema",
                self.kind.as_str()
            )));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    /// JSON object handed to rendering collaborators once the wizard
    /// finishes: the kind plus the full field set.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "kind".to_string(),
            serde_json::Value::from(self.kind.as_str()),
        );
        for (field, value) in &self.fields {
            map.insert(field.as_str().to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

fn default_value(kind: ChartKind, field: Field) -> FieldValue {
    match (kind, field) {
        (ChartKind::Bar, Field::Agg) => FieldValue::Str("mean".to_string()),
        (ChartKind::Bar, Field::SortType) => FieldValue::Str("ascending".to_string()),
        (ChartKind::Histogram, Field::Bins) => FieldValue::Int(10),
        (ChartKind::Histogram, Field::Discrete) => FieldValue::Bool(false),
        (ChartKind::Pie, Field::Y) => FieldValue::CountX,
        (ChartKind::Pie, Field::Agg) => FieldValue::Str("sum".to_string()),
        (ChartKind::Pie, Field::GroupThreshold) => FieldValue::Float(0.015),
        (ChartKind::Scatter, Field::Alpha) => FieldValue::Float(0.6),
        _ => FieldValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, ChartKind, Field};
    use crate::value::FieldValue;

    #[test]
    fn bar_defaults() {
        let config = ChartConfig::defaults(ChartKind::Bar);
        assert_eq!(config.get(Field::X), &FieldValue::Null);
        assert_eq!(config.get(Field::Agg), &FieldValue::Str("mean".into()));
        assert_eq!(
            config.get(Field::SortType),
            &FieldValue::Str("ascending".into())
        );
        assert_eq!(config.get(Field::RowLimit), &FieldValue::Null);
        assert!(!config.contains(Field::Bins));
        config.check_schema().unwrap();
    }

    #[test]
    fn histogram_defaults() {
        let config = ChartConfig::defaults(ChartKind::Histogram);
        assert_eq!(config.get(Field::Bins), &FieldValue::Int(10));
        assert_eq!(config.get(Field::Discrete), &FieldValue::Bool(false));
        assert!(!config.contains(Field::Y));
        config.check_schema().unwrap();
    }

    #[test]
    fn pie_defaults() {
        let config = ChartConfig::defaults(ChartKind::Pie);
        assert_eq!(config.get(Field::Y), &FieldValue::CountX);
        assert_eq!(config.get(Field::Agg), &FieldValue::Str("sum".into()));
        assert_eq!(config.get(Field::GroupThreshold), &FieldValue::Float(0.015));
        assert_eq!(config.get(Field::GroupBy), &FieldValue::Null);
        assert_eq!(config.get(Field::SortBy), &FieldValue::Null);
        config.check_schema().unwrap();
    }

    #[test]
    fn scatter_defaults() {
        let config = ChartConfig::defaults(ChartKind::Scatter);
        assert_eq!(config.get(Field::Alpha), &FieldValue::Float(0.6));
        assert!(!config.contains(Field::GroupBy));
        config.check_schema().unwrap();
    }

    #[test]
    fn set_rejects_fields_outside_the_schema() {
        let mut config = ChartConfig::defaults(ChartKind::Histogram);
        let err = config
            .set(Field::Alpha, FieldValue::Float(0.5))
            .unwrap_err();
        assert!(!err.is_user_error());
        config.check_schema().unwrap();
    }

    #[test]
    fn set_if_present_ignores_missing_fields() {
        let mut config = ChartConfig::defaults(ChartKind::Scatter);
        config.set_if_present(Field::GroupBy, FieldValue::Str("a".into()));
        assert!(!config.contains(Field::GroupBy));
        config.check_schema().unwrap();
    }

    #[test]
    fn to_json_includes_kind_and_sentinels() {
        let config = ChartConfig::defaults(ChartKind::Pie);
        let json = config.to_json();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["y"], "$count_x");
        assert_eq!(json["title"], serde_json::Value::Null);
    }

    #[test]
    fn field_ids_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_id(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_id("nope"), None);
    }

    #[test]
    fn kind_ids_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_id(kind.as_str()), Some(kind));
        }
    }
}
