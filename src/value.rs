//! Configuration field values and wire-literal decoding.
//!
//! Button ids arriving from the transport are plain strings. A handful of
//! literals are reserved: `"None"`, `"True"`, `"False"` and the two count
//! pseudo-column ids. They are decoded exactly once, here, at the input
//! boundary; stored values are always proper [`FieldValue`] variants and the
//! raw literals never propagate past the setter.

use crate::error::WizardError;

/// Wire literal meaning "clear this field".
pub const NONE_LITERAL: &str = "None";
pub const TRUE_LITERAL: &str = "True";
pub const FALSE_LITERAL: &str = "False";

/// Reserved pseudo-column id: count of x values (offered on the y axis).
pub const COUNT_X_ID: &str = "$count_x";
/// Reserved pseudo-column id: count of y values (offered on the x axis).
pub const COUNT_Y_ID: &str = "$count_y";

/// A single configuration slot value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Count of x values, used in place of a real column on the y axis.
    CountX,
    /// Count of y values, used in place of a real column on the x axis.
    CountY,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for the count pseudo-columns.
    pub fn is_count(&self) -> bool {
        matches!(self, Self::CountX | Self::CountY)
    }

    /// The column name when this value holds a real column, else None.
    pub fn as_column(&self) -> Option<&str> {
        match self {
            Self::Str(name) => Some(name),
            _ => None,
        }
    }

    /// Decode a select-button id: reserved literals map to null/bool/count,
    /// anything else is kept as a plain string (a column name or option id).
    pub fn decode_select(raw: &str) -> Self {
        match raw {
            NONE_LITERAL => Self::Null,
            TRUE_LITERAL => Self::Bool(true),
            FALSE_LITERAL => Self::Bool(false),
            COUNT_X_ID => Self::CountX,
            COUNT_Y_ID => Self::CountY,
            other => Self::Str(other.to_string()),
        }
    }

    /// Decode input-page text as an integer. `"None"` clears the field.
    pub fn parse_int(raw: &str) -> Result<Self, WizardError> {
        if raw == NONE_LITERAL {
            return Ok(Self::Null);
        }
        raw.trim()
            .parse::<i64>()
            .map(Self::Int)
            .map_err(|_| WizardError::Input(format!("\"{raw}\" cannot be used as a whole number")))
    }

    /// Decode input-page text as a float. `"None"` clears the field.
    pub fn parse_float(raw: &str) -> Result<Self, WizardError> {
        if raw == NONE_LITERAL {
            return Ok(Self::Null);
        }
        raw.trim()
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| WizardError::Input(format!("\"{raw}\" cannot be used as a number")))
    }

    /// Decode input-page text as a string. `"None"` clears the field.
    pub fn parse_str(raw: &str) -> Self {
        if raw == NONE_LITERAL {
            Self::Null
        } else {
            Self::Str(raw.to_string())
        }
    }

    /// Human label used when a page title embeds the current value.
    pub fn label(&self) -> String {
        match self {
            Self::Null => "None".to_string(),
            Self::Bool(true) => "Yes".to_string(),
            Self::Bool(false) => "No".to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(s) => s.clone(),
            Self::CountX => "Count of X values".to_string(),
            Self::CountY => "Count of Y values".to_string(),
        }
    }

    /// JSON form handed to rendering collaborators: sentinels keep their
    /// reserved ids, everything else maps to the matching JSON scalar.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::from(*b),
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Float(v) => serde_json::Value::from(*v),
            Self::Str(s) => serde_json::Value::from(s.as_str()),
            Self::CountX => serde_json::Value::from(COUNT_X_ID),
            Self::CountY => serde_json::Value::from(COUNT_Y_ID),
        }
    }
}
