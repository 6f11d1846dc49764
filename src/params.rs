//! Closed argument sets accepted by the chart operations.
//!
//! Every value parses with an exact, case-sensitive match. Loosely-typed
//! arguments (JSON maps coming from scripts or notebooks) are read through
//! [`PlotArgs`], which is where wrong JSON types surface as type errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LabError, LabResult};

/// A closed set of string tokens.
pub trait ArgumentChoice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// Exact token accepted on input.
    fn token(self) -> &'static str;

    /// Parses `value` for the argument named `argument`.
    fn parse_argument(argument: &'static str, value: &str) -> LabResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.token() == value)
            .ok_or_else(|| LabError::InvalidArgument {
                argument,
                value: value.to_owned(),
                expected: expected_tokens::<Self>(),
            })
    }
}

fn expected_tokens<T: ArgumentChoice>() -> String {
    let quoted: Vec<String> = T::ALL
        .iter()
        .map(|choice| format!("\"{}\"", choice.token()))
        .collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Measurement plotted on the value axis; doubles as the dataset column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    AveragePrice,
    TotalVolume,
}

impl Measurement {
    #[must_use]
    pub fn column_name(self) -> &'static str {
        self.token()
    }
}

impl ArgumentChoice for Measurement {
    const ALL: &'static [Self] = &[Self::AveragePrice, Self::TotalVolume];

    fn token(self) -> &'static str {
        match self {
            Self::AveragePrice => "AveragePrice",
            Self::TotalVolume => "TotalVolume",
        }
    }
}

/// Product category, matching the dataset `type` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Conventional,
    Organic,
}

impl ProductType {
    /// Capitalized form used in chart titles and artifact names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Conventional => "Conventional",
            Self::Organic => "Organic",
        }
    }
}

impl ArgumentChoice for ProductType {
    const ALL: &'static [Self] = &[Self::Conventional, Self::Organic];

    fn token(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Organic => "organic",
        }
    }
}

/// Which model configuration produced a prediction or forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Default,
    #[serde(rename = "Fine Tuned")]
    FineTuned,
}

impl ArgumentChoice for ModelType {
    const ALL: &'static [Self] = &[Self::Default, Self::FineTuned];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::FineTuned => "Fine Tuned",
        }
    }
}

macro_rules! display_as_token {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        })*
    };
}

display_as_token!(Measurement, ProductType, ModelType);

/// Loosely-typed keyword arguments for one plot call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotArgs {
    values: Map<String, Value>,
}

impl PlotArgs {
    #[must_use]
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parses a JSON object; any other JSON value is a type error.
    pub fn from_json_str(input: &str) -> LabResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| LabError::InvalidData(format!("failed to parse plot arguments: {e}")))?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(LabError::InvalidArgumentType {
                argument: "arguments",
                expected: "an object",
                actual: json_type_name(&other),
            }),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Raw string value, when present and a string.
    #[must_use]
    pub fn peek_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn require_str(&self, name: &'static str) -> LabResult<&str> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(LabError::MissingArgument { argument: name }),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(LabError::InvalidArgumentType {
                argument: name,
                expected: "a string",
                actual: json_type_name(other),
            }),
        }
    }

    /// Reads a boolean flag; absent means `false`.
    pub fn flag(&self, name: &'static str) -> LabResult<bool> {
        match self.values.get(name) {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(other) => Err(LabError::InvalidArgumentType {
                argument: name,
                expected: "a boolean",
                actual: json_type_name(other),
            }),
        }
    }

    pub fn choice<T: ArgumentChoice>(&self, name: &'static str) -> LabResult<T> {
        T::parse_argument(name, self.require_str(name)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
