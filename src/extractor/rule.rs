//! Field extraction rules
//!
//! A rule names the fields an analysis needs, how each raw value is coerced,
//! and which fallback replaces a blank value. Applying a rule to a record
//! either yields every field coerced or the first [`RowError`] encountered.

use indexmap::IndexMap;

use crate::error::RowError;
use crate::models::{FieldValue, Record};

/// Target type for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Finite floating point number
    Number,
    /// Whole number; floats are accepted only when they have no fraction
    Integer,
    /// Text with surrounding whitespace removed
    Text,
}

impl Coercion {
    fn expected(self) -> &'static str {
        match self {
            Coercion::Number => "a number",
            Coercion::Integer => "an integer",
            Coercion::Text => "text",
        }
    }
}

/// A field value after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Number(f64),
    Integer(i64),
    Text(String),
}

/// How to read one named field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub coercion: Coercion,
    pub fallback: Option<Coerced>,
}

impl FieldRule {
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coercion: Coercion::Number,
            fallback: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coercion: Coercion::Integer,
            fallback: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coercion: Coercion::Text,
            fallback: None,
        }
    }

    /// Substitute `value` when the raw field is blank
    pub fn with_fallback(mut self, value: Coerced) -> Self {
        self.fallback = Some(value);
        self
    }

    /// Read this field from a record
    pub fn apply(&self, record: &Record) -> Result<Coerced, RowError> {
        let raw = record
            .get(&self.name)
            .ok_or_else(|| RowError::missing(&self.name))?;

        if raw.is_blank() {
            return self
                .fallback
                .clone()
                .ok_or_else(|| RowError::blank(&self.name));
        }

        coerce(&self.name, raw, self.coercion)
    }
}

/// Coerce a non-blank raw value
pub fn coerce(field: &str, raw: &FieldValue, coercion: Coercion) -> Result<Coerced, RowError> {
    let failed = || RowError::coercion(field, raw.to_string(), coercion.expected());

    match (coercion, raw) {
        (_, FieldValue::Empty) => Err(RowError::blank(field)),

        (Coercion::Text, value) => Ok(Coerced::Text(value.to_string().trim().to_string())),

        (Coercion::Number, FieldValue::Integer(value)) => Ok(Coerced::Number(*value as f64)),
        (Coercion::Number, FieldValue::Float(value)) if value.is_finite() => {
            Ok(Coerced::Number(*value))
        }
        (Coercion::Number, FieldValue::Float(_)) => Err(failed()),
        (Coercion::Number, FieldValue::Text(text)) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Coerced::Number(value)),
            _ => Err(failed()),
        },

        (Coercion::Integer, FieldValue::Integer(value)) => Ok(Coerced::Integer(*value)),
        (Coercion::Integer, FieldValue::Float(value))
            if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 =>
        {
            Ok(Coerced::Integer(*value as i64))
        }
        (Coercion::Integer, FieldValue::Float(_)) => Err(failed()),
        (Coercion::Integer, FieldValue::Text(text)) => {
            text.trim().parse::<i64>().map(Coerced::Integer).map_err(|_| failed())
        }
    }
}

/// The full set of field rules for one analysis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionRule {
    fields: Vec<FieldRule>,
}

impl ExtractionRule {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Names of every required field, in rule order
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|rule| rule.name.as_str())
    }

    /// Coerce every required field of `record`, stopping at the first failure
    pub fn apply(&self, record: &Record) -> Result<CoercedFields, RowError> {
        let mut values = IndexMap::with_capacity(self.fields.len());
        for rule in &self.fields {
            values.insert(rule.name.clone(), rule.apply(record)?);
        }
        Ok(CoercedFields { values })
    }
}

/// Every field of one record after a successful rule application
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedFields {
    values: IndexMap<String, Coerced>,
}

impl CoercedFields {
    pub fn get(&self, field: &str) -> Option<&Coerced> {
        self.values.get(field)
    }

    /// Numeric value of a field; integers widen to `f64`
    pub fn number(&self, field: &str) -> Result<f64, RowError> {
        match self.values.get(field) {
            Some(Coerced::Number(value)) => Ok(*value),
            Some(Coerced::Integer(value)) => Ok(*value as f64),
            Some(Coerced::Text(text)) => Err(RowError::coercion(field, text, "a number")),
            None => Err(RowError::missing(field)),
        }
    }

    pub fn integer(&self, field: &str) -> Result<i64, RowError> {
        match self.values.get(field) {
            Some(Coerced::Integer(value)) => Ok(*value),
            Some(Coerced::Number(value)) => {
                Err(RowError::coercion(field, value.to_string(), "an integer"))
            }
            Some(Coerced::Text(text)) => Err(RowError::coercion(field, text, "an integer")),
            None => Err(RowError::missing(field)),
        }
    }

    pub fn text(&self, field: &str) -> Result<&str, RowError> {
        match self.values.get(field) {
            Some(Coerced::Text(text)) => Ok(text),
            Some(_) => Err(RowError::coercion(field, "<number>", "text")),
            None => Err(RowError::missing(field)),
        }
    }
}
