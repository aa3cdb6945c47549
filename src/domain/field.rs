// src/domain/field.rs
//! Type-checked attribute storage.
//!
//! A [`ValidatedField`] describes one named attribute and the type it
//! accepts. It holds no values itself: every entity owns a [`FieldStore`]
//! and the field reads from and writes into that store. The same field
//! type can therefore be attached to any number of attributes on any
//! number of entities, each with independent storage.
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::{collections::HashMap, marker::PhantomData};

/// A dynamically typed value offered to a validated attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    None,
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => String::TYPE_NAME,
            FieldValue::Int(_) => i64::TYPE_NAME,
            FieldValue::Float(_) => f64::TYPE_NAME,
            FieldValue::Bool(_) => bool::TYPE_NAME,
            FieldValue::DateTime(_) => DateTime::<Utc>::TYPE_NAME,
            FieldValue::None => "none",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::None, Into::into)
    }
}

/// Rust types a [`ValidatedField`] can be declared with.
pub trait FieldKind {
    const TYPE_NAME: &'static str;

    fn extract(value: &FieldValue) -> Option<&Self>;
}

impl FieldKind for String {
    const TYPE_NAME: &'static str = "string";

    fn extract(value: &FieldValue) -> Option<&Self> {
        match value {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldKind for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn extract(value: &FieldValue) -> Option<&Self> {
        match value {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl FieldKind for f64 {
    const TYPE_NAME: &'static str = "float";

    fn extract(value: &FieldValue) -> Option<&Self> {
        match value {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl FieldKind for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn extract(value: &FieldValue) -> Option<&Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldKind for DateTime<Utc> {
    const TYPE_NAME: &'static str = "datetime";

    fn extract(value: &FieldValue) -> Option<&Self> {
        match value {
            FieldValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

/// Per-instance attribute storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStore {
    values: HashMap<&'static str, FieldValue>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An attribute name bound to the type it accepts.
pub struct ValidatedField<T> {
    name: &'static str,
    _kind: PhantomData<fn() -> T>,
}

impl<T> ValidatedField<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _kind: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: FieldKind> ValidatedField<T> {
    pub fn set(&self, store: &mut FieldStore, value: impl Into<FieldValue>) -> DomainResult<()> {
        let value = value.into();
        if T::extract(&value).is_none() {
            return Err(self.invalid_type(&value));
        }
        store.values.insert(self.name, value);
        Ok(())
    }

    pub fn get<'a>(&self, store: &'a FieldStore) -> DomainResult<&'a T> {
        let value = store
            .values
            .get(self.name)
            .ok_or_else(|| DomainError::unset(self.name))?;
        T::extract(value).ok_or_else(|| self.invalid_type(value))
    }

    fn invalid_type(&self, value: &FieldValue) -> DomainError {
        DomainError::InvalidType {
            attribute: self.name,
            expected: T::TYPE_NAME,
            actual: value.type_name(),
        }
    }
}
