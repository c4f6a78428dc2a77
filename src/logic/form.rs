//! Form collector: draft field values, required-field validation, submit into a list.

use crate::logic::store::EntityList;
use crate::models::{FieldViolation, Record, RecordId, ViolationKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Static description of a form's fields.
#[derive(Debug)]
pub struct FormSchema {
    /// Every accepted text field.
    pub fields: &'static [&'static str],
    /// Subset of `fields` that must be non-blank on submit.
    pub required: &'static [&'static str],
    /// Name of the consent checkbox, if the form has one.
    pub consent: Option<&'static str>,
}

/// Draft of a form being filled in.
#[derive(Clone, Debug, Serialize)]
pub struct FormCollector {
    #[serde(skip)]
    schema: &'static FormSchema,
    values: BTreeMap<&'static str, String>,
    consent: bool,
}

impl FormCollector {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
            consent: false,
        }
    }

    /// Merge one field into the draft. Keys outside the schema are rejected.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FieldViolation> {
        let key = self
            .schema
            .fields
            .iter()
            .copied()
            .find(|f| *f == key)
            .ok_or_else(|| FieldViolation {
                field: key.to_string(),
                kind: ViolationKind::UnknownField,
            })?;
        self.values.insert(key, value.into());
        Ok(())
    }

    /// Tick or untick the consent checkbox.
    pub fn set_consent(&mut self, agreed: bool) -> Result<(), FieldViolation> {
        if self.schema.consent.is_none() {
            return Err(FieldViolation {
                field: "consent".to_string(),
                kind: ViolationKind::UnknownField,
            });
        }
        self.consent = agreed;
        Ok(())
    }

    /// Current value of `key`, empty when never set.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, None when blank.
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        Some(self.value(key).trim()).filter(|v| !v.is_empty())
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    /// Whether the submit control is enabled: only the consent gate disables it.
    pub fn can_submit(&self) -> bool {
        self.schema.consent.is_none() || self.consent
    }

    /// Violations for blank required fields and a missing consent, in schema order.
    pub fn check_required(&self) -> Vec<FieldViolation> {
        let mut violations: Vec<FieldViolation> = self
            .schema
            .required
            .iter()
            .filter(|field| self.non_blank(field).is_none())
            .map(|field| FieldViolation::missing(*field))
            .collect();
        if let Some(consent) = self.schema.consent {
            if !self.consent {
                violations.push(FieldViolation {
                    field: consent.to_string(),
                    kind: ViolationKind::ConsentRequired,
                });
            }
        }
        violations
    }

    /// Validate and, on success, append the record produced by `build` to `list` and reset.
    ///
    /// `build` receives the id the record will get and the draft; it may reject the draft with
    /// further violations. On any failure neither `list` nor the draft change.
    pub fn submit<T, F>(&mut self, list: &mut EntityList<T>, build: F) -> Result<RecordId, Vec<FieldViolation>>
    where
        T: Record,
        F: FnOnce(RecordId, &FormCollector) -> Result<T, Vec<FieldViolation>>,
    {
        let violations = self.check_required();
        if !violations.is_empty() {
            return Err(violations);
        }
        let record = build(list.next_id(), self)?;
        let id = list.add(|_| record);
        self.reset();
        Ok(id)
    }

    /// Clear every field and the consent flag.
    pub fn reset(&mut self) {
        self.values.clear();
        self.consent = false;
    }
}
