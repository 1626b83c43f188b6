use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation failure
///
/// Maps each invalid field to every message raised for it. An empty value
/// means "no errors" and is never returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error with a single field message
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field`, empty if the field is valid
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }

    pub fn merge(mut self, other: ValidationError) -> Self {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
        self
    }

    /// Add messages for fields this error does not already report
    pub fn absorb(mut self, other: ValidationError) -> Self {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_insert(messages);
        }
        self
    }

    /// `Ok(value)` when no errors were collected
    pub fn check<T>(self, value: T) -> Result<T, ValidationError> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Combine these errors with the outcome of another validation pass
    pub fn join<T>(self, result: Result<T, ValidationError>) -> Result<T, ValidationError> {
        match result {
            Ok(value) => self.check(value),
            Err(errors) => Err(self.merge(errors)),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        write!(f, "Validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_accumulate_per_field() {
        let mut errors = ValidationError::new();
        errors.add("phone", "first");
        errors.add("phone", "second");
        errors.add("name", "third");

        assert_eq!(errors.messages("phone"), ["first", "second"]);
        assert!(errors.messages("address").is_empty());
        assert_eq!(errors.to_string(), "Validation failed for: name, phone");
    }

    #[test]
    fn test_join_keeps_errors_from_both_sides() {
        let extra = ValidationError::single("email", "taken");
        let result: Result<(), _> = extra.join(Err(ValidationError::single("name", "short")));

        let errors = result.unwrap_err();
        assert!(errors.has_field("email"));
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_absorb_keeps_existing_field_messages() {
        let mut required = ValidationError::single("name", "required");
        required.add("email", "required");
        let mut checked = ValidationError::single("name", "short");
        checked.add("phone", "digits");

        let errors = required.absorb(checked);
        assert_eq!(errors.messages("name"), ["required"]);
        assert_eq!(errors.messages("email"), ["required"]);
        assert_eq!(errors.messages("phone"), ["digits"]);
    }

    #[test]
    fn test_join_passes_value_through_when_clean() {
        let result = ValidationError::new().join(Ok::<_, ValidationError>(7));
        assert_eq!(result.unwrap(), 7);
    }
}
