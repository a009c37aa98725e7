//! Positional parameter access with error context.

use graph_schema::ConfigurationError;
use serde_json::Value;

/// Positional parameters of one property spec.
///
/// Every accessor reports failures as [`ConfigurationError::InvalidParams`]
/// naming the property and generator.
pub(crate) struct Params<'a> {
    property: &'a str,
    generator: &'a str,
    values: &'a [Value],
}

impl<'a> Params<'a> {
    pub(crate) fn new(property: &'a str, generator: &'a str, values: &'a [Value]) -> Self {
        Self {
            property,
            generator,
            values,
        }
    }

    pub(crate) fn error(&self, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::invalid_params(self.property, self.generator, reason)
    }

    pub(crate) fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Reject parameter lists longer than `max`.
    pub(crate) fn at_most(&self, max: usize) -> Result<(), ConfigurationError> {
        if self.values.len() > max {
            return Err(self.error(format!(
                "expected at most {max} parameter(s), got {}",
                self.values.len()
            )));
        }
        Ok(())
    }

    fn get(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx).filter(|v| !v.is_null())
    }

    pub(crate) fn opt_i64(&self, idx: usize) -> Result<Option<i64>, ConfigurationError> {
        match self.get(idx) {
            None => Ok(None),
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.error(format!("parameter {} must be an integer", idx + 1))),
        }
    }

    pub(crate) fn i64_or(&self, idx: usize, default: i64) -> Result<i64, ConfigurationError> {
        Ok(self.opt_i64(idx)?.unwrap_or(default))
    }

    /// Non-negative integer parameter.
    pub(crate) fn usize_or(&self, idx: usize, default: usize) -> Result<usize, ConfigurationError> {
        match self.opt_i64(idx)? {
            None => Ok(default),
            Some(v) if v >= 0 => Ok(v as usize),
            Some(_) => Err(self.error(format!("parameter {} must not be negative", idx + 1))),
        }
    }

    pub(crate) fn opt_f64(&self, idx: usize) -> Result<Option<f64>, ConfigurationError> {
        match self.get(idx) {
            None => Ok(None),
            Some(v) => v
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.error(format!("parameter {} must be a number", idx + 1))),
        }
    }

    pub(crate) fn f64_or(&self, idx: usize, default: f64) -> Result<f64, ConfigurationError> {
        Ok(self.opt_f64(idx)?.unwrap_or(default))
    }

    pub(crate) fn bool_or(&self, idx: usize, default: bool) -> Result<bool, ConfigurationError> {
        match self.get(idx) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| self.error(format!("parameter {} must be a boolean", idx + 1))),
        }
    }

    pub(crate) fn str_or<'b>(&self, idx: usize, default: &'b str) -> Result<&'b str, ConfigurationError>
    where
        'a: 'b,
    {
        match self.get(idx) {
            None => Ok(default),
            Some(v) => v
                .as_str()
                .ok_or_else(|| self.error(format!("parameter {} must be a string", idx + 1))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_absent_or_null() {
        let values = vec![json!(null)];
        let params = Params::new("p", "g", &values);
        assert_eq!(params.i64_or(0, 5).unwrap(), 5);
        assert_eq!(params.str_or(1, "x").unwrap(), "x");
        assert!(params.bool_or(2, true).unwrap());
    }

    #[test]
    fn test_type_mismatch_is_invalid_params() {
        let values = vec![json!("ten")];
        let params = Params::new("age", "numberBetween", &values);
        let err = params.i64_or(0, 0).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidParams { ref property, ref generator, .. }
                if property == "age" && generator == "numberBetween"
        ));
    }

    #[test]
    fn test_at_most() {
        let values = vec![json!(1), json!(2), json!(3)];
        let params = Params::new("p", "g", &values);
        assert!(params.at_most(3).is_ok());
        assert!(params.at_most(2).is_err());
    }

    #[test]
    fn test_negative_usize_rejected() {
        let values = vec![json!(-1)];
        let params = Params::new("p", "words", &values);
        assert!(params.usize_or(0, 3).is_err());
    }
}
