use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRead {
    /// 4 bytes at the field offset as `f32`, whatever the declared type.
    #[default]
    Legacy,
    Typed,
}

/// An empty `field_name` only removes points with non-finite coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub field_name: String,
    #[serde(deserialize_with = "null_as_nan")]
    pub min: f32,
    #[serde(deserialize_with = "null_as_nan")]
    pub max: f32,
    pub negate: bool,
    pub keep_organized: bool,
    pub extract_removed: bool,
    #[serde(deserialize_with = "null_as_nan")]
    pub fill_value: f32,
    pub field_read: FieldRead,
}

// serde_json writes non-finite floats as `null`.
fn null_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::NAN))
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            min: f32::MIN,
            max: f32::MAX,
            negate: false,
            keep_organized: false,
            extract_removed: false,
            fill_value: f32::NAN,
            field_read: FieldRead::Legacy,
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(field: impl Into<String>, min: f32, max: f32) -> Self {
        Self::new().with_field_name(field).with_limits(min, max)
    }

    pub fn with_field_name(mut self, field: impl Into<String>) -> Self {
        self.field_name = field.into();
        self
    }

    pub fn with_limits(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    pub fn with_keep_organized(mut self, keep_organized: bool) -> Self {
        self.keep_organized = keep_organized;
        self
    }

    pub fn with_extract_removed(mut self, extract_removed: bool) -> Self {
        self.extract_removed = extract_removed;
        self
    }

    pub fn with_fill_value(mut self, fill_value: f32) -> Self {
        self.fill_value = fill_value;
        self
    }

    pub fn with_field_read(mut self, field_read: FieldRead) -> Self {
        self.field_read = field_read;
        self
    }

    pub fn is_finiteness_only(&self) -> bool {
        self.field_name.is_empty()
    }

    /// Range test for an already finite field value. A NaN bound fails
    /// every comparison, so it neither removes nor keeps on its own.
    pub(crate) fn keeps_value(&self, value: f64) -> bool {
        let (min, max) = (f64::from(self.min), f64::from(self.max));
        if self.negate {
            !(value >= min && value <= max)
        } else {
            !(value < min || value > max)
        }
    }
}
