//! Field-shape validation for request payloads.
//!
//! Runs in the handlers before any service call; failures are collected per
//! field and reported together as `DomainError::Validation`.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DomainError, FieldError};

pub const COLLECTION_TITLE_MAX: usize = 100;
pub const COLLECTION_SUBTITLE_MAX: usize = 100;
pub const COLLECTION_AUTHOR_MAX: usize = 100;
pub const COLLECTION_IMAGE_MAX: usize = 255;
pub const QUOTATION_TITLE_MAX: usize = 1000;
pub const QUOTATION_UPDATE_TITLE_MIN: usize = 3;
pub const QUOTATION_UPDATE_TITLE_MAX: usize = 255;
pub const FILTER_TITLE_MAX: usize = 255;

/// Collects field errors while extracting validated values
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Non-empty string of at most `max` characters
    pub fn required(&mut self, field: &str, value: Option<String>, max: usize) -> String {
        match value {
            Some(v) if !v.is_empty() => {
                self.check_length(field, &v, 0, max);
                v
            }
            _ => {
                self.errors.push(FieldError::new(field, "is required"));
                String::new()
            }
        }
    }

    /// Absent, or a string of `min..=max` characters
    pub fn optional(
        &mut self,
        field: &str,
        value: Option<String>,
        min: usize,
        max: usize,
    ) -> Option<String> {
        if let Some(v) = &value {
            self.check_length(field, v, min, max);
        }
        value
    }

    /// Integer reference that must be present
    pub fn required_id(&mut self, field: &str, value: Option<i32>) -> i32 {
        value.unwrap_or_else(|| {
            self.errors.push(FieldError::new(field, "is required"));
            0
        })
    }

    pub fn finish(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }

    fn check_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len > max {
            self.errors.push(FieldError::new(
                field,
                format!("must be at most {} characters", max),
            ));
        } else if len < min {
            self.errors.push(FieldError::new(
                field,
                format!("must be at least {} characters", min),
            ));
        }
    }
}

/// `?titulo=` filter accepted by both listing endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Substring to look for in the title
    #[serde(rename = "titulo")]
    pub title: Option<String>,
}

impl TitleQuery {
    pub fn validate(self) -> Result<Option<String>, DomainError> {
        let mut v = Validator::default();
        let title = v.optional("titulo", self.title, 0, FILTER_TITLE_MAX);
        v.finish()?;
        Ok(title)
    }
}
