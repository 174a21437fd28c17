//! Thumbor options as the host's settings UI sees them.
//!
//! Validation only: rendering the form is up to the host.

use toml::{Table, Value};

use crate::error::FormError;

pub const BASE_URL: &str = "base_url";
pub const SECURITY_KEY: &str = "security_key";
pub const INCLUDE_BUCKET_PREFIX: &str = "include_bucket_prefix";

/// Validated Thumbor options. Values may still hold `$ENV` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub base_url: String,
    pub security_key: String,
    pub include_bucket_prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that should not be echoed back in full.
    Secret(String),
    Toggle(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub instructions: &'static str,
    pub value: FieldValue,
}

impl SettingsForm {
    /// Reads the named options. Missing strings default to `""`, a missing
    /// toggle to `false`; wrong types and unknown names are rejected.
    pub fn from_options(options: &Table) -> Result<Self, FormError> {
        let mut form = SettingsForm::default();
        for (name, value) in options {
            match name.as_str() {
                BASE_URL => form.base_url = string_option(name, value)?,
                SECURITY_KEY => form.security_key = string_option(name, value)?,
                INCLUDE_BUCKET_PREFIX => {
                    form.include_bucket_prefix = value
                        .as_bool()
                        .ok_or_else(|| FormError::NotABoolean(name.clone()))?;
                }
                _ => return Err(FormError::UnknownOption(name.clone())),
            }
        }
        Ok(form)
    }

    /// Fields to render. The bucket prefix is only offered when an
    /// S3-compatible storage backend is available.
    pub fn fields(&self, s3_available: bool) -> Vec<FormField> {
        let mut fields = vec![
            FormField {
                name: BASE_URL,
                label: "Base URL",
                instructions: "The base URL of your Thumbor server. Accepts $ENV_VAR.",
                value: FieldValue::Text(self.base_url.clone()),
            },
            FormField {
                name: SECURITY_KEY,
                label: "Security Key",
                instructions: "The key URLs are signed with. Empty for unsafe URLs. Accepts $ENV_VAR.",
                value: FieldValue::Secret(self.security_key.clone()),
            },
        ];
        if s3_available {
            fields.push(FormField {
                name: INCLUDE_BUCKET_PREFIX,
                label: "Include Bucket Prefix",
                instructions: "Prefix asset paths on S3 volumes with the bucket name.",
                value: FieldValue::Toggle(self.include_bucket_prefix),
            });
        }
        fields
    }
}

fn string_option(name: &str, value: &Value) -> Result<String, FormError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FormError::NotAString(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> Table {
        src.parse().unwrap()
    }

    #[test]
    fn missing_options_default() {
        let form = SettingsForm::from_options(&Table::new()).unwrap();
        assert_eq!(form, SettingsForm::default());
        assert_eq!(form.base_url, "");
    }

    #[test]
    fn reads_all_options() {
        let form = SettingsForm::from_options(&table(
            r#"
            base_url = "https://thumbor.example.com"
            security_key = "$THUMBOR_KEY"
            include_bucket_prefix = true
            "#,
        ))
        .unwrap();
        assert_eq!(form.base_url, "https://thumbor.example.com");
        assert_eq!(form.security_key, "$THUMBOR_KEY");
        assert!(form.include_bucket_prefix);
    }

    #[test]
    fn rejects_wrong_types_and_unknown_names() {
        assert_eq!(
            SettingsForm::from_options(&table("base_url = 42")),
            Err(FormError::NotAString("base_url".to_string()))
        );
        assert_eq!(
            SettingsForm::from_options(&table(r#"include_bucket_prefix = "yes""#)),
            Err(FormError::NotABoolean("include_bucket_prefix".to_string()))
        );
        assert_eq!(
            SettingsForm::from_options(&table(r#"secret = "x""#)),
            Err(FormError::UnknownOption("secret".to_string()))
        );
    }

    #[test]
    fn bucket_prefix_field_needs_s3() {
        let form = SettingsForm::default();
        let names: Vec<_> = form.fields(false).iter().map(|f| f.name).collect();
        assert_eq!(names, vec![BASE_URL, SECURITY_KEY]);
        let with_s3 = form.fields(true);
        assert_eq!(with_s3.len(), 3);
        assert_eq!(with_s3[2].value, FieldValue::Toggle(false));
    }
}
