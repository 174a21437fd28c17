//! `thumbkit settings` – show the Thumbor settings form.

use anyhow::Result;
use thumbkit_core::config::{self, ThumbkitConfig};
use thumbkit_core::settings_form::FieldValue;

fn render(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) if s.is_empty() => "(empty)".to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Secret(s) if s.is_empty() => "(empty)".to_string(),
        FieldValue::Secret(_) => "********".to_string(),
        FieldValue::Toggle(true) => "on".to_string(),
        FieldValue::Toggle(false) => "off".to_string(),
    }
}

pub fn run_settings(cfg: &ThumbkitConfig) -> Result<()> {
    let form = cfg.settings_form()?;
    println!("Config: {}", config::config_path()?.display());
    for field in form.fields(cfg.storage.s3_available) {
        println!("{:<24} {}", field.label, render(&field.value));
        println!("{:<24} {}", "", field.instructions);
    }
    Ok(())
}
