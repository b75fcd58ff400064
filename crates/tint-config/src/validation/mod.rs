//! Full configuration validation.
//!
//! Every problem is collected so one run reports them all.

use std::collections::HashSet;

use tint_common::ConfigError;

use crate::schema::TintConfig;

#[cfg(test)]
mod tests;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_not_blank(&mut errors, "theme.name", &config.theme.name);
    if let Some(provider) = &config.theme.provider {
        validate_not_blank(&mut errors, "theme.provider", provider);
    }

    // Export
    if config.export.targets.is_empty() {
        errors.push("export.targets is empty".into());
    }
    let mut seen = HashSet::new();
    for target in &config.export.targets {
        if !seen.insert(*target) {
            errors.push(format!("export.targets lists '{target}' more than once"));
        }
    }
    if config.export.out_dir.as_os_str().is_empty() {
        errors.push("export.out_dir is empty".into());
    }

    // Storage
    validate_range(
        &mut errors,
        "storage.autosave_debounce_ms",
        config.storage.autosave_debounce_ms,
        50,
        60_000,
    );
    if let Some(dir) = &config.storage.dir {
        if dir.as_os_str().is_empty() {
            errors.push("storage.dir is empty".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} is empty"));
    }
}
