//! Panel preset validation: ids, geometry and minimum sizes.

use std::collections::HashSet;

use crate::schema::FinboardConfig;

use super::helpers::validate_positive;

pub(crate) fn validate_panels(errors: &mut Vec<String>, config: &FinboardConfig) {
    let mut seen = HashSet::new();
    for (i, preset) in config.panels.iter().enumerate() {
        let name = format!("panels[{i}]");
        if preset.id.trim().is_empty() {
            errors.push(format!("{name}.id must not be empty"));
        } else if !seen.insert(preset.id.as_str()) {
            errors.push(format!("{name}.id '{}' is a duplicate", preset.id));
        }

        if !preset.x.is_finite() {
            errors.push(format!("{name}.x = {} must be finite", preset.x));
        }
        if !preset.y.is_finite() || preset.y < 0.0 {
            errors.push(format!("{name}.y = {} must be a finite, non-negative number", preset.y));
        }
        validate_positive(errors, &format!("{name}.width"), preset.width);
        validate_positive(errors, &format!("{name}.height"), preset.height);
        if let Some(min_width) = preset.min_width {
            validate_positive(errors, &format!("{name}.min_width"), min_width);
        }
        if let Some(min_height) = preset.min_height {
            validate_positive(errors, &format!("{name}.min_height"), min_height);
        }
    }
}
