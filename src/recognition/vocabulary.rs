//! The gesture-label vocabulary shared by the classifier and the action map.

/// Label meaning "no confident gesture".
pub const NONE_LABEL: &str = "None";

/// Base labels the classifier strategies can produce.
pub const BASE_LABELS: [&str; 8] = [
    "Open Hand",
    "Fist",
    "Point",
    "Thumb Point",
    "Two",
    "Three",
    "Four",
    "Surfer",
];

/// Labels refined with a pointing direction.
pub const DIRECTIONAL_LABELS: [&str; 2] = ["Point", "Thumb Point"];

pub const DIRECTIONS: [&str; 4] = ["up", "down", "left", "right"];

pub fn is_directional(label: &str) -> bool {
    DIRECTIONAL_LABELS.contains(&label)
}

/// Appends a direction suffix, e.g. `Point (left)`.
pub fn with_direction(label: &str, direction: &str) -> String {
    format!("{label} ({direction})")
}

pub fn is_known(label: &str) -> bool {
    if label == NONE_LABEL || BASE_LABELS.contains(&label) {
        return true;
    }
    DIRECTIONAL_LABELS.iter().any(|base| {
        DIRECTIONS
            .iter()
            .any(|dir| label == with_direction(base, dir))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert!(is_known("Point (left)"));
        assert!(is_known("Thumb Point (down)"));
        assert!(is_known("Surfer"));
        assert!(is_known(NONE_LABEL));
        assert!(!is_known("Point (sideways)"));
        assert!(!is_known("Wave"));
    }

    #[test]
    fn test_directional_variants_are_known() {
        for base in DIRECTIONAL_LABELS {
            assert!(is_directional(base));
            for dir in DIRECTIONS {
                assert!(is_known(&with_direction(base, dir)));
            }
        }
        assert!(!is_directional("Fist"));
    }
}
