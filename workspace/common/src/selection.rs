use tracing::debug;

use crate::SelectionError;

/// Holds the crop whose forecast is displayed.
///
/// Membership in the catalog is not checked: any non-empty name is accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    /// Starts with `default` selected, or nothing when it is blank.
    pub fn new(default: Option<&str>) -> Self {
        let selected = default
            .map(str::trim)
            .filter(|crop| !crop.is_empty())
            .map(str::to_string);
        Self { selected }
    }

    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replaces the held crop. Every accepted call is a change the caller must
    /// forward to the forecast loader, even when the name is unchanged.
    pub fn set_selection(&mut self, crop: &str) -> Result<&str, SelectionError> {
        let crop = crop.trim();
        if crop.is_empty() {
            return Err(SelectionError::EmptyCrop);
        }

        debug!(previous = ?self.selected, next = crop, "Selection changed");
        Ok(self.selected.insert(crop.to_string()).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        assert_eq!(SelectionController::new(Some("Rice")).selection(), Some("Rice"));
        assert_eq!(SelectionController::new(Some("  ")).selection(), None);
        assert_eq!(SelectionController::new(None).selection(), None);
    }

    #[test]
    fn test_set_selection_replaces_value() {
        let mut controller = SelectionController::new(Some("Rice"));
        assert_eq!(controller.set_selection("Wheat"), Ok("Wheat"));
        assert_eq!(controller.selection(), Some("Wheat"));
    }

    #[test]
    fn test_set_selection_rejects_empty() {
        let mut controller = SelectionController::new(Some("Rice"));
        assert_eq!(controller.set_selection(" "), Err(SelectionError::EmptyCrop));
        assert_eq!(controller.selection(), Some("Rice"));
    }

    #[test]
    fn test_set_selection_accepts_unknown_crop() {
        let mut controller = SelectionController::new(None);
        assert_eq!(controller.set_selection("Dragonfruit"), Ok("Dragonfruit"));
    }
}
