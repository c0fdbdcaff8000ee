//! Severance component identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four accrued amounts that make up a liquidación.
///
/// # Example
///
/// ```
/// use severance_engine::models::SeveranceComponent;
///
/// assert_eq!(SeveranceComponent::Cesantias.label(), "Cesantias");
/// assert_eq!(SeveranceComponent::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeveranceComponent {
    /// Prorated semi-annual bonus ("primas").
    Primas,
    /// Severance fund accrual ("cesantías").
    Cesantias,
    /// Interest on the severance fund ("intereses sobre cesantías").
    Intereses,
    /// Accrued vacation pay ("vacaciones").
    Vacaciones,
}

impl SeveranceComponent {
    /// All components, in summary order.
    pub const ALL: [SeveranceComponent; 4] = [
        SeveranceComponent::Primas,
        SeveranceComponent::Cesantias,
        SeveranceComponent::Intereses,
        SeveranceComponent::Vacaciones,
    ];

    /// Returns the label used in summaries and warnings.
    pub fn label(self) -> &'static str {
        match self {
            SeveranceComponent::Primas => "Primas",
            SeveranceComponent::Cesantias => "Cesantias",
            SeveranceComponent::Intereses => "Intereses sobre cesantias",
            SeveranceComponent::Vacaciones => "Vacaciones",
        }
    }
}

impl fmt::Display for SeveranceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SeveranceComponent::Primas.to_string(), "Primas");
        assert_eq!(
            SeveranceComponent::Intereses.to_string(),
            "Intereses sobre cesantias"
        );
        assert_eq!(SeveranceComponent::Vacaciones.to_string(), "Vacaciones");
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&SeveranceComponent::Cesantias).unwrap();
        assert_eq!(json, "\"cesantias\"");
    }
}
