// HookLog - core/filter.rs
//
// Server-side filter state. A single optional categorical value (the
// payment gateway) narrows the list; the backend applies it.
// Core layer: pure logic, no I/O or UI dependencies.

/// Complete filter state. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected gateway. Never holds an empty or whitespace-only string.
    gateway: Option<String>,
}

impl FilterState {
    /// Filter narrowing the list to one gateway.
    ///
    /// An empty or whitespace-only value yields the empty filter.
    pub fn gateway_only(value: &str) -> Self {
        let trimmed = value.trim();
        Self {
            gateway: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// The active gateway, if any.
    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.gateway.is_none()
    }

    /// Label for the filter bar.
    pub fn label(&self) -> String {
        match &self.gateway {
            Some(g) => g.to_uppercase(),
            None => "All Gateways".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterState::default().is_empty());
        assert_eq!(FilterState::default().gateway(), None);
    }

    #[test]
    fn test_blank_value_means_no_filter() {
        assert_eq!(FilterState::gateway_only(""), FilterState::default());
        assert_eq!(FilterState::gateway_only("   "), FilterState::default());
    }

    #[test]
    fn test_value_is_trimmed() {
        let f = FilterState::gateway_only(" razorpay ");
        assert_eq!(f.gateway(), Some("razorpay"));
        assert!(!f.is_empty());
    }

    #[test]
    fn test_label() {
        assert_eq!(FilterState::default().label(), "All Gateways");
        assert_eq!(FilterState::gateway_only("payu").label(), "PAYU");
    }
}
