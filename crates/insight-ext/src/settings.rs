use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Feature flags the host passes to a pluggable visualization.
///
/// Every flag defaults to off so partial payloads deserialize. Flags this crate does not act on
/// are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Column widths are persisted and a resize callback is handed to the table.
    pub enable_table_columns_manual_resizing: bool,
    /// Columns are sized to the viewport content by default.
    pub enable_table_columns_auto_resizing: bool,
    /// Columns grow to fill the table width (dashboards only).
    pub enable_table_columns_grow_to_fit: bool,
    pub enable_week_filters: bool,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl FeatureFlags {
    #[must_use]
    pub fn with_manual_resizing(self, enabled: bool) -> Self {
        Self {
            enable_table_columns_manual_resizing: enabled,
            ..self
        }
    }

    #[must_use]
    pub fn with_auto_resizing(self, enabled: bool) -> Self {
        Self {
            enable_table_columns_auto_resizing: enabled,
            ..self
        }
    }

    #[must_use]
    pub fn with_grow_to_fit(self, enabled: bool) -> Self {
        Self {
            enable_table_columns_grow_to_fit: enabled,
            ..self
        }
    }

    /// Raw value of a flag not modeled as a field.
    pub fn flag(&self, name: &str) -> Option<&JsonValue> {
        self.extra.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let flags: FeatureFlags = serde_json::from_value(json!({
            "enableTableColumnsManualResizing": true,
            "enableKPIDashboardExport": "yes"
        }))
        .unwrap();

        assert!(flags.enable_table_columns_manual_resizing);
        assert!(!flags.enable_table_columns_auto_resizing);
        assert!(!flags.enable_table_columns_grow_to_fit);
        assert_eq!(flags.flag("enableKPIDashboardExport"), Some(&json!("yes")));
    }

    #[test]
    fn empty_payload_is_default() {
        let flags: FeatureFlags = serde_json::from_value(json!({})).unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
