use insight_model::ColumnWidthItem;
use serde::{Deserialize, Serialize};

use crate::settings::FeatureFlags;
use crate::visualization::{GdcConfig, Separators, VisualizationEnvironment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    pub aggregations: bool,
    pub aggregations_sub_menu: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultColumnWidth {
    Viewport,
    #[default]
    Unset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSizing {
    pub default_width: DefaultColumnWidth,
    pub grow_to_fit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<ColumnWidthItem>>,
}

/// Table configuration handed to the pivot table component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTableConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separators: Option<Separators>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuConfig>,
    pub column_sizing: ColumnSizing,
}

/// Builds the table configuration for one render.
///
/// Aggregation menus are not offered on dashboards. Growing columns to fit only applies on
/// dashboards. Column widths are passed down only when manual resizing is enabled.
pub fn create_pivot_table_config(
    config: &GdcConfig,
    environment: VisualizationEnvironment,
    settings: &FeatureFlags,
    column_widths: Option<&[ColumnWidthItem]>,
) -> PivotTableConfig {
    let is_dashboard = environment == VisualizationEnvironment::Dashboards;

    let menu = (!is_dashboard).then_some(MenuConfig {
        aggregations: true,
        aggregations_sub_menu: true,
    });

    let default_width = if settings.enable_table_columns_auto_resizing {
        DefaultColumnWidth::Viewport
    } else {
        DefaultColumnWidth::Unset
    };

    let column_widths = column_widths
        .filter(|_| settings.enable_table_columns_manual_resizing)
        .map(<[ColumnWidthItem]>::to_vec);

    PivotTableConfig {
        separators: config.separators.clone(),
        menu,
        column_sizing: ColumnSizing {
            default_width,
            grow_to_fit: is_dashboard && settings.enable_table_columns_grow_to_fit,
            column_widths,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::ColumnWidth;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn column_widths() -> Vec<ColumnWidthItem> {
        vec![ColumnWidthItem::attribute(
            "294512a6b2ed4be8bd3948dd14db1950",
            ColumnWidth::absolute(740),
        )]
    }

    fn render(
        config: GdcConfig,
        environment: VisualizationEnvironment,
        settings: FeatureFlags,
        column_widths: Option<&[ColumnWidthItem]>,
    ) -> serde_json::Value {
        serde_json::to_value(create_pivot_table_config(
            &config,
            environment,
            &settings,
            column_widths,
        ))
        .unwrap()
    }

    #[test]
    fn no_menus_on_dashboards() {
        assert_eq!(
            render(
                GdcConfig::default(),
                VisualizationEnvironment::Dashboards,
                FeatureFlags::default(),
                None
            ),
            json!({ "columnSizing": { "defaultWidth": "unset", "growToFit": false } })
        );
    }

    #[test]
    fn menus_outside_dashboards() {
        assert_eq!(
            render(
                GdcConfig::default(),
                VisualizationEnvironment::None,
                FeatureFlags::default(),
                None
            ),
            json!({
                "menu": { "aggregations": true, "aggregationsSubMenu": true },
                "columnSizing": { "defaultWidth": "unset", "growToFit": false }
            })
        );
    }

    #[test]
    fn separators_are_copied() {
        let config = GdcConfig {
            separators: Some(Separators {
                decimal: ".".to_string(),
                thousand: "-".to_string(),
            }),
        };
        let rendered = render(
            config,
            VisualizationEnvironment::None,
            FeatureFlags::default(),
            None,
        );
        assert_eq!(rendered["separators"], json!({ "decimal": ".", "thousand": "-" }));
    }

    #[test]
    fn auto_resizing_uses_viewport_width() {
        let rendered = render(
            GdcConfig::default(),
            VisualizationEnvironment::None,
            FeatureFlags::default().with_auto_resizing(true),
            None,
        );
        assert_eq!(rendered["columnSizing"]["defaultWidth"], json!("viewport"));
    }

    #[test]
    fn grow_to_fit_only_on_dashboards() {
        let flags = FeatureFlags::default().with_grow_to_fit(true);
        let outside = render(
            GdcConfig::default(),
            VisualizationEnvironment::None,
            flags.clone(),
            None,
        );
        let dashboards = render(
            GdcConfig::default(),
            VisualizationEnvironment::Dashboards,
            flags,
            None,
        );
        assert_eq!(outside["columnSizing"]["growToFit"], json!(false));
        assert_eq!(dashboards["columnSizing"]["growToFit"], json!(true));
    }

    #[test]
    fn manual_resizing_passes_column_widths() {
        let flags = FeatureFlags::default().with_manual_resizing(true);
        let widths = column_widths();

        let undefined = create_pivot_table_config(
            &GdcConfig::default(),
            VisualizationEnvironment::None,
            &flags,
            None,
        );
        assert_eq!(undefined.column_sizing.column_widths, None);

        let empty = create_pivot_table_config(
            &GdcConfig::default(),
            VisualizationEnvironment::None,
            &flags,
            Some(&[]),
        );
        assert_eq!(empty.column_sizing.column_widths, Some(Vec::new()));

        let provided = render(
            GdcConfig::default(),
            VisualizationEnvironment::None,
            flags,
            Some(&widths),
        );
        assert_eq!(
            provided["columnSizing"]["columnWidths"],
            json!([{
                "attributeColumnWidthItem": {
                    "width": { "value": 740 },
                    "attributeIdentifier": "294512a6b2ed4be8bd3948dd14db1950"
                }
            }])
        );
    }

    #[test]
    fn column_widths_are_dropped_without_manual_resizing() {
        let widths = column_widths();
        let config = create_pivot_table_config(
            &GdcConfig::default(),
            VisualizationEnvironment::None,
            &FeatureFlags::default().with_manual_resizing(false),
            Some(&widths),
        );
        assert_eq!(config.column_sizing.column_widths, None);
    }
}
