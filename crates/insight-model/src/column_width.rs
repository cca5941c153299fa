use serde::{Deserialize, Serialize};

use crate::sort::{Locator, MeasureLocatorItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoWidth {
    #[serde(rename = "auto")]
    Auto,
}

/// Width of a pivot table column: `{"value": 120}` or `{"value": "auto"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Absolute {
        value: u32,
        #[serde(
            rename = "allowGrowToFit",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        allow_grow_to_fit: Option<bool>,
    },
    Auto { value: AutoWidth },
}

impl ColumnWidth {
    pub fn absolute(value: u32) -> Self {
        ColumnWidth::Absolute {
            value,
            allow_grow_to_fit: None,
        }
    }

    pub fn auto() -> Self {
        ColumnWidth::Auto {
            value: AutoWidth::Auto,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeColumnWidthItem {
    pub width: ColumnWidth,
    pub attribute_identifier: String,
}

/// Width of exactly one measure column, addressed the same way a measure sort is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureColumnWidthItem {
    pub width: ColumnWidth,
    pub locators: Vec<Locator>,
}

/// Width applied to every column of one measure, whatever the column attribute breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakMeasureColumnWidthItem {
    pub width: ColumnWidth,
    pub locator: WeakMeasureLocator,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakMeasureLocator {
    #[serde(rename = "measureLocatorItem")]
    pub measure_locator_item: MeasureLocatorItem,
}

impl WeakMeasureColumnWidthItem {
    pub fn new(measure_identifier: impl Into<String>, width: ColumnWidth) -> Self {
        Self {
            width,
            locator: WeakMeasureLocator {
                measure_locator_item: MeasureLocatorItem {
                    measure_identifier: measure_identifier.into(),
                },
            },
        }
    }

    pub fn measure_identifier(&self) -> &str {
        &self.locator.measure_locator_item.measure_identifier
    }
}

/// A per-column width override persisted in `properties.controls.columnWidths`.
///
/// Strong and weak measure widths share the `measureColumnWidthItem` wire key; they are told apart
/// by `locators` (strong) versus `locator` (weak).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColumnWidthItemRepr", into = "ColumnWidthItemRepr")]
pub enum ColumnWidthItem {
    Attribute(AttributeColumnWidthItem),
    Measure(MeasureColumnWidthItem),
    WeakMeasure(WeakMeasureColumnWidthItem),
}

impl ColumnWidthItem {
    pub fn attribute(attribute_identifier: impl Into<String>, width: ColumnWidth) -> Self {
        ColumnWidthItem::Attribute(AttributeColumnWidthItem {
            width,
            attribute_identifier: attribute_identifier.into(),
        })
    }

    pub fn measure(locators: Vec<Locator>, width: ColumnWidth) -> Self {
        ColumnWidthItem::Measure(MeasureColumnWidthItem { width, locators })
    }

    pub fn weak_measure(measure_identifier: impl Into<String>, width: ColumnWidth) -> Self {
        ColumnWidthItem::WeakMeasure(WeakMeasureColumnWidthItem::new(measure_identifier, width))
    }

    pub fn width(&self) -> &ColumnWidth {
        match self {
            ColumnWidthItem::Attribute(item) => &item.width,
            ColumnWidthItem::Measure(item) => &item.width,
            ColumnWidthItem::WeakMeasure(item) => &item.width,
        }
    }
}

#[derive(Serialize, Deserialize)]
enum ColumnWidthItemRepr {
    #[serde(rename = "attributeColumnWidthItem")]
    Attribute(AttributeColumnWidthItem),
    #[serde(rename = "measureColumnWidthItem")]
    Measure(MeasureWidthRepr),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MeasureWidthRepr {
    Strong(MeasureColumnWidthItem),
    Weak(WeakMeasureColumnWidthItem),
}

impl From<ColumnWidthItemRepr> for ColumnWidthItem {
    fn from(value: ColumnWidthItemRepr) -> Self {
        match value {
            ColumnWidthItemRepr::Attribute(item) => ColumnWidthItem::Attribute(item),
            ColumnWidthItemRepr::Measure(MeasureWidthRepr::Strong(item)) => {
                ColumnWidthItem::Measure(item)
            }
            ColumnWidthItemRepr::Measure(MeasureWidthRepr::Weak(item)) => {
                ColumnWidthItem::WeakMeasure(item)
            }
        }
    }
}

impl From<ColumnWidthItem> for ColumnWidthItemRepr {
    fn from(value: ColumnWidthItem) -> Self {
        match value {
            ColumnWidthItem::Attribute(item) => ColumnWidthItemRepr::Attribute(item),
            ColumnWidthItem::Measure(item) => {
                ColumnWidthItemRepr::Measure(MeasureWidthRepr::Strong(item))
            }
            ColumnWidthItem::WeakMeasure(item) => {
                ColumnWidthItemRepr::Measure(MeasureWidthRepr::Weak(item))
            }
        }
    }
}
