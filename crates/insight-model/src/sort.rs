use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort rows by the values of one row attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSortItem {
    /// `localIdentifier` of the attribute bucket item.
    pub attribute_identifier: String,
    pub direction: SortDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
}

/// Coordinate of a column header: one attribute element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeLocatorItem {
    pub attribute_identifier: String,
    /// Element URI.
    pub element: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureLocatorItem {
    pub measure_identifier: String,
}

/// One coordinate of the table cell a measure sort or a measure column width applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locator {
    #[serde(rename = "attributeLocatorItem")]
    Attribute(AttributeLocatorItem),
    #[serde(rename = "measureLocatorItem")]
    Measure(MeasureLocatorItem),
}

impl Locator {
    pub fn attribute(attribute_identifier: impl Into<String>, element: impl Into<String>) -> Self {
        Locator::Attribute(AttributeLocatorItem {
            attribute_identifier: attribute_identifier.into(),
            element: element.into(),
        })
    }

    pub fn measure(measure_identifier: impl Into<String>) -> Self {
        Locator::Measure(MeasureLocatorItem {
            measure_identifier: measure_identifier.into(),
        })
    }

    pub fn as_attribute(&self) -> Option<&AttributeLocatorItem> {
        match self {
            Locator::Attribute(locator) => Some(locator),
            Locator::Measure(_) => None,
        }
    }

    pub fn as_measure(&self) -> Option<&MeasureLocatorItem> {
        match self {
            Locator::Measure(locator) => Some(locator),
            Locator::Attribute(_) => None,
        }
    }
}

/// Sort rows by the values in one measure column, addressed by its locators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSortItem {
    pub direction: SortDirection,
    pub locators: Vec<Locator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortItem {
    #[serde(rename = "attributeSortItem")]
    Attribute(AttributeSortItem),
    #[serde(rename = "measureSortItem")]
    Measure(MeasureSortItem),
}

impl SortItem {
    pub fn attribute(attribute_identifier: impl Into<String>, direction: SortDirection) -> Self {
        SortItem::Attribute(AttributeSortItem {
            attribute_identifier: attribute_identifier.into(),
            direction,
            aggregation: None,
        })
    }

    pub fn measure(direction: SortDirection, locators: Vec<Locator>) -> Self {
        SortItem::Measure(MeasureSortItem {
            direction,
            locators,
        })
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortItem::Attribute(item) => item.direction,
            SortItem::Measure(item) => item.direction,
        }
    }
}
