use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::filter::Filter;
use super::obj_ref::ObjRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureAggregation {
    Sum,
    Count,
    Avg,
    Min,
    Max,
    Median,
    Runsum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticMeasureOperator {
    Sum,
    Difference,
    Multiplication,
    Ratio,
    Change,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMeasureDefinition {
    pub item: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<MeasureAggregation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_ratio: Option<bool>,
}

/// Same period previous year comparison of another measure of the execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopMeasureDefinition {
    pub measure_identifier: String,
    pub pop_attribute: ObjRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousPeriodDateDataSet {
    pub data_set: ObjRef,
    pub periods_ago: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousPeriodMeasureDefinition {
    pub measure_identifier: String,
    pub date_data_sets: Vec<PreviousPeriodDateDataSet>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArithmeticMeasureDefinition {
    pub measure_identifiers: Vec<String>,
    pub operator: ArithmeticMeasureOperator,
}

const SIMPLE_KEY: &str = "measureDefinition";
const POP_KEY: &str = "popMeasureDefinition";
const PREVIOUS_PERIOD_KEY: &str = "previousPeriodMeasure";
const ARITHMETIC_KEY: &str = "arithmeticMeasure";

/// How a measure is computed.
///
/// Payloads that match none of the known shapes are kept in [`MeasureDefinition::Unsupported`]
/// so that converters can reject them with the offending payload instead of failing to parse the
/// whole insight.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasureDefinition {
    Simple(SimpleMeasureDefinition),
    PoP(PopMeasureDefinition),
    PreviousPeriod(PreviousPeriodMeasureDefinition),
    Arithmetic(ArithmeticMeasureDefinition),
    Unsupported(JsonValue),
}

impl Serialize for MeasureDefinition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MeasureDefinition::Simple(def) => serialize_single_entry(serializer, SIMPLE_KEY, def),
            MeasureDefinition::PoP(def) => serialize_single_entry(serializer, POP_KEY, def),
            MeasureDefinition::PreviousPeriod(def) => {
                serialize_single_entry(serializer, PREVIOUS_PERIOD_KEY, def)
            }
            MeasureDefinition::Arithmetic(def) => {
                serialize_single_entry(serializer, ARITHMETIC_KEY, def)
            }
            MeasureDefinition::Unsupported(raw) => raw.serialize(serializer),
        }
    }
}

fn serialize_single_entry<S, T>(serializer: S, key: &str, value: &T) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, value)?;
    map.end()
}

impl<'de> Deserialize<'de> for MeasureDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        let Some(object) = raw.as_object() else {
            return Ok(MeasureDefinition::Unsupported(raw));
        };
        if object.len() != 1 {
            return Ok(MeasureDefinition::Unsupported(raw));
        }
        let Some((key, body)) = object.iter().next() else {
            return Ok(MeasureDefinition::Unsupported(raw));
        };
        let body = body.clone();
        let parsed = match key.as_str() {
            SIMPLE_KEY => serde_json::from_value(body).map(MeasureDefinition::Simple),
            POP_KEY => serde_json::from_value(body).map(MeasureDefinition::PoP),
            PREVIOUS_PERIOD_KEY => {
                serde_json::from_value(body).map(MeasureDefinition::PreviousPeriod)
            }
            ARITHMETIC_KEY => serde_json::from_value(body).map(MeasureDefinition::Arithmetic),
            _ => return Ok(MeasureDefinition::Unsupported(raw)),
        };
        parsed.map_err(D::Error::custom)
    }
}

/// A measure of an execution or insight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub local_identifier: String,
    pub definition: MeasureDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Measure {
    pub fn new(local_identifier: impl Into<String>, definition: MeasureDefinition) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            definition,
            alias: None,
            title: None,
            format: None,
        }
    }

    /// Simple measure over `item` without aggregation or filters.
    pub fn simple(local_identifier: impl Into<String>, item: ObjRef) -> Self {
        Self::new(
            local_identifier,
            MeasureDefinition::Simple(SimpleMeasureDefinition {
                item,
                aggregation: None,
                filters: Vec::new(),
                compute_ratio: None,
            }),
        )
    }

    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..self
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    pub fn with_format(self, format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..self
        }
    }

    /// `localIdentifier` of the measure this one is derived from, if any.
    pub fn master_identifier(&self) -> Option<&str> {
        match &self.definition {
            MeasureDefinition::PoP(def) => Some(&def.measure_identifier),
            MeasureDefinition::PreviousPeriod(def) => Some(&def.measure_identifier),
            MeasureDefinition::Simple(_)
            | MeasureDefinition::Arithmetic(_)
            | MeasureDefinition::Unsupported(_) => None,
        }
    }
}

/// An attribute (display form) of an execution or insight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub local_identifier: String,
    pub display_form: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Attribute {
    pub fn new(local_identifier: impl Into<String>, display_form: ObjRef) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            display_form,
            alias: None,
        }
    }
}

/// Content of an insight bucket: `{"measure": {...}}` or `{"attribute": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeOrMeasure {
    #[serde(rename = "measure")]
    Measure(Measure),
    #[serde(rename = "attribute")]
    Attribute(Attribute),
}

impl AttributeOrMeasure {
    pub fn local_identifier(&self) -> &str {
        match self {
            AttributeOrMeasure::Measure(measure) => &measure.local_identifier,
            AttributeOrMeasure::Attribute(attribute) => &attribute.local_identifier,
        }
    }
}
