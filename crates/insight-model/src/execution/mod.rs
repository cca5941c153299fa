//! Execution model: what the rendering collaborator asks a backend to compute.

mod definition;
mod filter;
mod insight;
mod measure;
mod obj_ref;

pub use definition::{Dimension, ExecutionDefinition, MEASURE_GROUP_IDENTIFIER};
pub use filter::{
    merge_filters, AbsoluteDateFilter, AttributeElements, Filter, MeasureValueFilter,
    NegativeAttributeFilter, PositiveAttributeFilter, RelativeDateFilter,
};
pub use insight::{Insight, InsightBucket};
pub use measure::{
    ArithmeticMeasureDefinition, ArithmeticMeasureOperator, Attribute, AttributeOrMeasure, Measure,
    MeasureAggregation, MeasureDefinition, PopMeasureDefinition, PreviousPeriodDateDataSet,
    PreviousPeriodMeasureDefinition, SimpleMeasureDefinition,
};
pub use obj_ref::ObjRef;
