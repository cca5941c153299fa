//! Conversion of the execution model into AFM payloads.
//!
//! AFM ("attributes, filters, measures") is the execution request understood by the analytical
//! backend. Converting is also how unsupported measure definitions are detected before anything
//! is sent: [`convert_execution`] fails with [`AfmError::UnsupportedMeasureDefinition`] carrying
//! the offending payload.

pub mod afm;
mod error;
mod execution;
mod filter;
mod measure;

pub use afm::{AfmExecution, AfmFilter, AfmMeasure};
pub use error::{AfmError, AfmResult};
pub use execution::convert_execution;
pub use filter::convert_filter;
pub use measure::{
    convert_attribute, convert_measure, measure_format, DEFAULT_DECIMAL_FORMAT,
    DEFAULT_INTEGER_FORMAT, DEFAULT_PERCENTAGE_FORMAT,
};
