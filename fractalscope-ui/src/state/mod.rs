mod parameters;

pub use parameters::{ExternalParameters, ParameterChange, ParameterState};
