//! Calculator form inputs and their boundary constraints

mod form;

pub use form::{FormInputs, MAX_YEARS};
