//! Intermediate representation types for the restgen binding generator.
//!
//! The IR is the lowered, language-agnostic form of an API document: every
//! reference is resolved, every name is normalized and every ordering
//! decision has already been made. Code generators only walk it.
//!
//! # Architecture
//!
//! ```text
//! api.swagger.json → restgen-schema (decoding) → restgen-ir (lowered types) → codegen
//! ```

mod api;
mod types;

pub use api::{ApiIR, ApiMeta, AuthScheme, Endpoint, EndpointParam, Model, ModelField, ParamLocation};
pub use types::{HttpMethod, Primitive, ValueType};
