// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Decoding and validation of REST API description documents.
//!
//! A [`Document`] is decoded from Swagger-style JSON and checked so that
//! every `$ref` resolves before any code is generated. Errors carry the
//! source text and a span for `miette` reporting.

mod config;
mod document;
mod error;

pub use config::{Config, GeneratorConfig};
pub use document::{
    AdditionalProperties, DEFINITIONS_REF, Definition, Document, Method, Operation, Parameter,
    ParameterLocation, ParseContext, PathItem, SchemaFile, SecurityScheme, Schema,
    parse_document,
};
pub use error::{Error, Result, SourceContext};
