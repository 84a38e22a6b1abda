//! Rust emitter for the restgen binding generator.
//!
//! Turns the lowered API IR into a single Rust source file: a small runtime
//! prelude, one `nanoserde` model per definition and one request builder
//! per operation.

mod generator;
mod naming;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod sections;

pub use ast::{Enum, Field, Fn, Impl, Param, Struct, Trait, Variant};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use restgen_codegen::LanguageCodegen;
pub use rust_file::{RustFile, Use};
pub use type_mapper::RustTypeMapper;
