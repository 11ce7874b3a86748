//! Core data model for GND authority record processing.
//!
//! This crate defines the types shared across the loader pipeline:
//!
//! - [`DataField`] and [`Record`]: the parsed shape of one MARC 21
//!   authority record (tagged fields with repeatable subfields)
//! - [`AuthorityDocument`]: the output document submitted to the search
//!   index, with unique, multi-valued, and relation attribute stores
//! - [`Contribution`] and [`AttributeClass`]: the tagged result a field
//!   handler produces, applied uniformly by the document assembly step

pub mod document;
pub mod record;

pub use document::{AttributeClass, AuthorityDocument, Contribution};
pub use record::{DataField, Record, UNKNOWN_RECORD_ID};
