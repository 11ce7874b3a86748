//! Field mapping rules for GND authority records.
//!
//! The mapping pass turns a parsed [`Record`](gnd_model::Record) into an
//! [`AuthorityDocument`](gnd_model::AuthorityDocument) by dispatching each
//! field to the handler registered for its tag. Handlers classify values
//! into the preferred / synonyms / related output sets; the central
//! subtlety is that a tracing field's destination depends on its
//! repeatable relator subfield, evaluated per relator value.
//!
//! # Example
//!
//! ```ignore
//! use gnd_map::{default_registry, map_record};
//!
//! let document = map_record(&record, default_registry());
//! assert!(document.unique("preferred").is_some());
//! ```

mod mapper;
mod name;
mod person;
mod registry;

pub use mapper::map_record;
pub use name::{build_formatted_name, truncate_at_marker};
pub use person::{
    KEY_PREFERRED, KEY_RELATED, KEY_SYNONYMS, heading_personal_name, linking_entry_personal_name,
    tracing_personal_name,
};
pub use registry::{FieldHandler, HandlerRegistry, default_registry};
