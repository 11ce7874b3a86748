//! Field handler trait and tag-keyed registry.
//!
//! Dispatch over record fields is an explicit mapping from field tag to
//! handler, built once at startup, so the rule set stays enumerable and
//! statically checkable. Fields whose tag has no registered handler are
//! ignored by the mapping pass.

use std::collections::HashMap;
use std::sync::OnceLock;

use gnd_model::{Contribution, DataField, Record};

use crate::person;

/// A mapping rule for one field tag.
///
/// Handlers are pure with respect to the output document: they return
/// contribution triples instead of writing anywhere. They receive the
/// owning record read-only so cross-field rules can inspect sibling
/// fields, never mutate them.
pub trait FieldHandler: Send + Sync {
    /// Field tag this handler is registered for (e.g. `"100"`).
    fn tag(&self) -> &'static str;

    /// Human-readable description of the rule.
    fn description(&self) -> &'static str {
        "Field handler"
    }

    /// Produces the contributions of one field instance.
    fn handle(&self, field: &DataField, record: &Record) -> Vec<Contribution>;
}

/// Registry of field handlers indexed by tag.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn FieldHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for its tag, replacing any previous one.
    pub fn register(&mut self, handler: Box<dyn FieldHandler>) {
        self.handlers.insert(handler.tag(), handler);
    }

    /// Looks up the handler for a tag. Unknown tags have no handler.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn FieldHandler> {
        self.handlers.get(tag).map(Box::as_ref)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterates over all registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

/// Adapts a plain function to the [`FieldHandler`] trait.
struct FunctionHandler {
    tag: &'static str,
    description: &'static str,
    handle_fn: fn(&DataField, &Record) -> Vec<Contribution>,
}

impl FieldHandler for FunctionHandler {
    fn tag(&self) -> &'static str {
        self.tag
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn handle(&self, field: &DataField, record: &Record) -> Vec<Contribution> {
        (self.handle_fn)(field, record)
    }
}

fn function_handler(
    tag: &'static str,
    description: &'static str,
    handle_fn: fn(&DataField, &Record) -> Vec<Contribution>,
) -> Box<dyn FieldHandler> {
    Box::new(FunctionHandler {
        tag,
        description,
        handle_fn,
    })
}

/// Cached default registry with the person field rule set.
static DEFAULT_REGISTRY: OnceLock<HandlerRegistry> = OnceLock::new();

/// Returns the default registry: the person authority rule set.
///
/// Registered tags: `100` (heading), `400` and `500` (tracings), `700`
/// (linking entries). Built on first access and cached.
pub fn default_registry() -> &'static HandlerRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(function_handler(
        "100",
        "Personal name heading (preferred)",
        person::heading_personal_name,
    ));
    registry.register(function_handler(
        "400",
        "Personal name tracing (synonyms/related)",
        person::tracing_personal_name,
    ));
    registry.register(function_handler(
        "500",
        "Related personal name tracing (synonyms/related)",
        person::tracing_personal_name,
    ));
    registry.register(function_handler(
        "700",
        "Linking entry to other systems (related)",
        person::linking_entry_personal_name,
    ));
    registry
}
