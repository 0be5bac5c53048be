use std::collections::HashMap;

use tracing::{debug, warn};

use crate::ast::{BuiltinFunction, UserFunction};

/// A table of named `f64 -> f64` functions the parser can bind into calls.
///
/// Registering takes `&mut self`, so a registry cannot change while a parse
/// that borrows it is running. Trees keep their own handle to each function
/// they call; registering or replacing a function afterwards does not
/// affect them.
///
/// ## Example
/// ```
/// use exprtree::interpreter::registry::FunctionRegistry;
///
/// let mut registry = FunctionRegistry::new();
/// registry.register("cube", |x| x * x * x);
///
/// assert!(registry.contains("cube"));
/// assert_eq!(registry.get("cube").unwrap().call(2.0), 8.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, UserFunction>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `function` under `name`, replacing any earlier registration
    /// of that name.
    ///
    /// Names are case-sensitive. A name equal to a built-in is accepted but
    /// can never be called, because the parser resolves built-ins first.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        let name = name.into();
        if BuiltinFunction::from_name(&name).is_some() {
            warn!(name = %name, "registered function is shadowed by a built-in and cannot be called");
        }
        debug!(name = %name, "registering function");
        self.functions.insert(name, UserFunction::new(function));
    }

    /// Looks up a registered function by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UserFunction> {
        self.functions.get(name)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
