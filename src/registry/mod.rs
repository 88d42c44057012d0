//! Variable and function registry.
//!
//! The [`Registry`] is the combined store of named variables and named
//! built-in functions:
//!
//! - [`value`] - the stored [`Value`] type (`Bytes` or `Text`)
//! - [`function`] - the [`TemplateFunction`] trait and argument helpers
//! - [`builtins`] - the built-in function set
//!
//! Variable and function names are logically distinct namespaces that
//! merge at lookup time: a stored value takes precedence over a function
//! of the same name when resolved as a variable reference.

pub mod builtins;
pub mod function;
pub mod value;

pub use function::{Arity, TemplateFunction};
pub use value::Value;

use std::collections::HashMap;
use std::sync::Arc;

use crate::picker::FilePicker;

/// Result of a merged-namespace lookup.
pub enum Lookup<'a> {
    /// A stored variable value.
    Value(&'a Value),
    /// A registered function reachable under the name.
    Function(&'a dyn TemplateFunction),
}

/// The combined store of named variables and built-in functions.
///
/// Owned by the session and passed by reference into evaluation; there is
/// no global state, so independent sessions can coexist and be tested in
/// isolation.
pub struct Registry {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Arc<dyn TemplateFunction>>,
}

impl Registry {
    /// Create an empty registry with no functions registered.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Create a registry with the full built-in function set.
    pub fn with_builtins(picker: Arc<dyn FilePicker>) -> Self {
        let mut registry = Self::new();
        for function in builtins::builtin_functions(picker) {
            registry.register(function);
        }
        registry
    }

    /// Register a function under every name it declares.
    ///
    /// Registration happens once at startup; later registrations under the
    /// same name replace the earlier mapping.
    pub fn register(&mut self, function: Arc<dyn TemplateFunction>) {
        for name in function.names() {
            self.functions
                .insert((*name).to_string(), Arc::clone(&function));
        }
    }

    /// Upsert a stored value. Last write wins; no type restriction.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Remove a stored value. Never removes a function registration.
    ///
    /// Returns whether a value was present.
    pub fn unset_variable(&mut self, name: &str) -> bool {
        self.variables.remove(name).is_some()
    }

    /// A stored value by name, ignoring functions.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// A registered function by name, ignoring stored values.
    pub fn function(&self, name: &str) -> Option<&dyn TemplateFunction> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    /// Merged-namespace lookup: stored value first, then function.
    pub fn lookup(&self, name: &str) -> Option<Lookup<'_>> {
        if let Some(value) = self.variables.get(name) {
            return Some(Lookup::Value(value));
        }
        self.functions.get(name).map(|f| Lookup::Function(f.as_ref()))
    }

    /// Stored variable names, sorted.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered function names (all aliases), sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate registered functions, deduplicated by primary name and
    /// sorted, for `/help`.
    pub fn functions(&self) -> Vec<&dyn TemplateFunction> {
        let mut seen: Vec<&dyn TemplateFunction> = Vec::new();
        let mut primaries: Vec<&'static str> = Vec::new();
        for function in self.functions.values() {
            let primary = function.names()[0];
            if !primaries.contains(&primary) {
                primaries.push(primary);
                seen.push(function.as_ref());
            }
        }
        seen.sort_unstable_by_key(|f| f.names()[0]);
        seen
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
