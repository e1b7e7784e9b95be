//! Symbol table for declare-before-use checking
//!
//! - [`DeclaredType`]: the closed set of built-in types a variable may have
//! - [`SymbolTable`]: a stack of scopes mapping variable names to their type
//!
//! # Scoping
//!
//! Declarations always land in the innermost scope. Lookups walk from the
//! innermost scope outwards and return the first hit, so an inner
//! declaration shadows an outer one until its scope is popped.

use rustc_hash::FxHashMap;
use std::fmt;

/// Built-in types, one per type-name token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Boolean,
    Char,
    Int,
    Float,
    String,
}

impl DeclaredType {
    /// Map a type-name token's text to its type.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(DeclaredType::Boolean),
            "char" => Some(DeclaredType::Char),
            "int" => Some(DeclaredType::Int),
            "float" => Some(DeclaredType::Float),
            "String" => Some(DeclaredType::String),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeclaredType::Boolean => "boolean",
            DeclaredType::Char => "char",
            DeclaredType::Int => "int",
            DeclaredType::Float => "float",
            DeclaredType::String => "String",
        }
    }

    /// Python literal for the value a fresh declaration holds.
    pub fn default_literal(self) -> &'static str {
        match self {
            DeclaredType::Boolean => "False",
            DeclaredType::Char | DeclaredType::String => "\"\"",
            DeclaredType::Int => "0",
            DeclaredType::Float => "0.0",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Scope = FxHashMap<String, DeclaredType>;

/// Stack of lexical scopes.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new scope
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Exit the current scope, dropping everything declared in it
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declare `name` in the innermost scope.
    ///
    /// Returns the type it previously had in that same scope, if any. With no
    /// scope open, a file-level scope is opened first.
    pub fn declare(&mut self, name: &str, ty: DeclaredType) -> Option<DeclaredType> {
        if self.scopes.is_empty() {
            self.push_scope();
        }
        self.scopes
            .last_mut()
            .and_then(|scope| scope.insert(name.to_string(), ty))
    }

    /// Resolve `name`, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<DeclaredType> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
