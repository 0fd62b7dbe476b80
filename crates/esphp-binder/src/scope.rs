//! Scope table: one record per function the emitter entered.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::ScopeRecorder;

/// Index of a [`Scope`] in its [`ScopeTable`], in recording order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

/// Which source construct introduced a function scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FunctionKind {
    Declaration,
    Expression,
    Method,
}

/// What the emitter knows about a function at the moment it enters it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry<'a> {
    /// Empty for anonymous function expressions.
    pub name: &'a str,
    pub parameters: Vec<&'a str>,
    pub kind: FunctionKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub id: ScopeId,
    pub name: String,
    pub parameters: Vec<String>,
    pub kind: FunctionKind,
}

/// Flat list of recorded function scopes.
#[derive(Debug, Default, Serialize)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
    #[serde(skip)]
    by_name: FxHashMap<String, Vec<ScopeId>>,
}

impl ScopeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0 as usize)
    }

    /// All scopes recorded for functions named `name`, in recording order.
    pub fn scopes_named<'t>(&'t self, name: &str) -> impl Iterator<Item = &'t Scope> + 't {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.get(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scope> {
        self.scopes.iter()
    }

    /// Allocate a scope for `function` and return its id.
    pub fn create(&mut self, function: &FunctionEntry<'_>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        debug!(
            scope = id.0,
            name = function.name,
            params = function.parameters.len(),
            kind = ?function.kind,
            "created function scope"
        );
        self.scopes.push(Scope {
            id,
            name: function.name.to_string(),
            parameters: function.parameters.iter().map(|p| (*p).to_string()).collect(),
            kind: function.kind,
        });
        self.by_name
            .entry(function.name.to_string())
            .or_default()
            .push(id);
        id
    }
}

impl ScopeRecorder for ScopeTable {
    fn on_function_entered(&mut self, function: &FunctionEntry<'_>) {
        self.create(function);
    }
}

impl<'t> IntoIterator for &'t ScopeTable {
    type Item = &'t Scope;
    type IntoIter = std::slice::Iter<'t, Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.iter()
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod scope_tests;
