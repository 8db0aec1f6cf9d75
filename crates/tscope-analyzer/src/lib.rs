//! Lexical scope and binding resolution for a gradually-typed JavaScript
//! superset.
//!
//! The analyzer consumes an already-parsed syntax tree (built through
//! `tscope-syntax`) and produces a [`ScopeTree`]: every scope with its
//! declared variables, every identifier use with the variable it resolves
//! to, and the references that stayed unresolved past the global scope.
//! Type-level constructs (interfaces, type aliases, type parameters) bind
//! no values; `typeof` queries inside them are still discovered as
//! value-space references.
//!
//! One call owns all working state; independent calls share nothing and
//! may run in parallel on different trees. The returned tree is
//! immutable — resolution invariants do not survive mutation.
//!
//! ```
//! use tscope_analyzer::{AnalyzeOptions, analyze};
//! use tscope_common::Span;
//! use tscope_syntax::{NodeArena, NodeIndex};
//!
//! // console.log(x)
//! let mut arena = NodeArena::new();
//! let console = arena.add_identifier("console", Span::new(0, 7));
//! let log = arena.add_identifier("log", Span::new(8, 11));
//! let callee = arena.add_member_expression(console, log, false, Span::new(0, 11));
//! let x = arena.add_identifier("x", Span::new(12, 13));
//! let call = arena.add_call_expression(callee, vec![], vec![x], Span::new(0, 14));
//! let stmt = arena.add_expression_statement(call, Span::new(0, 15));
//! let root = arena.add_source_file(vec![stmt], Span::new(0, 15));
//!
//! let tree = analyze(&arena, root, AnalyzeOptions::default()).unwrap();
//! // Neither name is declared: both bubble out of the global scope.
//! assert_eq!(tree.unresolved().len(), 2);
//! ```

pub mod error;
pub mod manager;
pub mod pattern;
pub mod references;
pub mod scopes;
pub mod state;
mod state_declarations;
mod state_expressions;
mod state_types;
pub mod variables;

pub use error::{AnalyzeError, AnalyzeErrorKind};
pub use manager::ScopeManager;
pub use references::{Reference, ReferenceId, reference_flags};
pub use scopes::{Scope, ScopeId, ScopeKind, ScopeTree};
pub use state::AnalyzerState;
pub use variables::{Definition, DefinitionKind, Variable, VariableId};

use serde::Serialize;
use tscope_syntax::{NodeArena, NodeIndex};

/// Whether the root is a script or a module. Modules get their own scope
/// under the global one and are strict throughout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

/// Per-call configuration. There is no process-wide state; every run is
/// configured by the value passed to [`analyze`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzeOptions {
    pub source_type: SourceType,
    /// Treat the top level as a function body (CommonJS-style hosts).
    pub global_return: bool,
    /// Force strict mode from the top.
    pub implied_strict: bool,
}

/// Analyze the tree rooted at `root` and return the completed scope tree.
///
/// Structural frontend-contract violations (a malformed binding pattern, a
/// value declaration with no declarators) abort the walk with an error
/// carrying the offending span; no partial tree is returned. Unresolved
/// references are not errors — they are reported via
/// [`ScopeTree::unresolved`].
#[tracing::instrument(level = "debug", skip(arena, options), fields(root = root.0))]
pub fn analyze(
    arena: &NodeArena,
    root: NodeIndex,
    options: AnalyzeOptions,
) -> Result<ScopeTree, AnalyzeError> {
    AnalyzerState::new(options).analyze_source_file(arena, root)
}
