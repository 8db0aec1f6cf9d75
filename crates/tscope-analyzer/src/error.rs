//! Structural errors.
//!
//! Only frontend-contract violations are errors; unresolved references are
//! ordinary data in the scope tree. A structural error aborts the whole
//! walk: a partially-populated tree would silently misreport scoping.

use tscope_common::Span;
use tscope_syntax::SyntaxKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyzeErrorKind {
    /// A binding pattern contained a node kind the pattern binder does not
    /// recognize.
    MalformedPattern { kind: SyntaxKind },
    /// A `var`/`let`/`const` declaration with zero declarators.
    EmptyDeclaration,
}

/// A fatal analysis error, carrying the byte span of the offending node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzeError {
    pub kind: AnalyzeErrorKind,
    pub span: Span,
}

impl AnalyzeError {
    pub(crate) fn malformed_pattern(kind: SyntaxKind, span: Span) -> AnalyzeError {
        AnalyzeError {
            kind: AnalyzeErrorKind::MalformedPattern { kind },
            span,
        }
    }

    pub(crate) fn empty_declaration(span: Span) -> AnalyzeError {
        AnalyzeError {
            kind: AnalyzeErrorKind::EmptyDeclaration,
            span,
        }
    }
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            AnalyzeErrorKind::MalformedPattern { kind } => {
                write!(
                    f,
                    "unexpected {kind:?} node in a binding pattern at {}",
                    self.span
                )
            }
            AnalyzeErrorKind::EmptyDeclaration => {
                write!(f, "variable declaration at {} has no declarators", self.span)
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}
