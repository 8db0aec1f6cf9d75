//! Binding pattern decomposition.
//!
//! A binding pattern (plain identifier, array/object destructuring, with
//! defaults and rest) is walked down to the concrete identifiers it binds.
//! Nodes that are *inside* the pattern syntactically but are not bindings —
//! default-value expressions, type annotations, computed keys, the object
//! of a member-expression target — are collected as right-hand nodes for
//! the caller to visit as ordinary expressions/types afterwards.

use crate::error::AnalyzeError;
use smallvec::SmallVec;
use tscope_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// Per-identifier binding info handed to the callback.
pub struct PatternBindInfo<'a> {
    /// Whether this identifier is the immediate argument of a rest element.
    pub rest: bool,
    /// The `AssignmentPattern` nodes in effect around this identifier,
    /// outermost first. Each one's right side is a default value assigned
    /// to the binding.
    pub assignments: &'a [NodeIndex],
}

/// Walk `root` as a binding pattern, invoking `callback` once per bound
/// identifier, and return the right-hand nodes to visit afterwards.
///
/// An unrecognized node kind inside the pattern is a frontend-contract
/// violation and fails the whole analysis; skipping it would leave the
/// scope tree silently incomplete.
pub fn visit_binding_pattern(
    arena: &NodeArena,
    root: NodeIndex,
    callback: &mut dyn FnMut(NodeIndex, &PatternBindInfo<'_>),
) -> Result<Vec<NodeIndex>, AnalyzeError> {
    let mut binder = PatternBinder {
        callback,
        assignments: SmallVec::new(),
        rest_elements: SmallVec::new(),
        right_hand_nodes: Vec::new(),
    };
    binder.visit(arena, root)?;
    Ok(binder.right_hand_nodes)
}

struct PatternBinder<'cb> {
    callback: &'cb mut dyn FnMut(NodeIndex, &PatternBindInfo<'_>),
    assignments: SmallVec<[NodeIndex; 2]>,
    rest_elements: SmallVec<[NodeIndex; 2]>,
    right_hand_nodes: Vec<NodeIndex>,
}

impl PatternBinder<'_> {
    fn visit(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), AnalyzeError> {
        // Array-pattern holes.
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };

        match node.kind {
            SyntaxKind::Identifier => {
                let rest = self
                    .rest_elements
                    .last()
                    .and_then(|&rest| arena.get_wrapper_at(rest))
                    .is_some_and(|wrapper| wrapper.inner == idx);
                (self.callback)(idx, &PatternBindInfo {
                    rest,
                    assignments: &self.assignments,
                });
                if let Some(data) = arena.get_identifier(node)
                    && data.type_annotation.is_some()
                {
                    self.right_hand_nodes.push(data.type_annotation);
                }
                Ok(())
            }

            SyntaxKind::ArrayPattern | SyntaxKind::ObjectPattern => {
                if let Some(data) = arena.get_pattern(node) {
                    for &element in &data.elements {
                        self.visit(arena, element)?;
                    }
                    if data.type_annotation.is_some() {
                        self.right_hand_nodes.push(data.type_annotation);
                    }
                }
                Ok(())
            }

            SyntaxKind::Property => {
                if let Some(data) = arena.get_property(node) {
                    if data.computed {
                        self.right_hand_nodes.push(data.key);
                    }
                    self.visit(arena, data.value)?;
                }
                Ok(())
            }

            SyntaxKind::AssignmentPattern => {
                if let Some(data) = arena.get_pair(node) {
                    let (left, right) = (data.left, data.right);
                    self.assignments.push(idx);
                    self.visit(arena, left)?;
                    self.assignments.pop();
                    self.right_hand_nodes.push(right);
                }
                Ok(())
            }

            SyntaxKind::RestElement | SyntaxKind::SpreadElement => {
                if let Some(data) = arena.get_wrapper(node) {
                    let argument = data.inner;
                    self.rest_elements.push(idx);
                    self.visit(arena, argument)?;
                    self.rest_elements.pop();
                }
                Ok(())
            }

            // Destructuring-assignment targets may write through members:
            // `({ a: obj.x } = v)`. Nothing is bound; the object (and a
            // computed key) are expressions for the caller.
            SyntaxKind::MemberExpression => {
                if let Some(data) = arena.get_member(node) {
                    if data.computed {
                        self.right_hand_nodes.push(data.property);
                    }
                    self.right_hand_nodes.push(data.object);
                }
                Ok(())
            }

            kind => Err(AnalyzeError::malformed_pattern(kind, node.span)),
        }
    }
}
