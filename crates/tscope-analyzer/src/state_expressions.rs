//! Expression handlers.

use crate::error::AnalyzeError;
use crate::references::reference_flags;
use crate::state::AnalyzerState;
use tscope_syntax::{NodeArena, NodeIndex, SyntaxKind};

impl AnalyzerState {
    /// A plain identifier occurrence. In type mode it names a type and is
    /// not a value reference.
    pub(crate) fn visit_identifier(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        if self.type_mode {
            return Ok(());
        }
        self.manager
            .record_reference(arena, idx, reference_flags::READ, NodeIndex::NONE, false);
        Ok(())
    }

    pub(crate) fn visit_assignment_expression(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(assignment) = arena.get_assignment_at(idx) else {
            return Ok(());
        };
        let (op, left, right) = (assignment.op, assignment.left, assignment.right);

        let left_is_pattern = arena.kind(left).is_some_and(SyntaxKind::is_pattern);
        if left_is_pattern {
            if op.is_compound() {
                // `x += e` reads and writes in one occurrence.
                self.manager
                    .record_reference(arena, left, reference_flags::RW, right, false);
            } else {
                let right_hand = self.bind_pattern(arena, left, |manager, pattern, info| {
                    manager.record_default_value_references(
                        arena,
                        pattern,
                        info.assignments,
                        false,
                    );
                    manager.record_reference(arena, pattern, reference_flags::WRITE, right, false);
                })?;
                for node in right_hand {
                    self.visit(arena, node)?;
                }
            }
        } else {
            self.visit(arena, left)?;
        }
        self.visit(arena, right)
    }

    pub(crate) fn visit_update_expression(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(update) = arena.get_unary_at(idx) else {
            return Ok(());
        };
        let operand = update.operand;
        if arena.kind(operand).is_some_and(SyntaxKind::is_pattern) {
            self.manager
                .record_reference(arena, operand, reference_flags::RW, NodeIndex::NONE, false);
            Ok(())
        } else {
            self.visit_children(arena, idx)
        }
    }

    pub(crate) fn visit_member_expression(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(member) = arena.get_member_at(idx) else {
            return Ok(());
        };
        let (object, property, computed) = (member.object, member.property, member.computed);
        self.visit(arena, object)?;
        if computed {
            self.visit(arena, property)?;
        }
        Ok(())
    }

    pub(crate) fn visit_property(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(property) = arena.get_property_at(idx) else {
            return Ok(());
        };
        let (key, value, computed) = (property.key, property.value, property.computed);
        if computed {
            self.visit(arena, key)?;
        }
        // Shorthand properties share the key node as their value; visiting
        // the value records the reference either way.
        self.visit_opt(arena, value)
    }
}
