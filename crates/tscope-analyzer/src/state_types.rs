//! Type-space handlers: type mode toggling, `typeof` queries, and enums.
//!
//! Type aliases, interfaces, annotations and type-parameter lists declare
//! no values; their subtrees are walked only so that `typeof` queries —
//! value references reconstructed as types — are discovered.

use crate::error::AnalyzeError;
use crate::references::reference_flags;
use crate::scopes::ScopeKind;
use crate::state::AnalyzerState;
use crate::variables::{Definition, DefinitionKind};
use tscope_syntax::{NodeArena, NodeIndex};

impl AnalyzerState {
    /// Entering a type construct from value mode flips to type mode for
    /// the duration of the subtree; nested type constructs change nothing.
    pub(crate) fn visit_type_construct(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        if self.type_mode {
            self.visit_children(arena, idx)
        } else {
            self.type_mode = true;
            let result = self.visit_children(arena, idx);
            self.type_mode = false;
            result
        }
    }

    /// `typeof x` in type position: the operand is a value-space reference,
    /// so type mode is suspended for the subtree and restored afterwards.
    /// The restore supports `typeof` nested inside another `typeof`'s type
    /// arguments.
    pub(crate) fn visit_type_query(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let previous = self.type_mode;
        self.type_mode = false;
        let result = self.visit_children(arena, idx);
        self.type_mode = previous;
        result
    }

    /// `typeof a.b.c` references only the root value `a`; the rest is a
    /// property path.
    pub(crate) fn visit_qualified_name(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(qualified) = arena.get_pair_at(idx) else {
            return Ok(());
        };
        self.visit(arena, qualified.left)
    }

    /// An enum declares its name in the enclosing scope and opens a
    /// dedicated scope for its members, so that later member initializers
    /// can read earlier members:
    ///
    /// ```text
    /// enum E { A, B = A }     // A resolves to the member, not an outer A
    /// ```
    pub(crate) fn visit_enum_declaration(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(data) = arena.get_enum_at(idx) else {
            return Ok(());
        };
        if data.name.is_some()
            && let Some(current) = self.manager.current()
        {
            self.manager.define_variable(
                arena,
                current,
                Definition::new(DefinitionKind::EnumName, data.name, idx),
            );
        }
        self.manager.push_scope(arena, ScopeKind::Enum, idx);
        for &member in &data.members {
            self.visit(arena, member)?;
        }
        self.manager.close(arena, idx);
        Ok(())
    }

    /// An enum member binds its name in the enum scope. A member with an
    /// initializer also writes its own name, and the initializer itself is
    /// an ordinary value-space expression.
    pub(crate) fn visit_enum_member(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(data) = arena.get_enum_member_at(idx) else {
            return Ok(());
        };
        let (name, initializer) = (data.name, data.initializer);
        let Some(current) = self.manager.current() else {
            return Ok(());
        };
        self.manager.define_variable(
            arena,
            current,
            Definition::new(DefinitionKind::EnumMemberName, name, idx),
        );
        if initializer.is_some() {
            self.manager
                .record_reference(arena, name, reference_flags::WRITE, initializer, true);
            self.visit(arena, initializer)?;
        }
        Ok(())
    }
}
