pub mod ast;
pub mod ir;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    /// A move statement was built with an illegal destination. This is a
    /// defect in the lowering logic, not in the program being compiled.
    #[error("move destination must be a TEMP or a MEM, not: {found}")]
    BadMoveTarget { found: String },
}

/// Lower an already-parsed, semantically checked program to IR.
///
/// Labels are drawn from the process-wide generator, so compiling several
/// programs in one process never reuses a label name.
pub fn compile(program: &ast::Program) -> Result<ir::ProgramIR, CompileError> {
    ir::ir_generator::lower(program)
}
