//! AST to IR lowering module.
//!
//! This module handles the translation of the high-level AST into
//! a linear intermediate representation (IR).

pub mod context;
pub mod expr;
pub mod stmt;

use crate::ast::Program;
use crate::ir::ProgramIR;
use crate::CompileError;

pub use context::{Gen, LabelGen};

/// Lower a program with the process-wide label generator.
pub fn lower(program: &Program) -> Result<ProgramIR, CompileError> {
    lower_with(program, LabelGen::default())
}

/// Lower a program drawing labels from an explicit generator.
pub fn lower_with(program: &Program, labels: LabelGen) -> Result<ProgramIR, CompileError> {
    let mut g = Gen::with_labels(labels);
    g.lower_program(program)?;
    Ok(g.finish())
}
