use super::context::Gen;
use crate::ast::{BinOp as AstBinOp, Expr, UnOp};
use crate::ir::{Exp, Op};
use crate::CompileError;

impl Gen {
    /// Lower one AST expression to one IR expression.
    ///
    /// Pure: nothing is emitted. The left operand of a binary operation is
    /// lowered strictly before the right one, and the IR consumer must keep
    /// that evaluation order.
    pub fn lower_exp(&self, e: &Expr) -> Result<Exp, CompileError> {
        match e {
            Expr::Number(n) => Ok(Exp::Const(*n)),
            Expr::Bool(true) => Ok(Exp::Const(1)),
            Expr::Bool(false) => Ok(Exp::Const(0)),
            Expr::Variable(name) => Ok(Exp::Temp(name.clone())),
            Expr::Unary {
                op: UnOp::Not,
                operand,
            } => {
                // Complement within the 0/1 encoding.
                let v = self.lower_exp(operand)?;
                Ok(Exp::binop(Exp::Const(1), Op::Sub, v))
            }
            Expr::Binary { op, left, right } => {
                let l = self.lower_exp(left)?;
                let r = self.lower_exp(right)?;
                Ok(Exp::binop(l, map_op(*op), r))
            }
        }
    }
}

/// Map an AST operator to its IR counterpart.
pub fn map_op(op: AstBinOp) -> Op {
    match op {
        AstBinOp::Add => Op::Add,
        AstBinOp::Sub => Op::Sub,
        AstBinOp::Mul => Op::Mul,
        AstBinOp::Div => Op::Div,
        AstBinOp::Lt => Op::Lt,
        AstBinOp::Eq => Op::Eq,
        // Coincides with logical AND only while operands stay in {0,1}.
        // Not a general bitwise AND; do not widen without a real boolean op.
        AstBinOp::And => Op::Mul,
    }
}
