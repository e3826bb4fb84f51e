use super::context::Gen;
use crate::ast::{Expr, Program, Stmt};
use crate::ir::{Exp, Op, Stm, END_LABEL, PRINT_CHAR, PRINT_INT};
use crate::CompileError;

impl Gen {
    /// Lower the top-level procedure body, in order, and close the program
    /// with the jump to the reserved end label.
    pub fn lower_program(&mut self, p: &Program) -> Result<(), CompileError> {
        for s in &p.proc.body {
            self.lower_stmt(s)?;
        }
        // `_END` is defined by the downstream code generator.
        self.emit(Stm::Jump(Exp::Name(END_LABEL.to_string())));
        Ok(())
    }

    pub fn lower_stmt(&mut self, s: &Stmt) -> Result<(), CompileError> {
        match s {
            // Storage is implicit; the identifier names its temporary at
            // first use.
            Stmt::VarDecl { .. } => Ok(()),
            Stmt::Assign { name, value } => {
                let src = self.lower_exp(value)?;
                let mov = Stm::mov(Exp::Temp(name.clone()), src)?;
                self.emit(mov);
                Ok(())
            }
            Stmt::Block(ss) => self.emit_block(ss),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => self.lower_if(condition, then_branch, else_branch),
            Stmt::While { condition, body } => self.lower_while(condition, body),
            Stmt::PrintChar(e) => self.lower_print(PRINT_CHAR, e),
            Stmt::PrintInt(e) => self.lower_print(PRINT_INT, e),
        }
    }

    /// Lower a statement sequence in order. No scope boundary: the namespace
    /// stays flat.
    pub fn emit_block(&mut self, stmts: &[Stmt]) -> Result<(), CompileError> {
        for s in stmts {
            self.lower_stmt(s)?;
        }
        Ok(())
    }

    pub fn lower_if(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: &Stmt,
    ) -> Result<(), CompileError> {
        let true_label = self.new_label();
        let false_label = self.new_label();
        let end_label = self.new_label();

        let c = self.lower_exp(cond)?;
        self.emit(Stm::CJump {
            left: c,
            op: Op::Eq,
            right: Exp::Const(1),
            if_true: true_label.clone(),
            if_false: false_label.clone(),
        });

        self.emit(Stm::Label(true_label));
        self.lower_stmt(then_branch)?;
        self.emit(Stm::Jump(Exp::Name(end_label.clone())));

        self.emit(Stm::Label(false_label));
        self.lower_stmt(else_branch)?;
        self.emit(Stm::Label(end_label));
        Ok(())
    }

    pub fn lower_while(&mut self, cond: &Expr, body: &Stmt) -> Result<(), CompileError> {
        let cond_label = self.new_label();
        let start_label = self.new_label();
        let end_label = self.new_label();

        // The condition is re-evaluated at the top of every iteration,
        // including the first.
        self.emit(Stm::Label(cond_label.clone()));
        let c = self.lower_exp(cond)?;
        self.emit(Stm::CJump {
            left: c,
            op: Op::Eq,
            right: Exp::Const(1),
            if_true: start_label.clone(),
            if_false: end_label.clone(),
        });

        self.emit(Stm::Label(start_label));
        self.lower_stmt(body)?;
        self.emit(Stm::Jump(Exp::Name(cond_label)));
        self.emit(Stm::Label(end_label));
        Ok(())
    }

    fn lower_print(&mut self, intrinsic: &str, arg: &Expr) -> Result<(), CompileError> {
        let v = self.lower_exp(arg)?;
        self.emit(Stm::Exp(Exp::call(Exp::Name(intrinsic.to_string()), vec![v])));
        Ok(())
    }
}
