// A tiny, linear IR with labels, jumps, temporaries, and intrinsic calls.

use std::fmt;

use crate::CompileError;

/// Runtime intrinsic: print a single character.
pub const PRINT_CHAR: &str = "_printchar";
/// Runtime intrinsic: print an integer.
pub const PRINT_INT: &str = "_printint";
/// Reserved end-of-program label. Referenced by the final jump of every
/// program; defined by the downstream code generator, never by this stage.
pub const END_LABEL: &str = "_END";

/// An ordered statement sequence, executed top-to-bottom except where jumps
/// redirect control. Self-contained: no back-references into the AST.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramIR {
    pub stms: Vec<Stm>,
}

impl ProgramIR {
    pub fn new() -> Self {
        Self { stms: Vec::new() }
    }

    /// Human-readable dump, one line per flattened statement. Debugging
    /// surface only, not a serialization format.
    pub fn to_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.stms.len());
        for stm in &self.stms {
            push_lines(stm, &mut out);
        }
        out
    }
}

fn push_lines(stm: &Stm, out: &mut Vec<String>) {
    match stm {
        Stm::Seq(a, b) => {
            push_lines(a, out);
            push_lines(b, out);
        }
        Stm::Label(name) => out.push(format!("{name}:")),
        other => out.push(format!("  {other}")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stm {
    /// `name = src`
    MoveTemp { name: String, src: Exp },

    /// `*(addr) = src`
    MoveMem { addr: Exp, src: Exp },

    /// `JUMP <target>`
    Jump(Exp),

    /// `if <left> <op> <right>: GOTO <if_true> else GOTO <if_false>`
    /// Both successor labels are always explicit; there is no fallthrough.
    CJump {
        left: Exp,
        op: Op,
        right: Exp,
        if_true: String,
        if_false: String,
    },

    /// `<name>:` (a pure marker, no runtime effect)
    Label(String),

    Noop,

    /// Structural composition of two statements; a convenience combinator,
    /// not needed once statements are flattened into an ordered list
    Seq(Box<Stm>, Box<Stm>),

    /// Evaluate for effect, discard the value
    Exp(Exp),

    /// Frame bracketing for future multi-procedure support; the
    /// single-procedure driver never emits these
    Prologue { params: usize, locals: usize },
    Epilogue { params: usize, locals: usize },
}

impl Stm {
    /// Build a move to `dst`. The destination must be a `Temp` or a `Mem`;
    /// anything else is a defect in the lowering logic itself.
    pub fn mov(dst: Exp, src: Exp) -> Result<Stm, CompileError> {
        match dst {
            Exp::Temp(name) => Ok(Stm::MoveTemp { name, src }),
            Exp::Mem(addr) => Ok(Stm::MoveMem { addr: *addr, src }),
            other => Err(CompileError::BadMoveTarget {
                found: other.to_string(),
            }),
        }
    }

    /// Fold a statement list into right-nested `Seq`s. An empty list
    /// collapses to `Noop`.
    pub fn seq(stms: Vec<Stm>) -> Stm {
        let mut rest = stms.into_iter().rev();
        let Some(last) = rest.next() else {
            return Stm::Noop;
        };
        rest.fold(last, |acc, s| Stm::Seq(Box::new(s), Box::new(acc)))
    }
}

impl fmt::Display for Stm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stm::MoveTemp { name, src } => write!(f, "{name} = {src}"),
            Stm::MoveMem { addr, src } => write!(f, "*({addr}) = {src}"),
            Stm::Jump(target) => write!(f, "JUMP {target}"),
            Stm::CJump {
                left,
                op,
                right,
                if_true,
                if_false,
            } => write!(
                f,
                "if {left} {op} {right}: GOTO {if_true} else GOTO {if_false}"
            ),
            Stm::Label(name) => write!(f, "{name}:"),
            Stm::Noop => write!(f, "nop"),
            Stm::Seq(a, b) => write!(f, "{a}; {b}"),
            Stm::Exp(e) => write!(f, "{e}"),
            Stm::Prologue { params, locals } => write!(f, "PROLOGUE({params}, {locals})"),
            Stm::Epilogue { params, locals } => write!(f, "EPILOGUE({params}, {locals})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    /// Machine-word integer constant. Booleans are the constants 0 and 1.
    Const(i64),

    /// Unbounded virtual register referenced by name; no allocation to
    /// physical storage happens in this stage
    Temp(String),

    /// Memory dereference of an address expression
    Mem(Box<Exp>),

    /// `left <op> right` (the left operand is evaluated first)
    BinOp {
        op: Op,
        left: Box<Exp>,
        right: Box<Exp>,
    },

    /// Call of a named external intrinsic
    Call { target: Box<Exp>, args: Vec<Exp> },

    /// A label used as a value, e.g. as a call or jump target
    Name(String),

    /// A statement evaluated strictly before the expression's value is
    /// produced
    ESeq(Box<Stm>, Box<Exp>),
}

impl Exp {
    pub fn binop(left: Exp, op: Op, right: Exp) -> Exp {
        Exp::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(target: Exp, args: Vec<Exp>) -> Exp {
        Exp::Call {
            target: Box::new(target),
            args,
        }
    }

    pub fn mem(addr: Exp) -> Exp {
        Exp::Mem(Box::new(addr))
    }

    pub fn eseq(stm: Stm, exp: Exp) -> Exp {
        Exp::ESeq(Box::new(stm), Box::new(exp))
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Const(n) => write!(f, "{n}"),
            Exp::Temp(name) => write!(f, "{name}"),
            Exp::Mem(addr) => write!(f, "*({addr})"),
            Exp::BinOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Exp::Call { target, args } => write!(f, "{target}({})", Args(args)),
            Exp::Name(label) => write!(f, "{label}"),
            Exp::ESeq(stm, exp) => write!(f, "eseq({stm}; {exp})"),
        }
    }
}

struct Args<'a>(&'a [Exp]);

impl<'a> fmt::Display for Args<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        Ok(())
    }
}

/// Operator space shared by binary operations and conditional jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Eq,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Lt => "<",
            Op::Eq => "==",
        };
        write!(f, "{s}")
    }
}
