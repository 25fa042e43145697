//! Symbolic integer expression algebra.
//!
//! An [`Expr`] decorates parameterised roles and conditional branches with a
//! small arithmetic language. Construction, constant folding ([`Expr::evaluate`]),
//! variable substitution ([`Expr::substitute`]), structural simplification
//! ([`Expr::simplify`]) and the golden-file printer ([`Expr::print`]) all live
//! here; nothing else in the crate reaches into an `Expr`'s shape directly.

use std::fmt;

use crate::error::EvalError;

/// The operator of a [`Expr::Bin`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    /// Inclusive numeric interval `L..R`.
    Range,
    /// Pair of index dimensions `L][R`.
    Tuple,
    /// Boolean predicate `L==R`.
    Equal,
    /// Binds a variable to a range `L:R`.
    Bind,
}

impl BinOp {
    /// True for the kinds [`Expr::evaluate`] folds arithmetically; the rest
    /// (`Range`, `Tuple`, `Equal`, `Bind`) are preserved as `Bin` nodes whose
    /// children are still evaluated recursively.
    fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod | BinOp::Shl | BinOp::Shr
        )
    }
}

/// A symbolic integer expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Const(i64),
    Var(String),
    Bin(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn const_(i: i64) -> Expr {
        Expr::Const(i)
    }

    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn bin(l: Expr, op: BinOp, r: Expr) -> Expr {
        Expr::Bin(op, Box::new(l), Box::new(r))
    }

    /// Bottom-up structural simplification. Currently implements a single
    /// rule: a range whose endpoints are the same variable collapses to that
    /// variable (`i..i` becomes `i`). This is the extension point for future
    /// rules; children are always simplified first so a rule fires at any
    /// depth.
    pub fn simplify(self) -> Expr {
        match self {
            Expr::Bin(op, l, r) => {
                let l = l.simplify();
                let r = r.simplify();
                if let (BinOp::Range, Expr::Var(ln), Expr::Var(rn)) = (op, &l, &r) {
                    if ln == rn {
                        return Expr::Var(ln.clone());
                    }
                }
                Expr::Bin(op, Box::new(l), Box::new(r))
            }
            leaf => leaf,
        }
    }

    /// Bottom-up constant folding over the arithmetic and shift operators.
    /// Non-arithmetic kinds (`range`, `tuple`, `equal`, `bind`) are kept as
    /// `Bin` nodes with their children evaluated. Consumes `self` since
    /// expressions are never shared in this crate.
    pub fn evaluate(self) -> Result<Expr, EvalError> {
        match self {
            Expr::Const(_) | Expr::Var(_) => Ok(self),
            Expr::Bin(op, l, r) => {
                let l = l.evaluate()?;
                let r = r.evaluate()?;
                if op.is_arithmetic() {
                    if let (Expr::Const(lv), Expr::Const(rv)) = (&l, &r) {
                        return Ok(Expr::Const(fold(op, *lv, *rv)?));
                    }
                }
                Ok(Expr::Bin(op, Box::new(l), Box::new(r)))
            }
        }
    }

    /// Replaces every occurrence of `Var(name)` with `Const(value)`, without
    /// evaluating anything. Non-destructive: the receiver may still be used
    /// for diagnostics after this call.
    pub fn substitute(&self, name: &str, value: i64) -> Expr {
        match self {
            Expr::Const(i) => Expr::Const(*i),
            Expr::Var(n) if n == name => Expr::Const(value),
            Expr::Var(n) => Expr::Var(n.clone()),
            Expr::Bin(op, l, r) => Expr::Bin(
                *op,
                Box::new(l.substitute(name, value)),
                Box::new(r.substitute(name, value)),
            ),
        }
    }

    /// Applies [`Expr::evaluate`] then renders with the golden-file grammar.
    /// An evaluation failure is propagated rather than silently ignored,
    /// since `Print` is defined in terms of `Evaluate`.
    pub fn print(self) -> Result<String, EvalError> {
        Ok(self.evaluate()?.to_string())
    }

    /// Evaluates a clone of `self` for display purposes, never failing:
    /// an evaluation error renders inline instead of propagating. Used by
    /// the tree printer (component E), where printing must never fail.
    pub fn display_evaluated(&self) -> String {
        match self.clone().evaluate() {
            Ok(e) => e.to_string(),
            Err(err) => format!("<eval error: {err}>"),
        }
    }
}

fn fold(op: BinOp, l: i64, r: i64) -> Result<i64, EvalError> {
    match op {
        BinOp::Add => Ok(l.wrapping_add(r)),
        BinOp::Sub => Ok(l.wrapping_sub(r)),
        BinOp::Mul => Ok(l.wrapping_mul(r)),
        BinOp::Div => {
            if r == 0 {
                Err(EvalError::DivisionByZero { lhs: l, rhs: r })
            } else {
                Ok(l.wrapping_div(r))
            }
        }
        BinOp::Mod => {
            if r == 0 {
                Err(EvalError::ModuloByZero { lhs: l, rhs: r })
            } else {
                Ok(l.wrapping_rem(r))
            }
        }
        BinOp::Shl => {
            if r < 0 {
                Err(EvalError::NegativeShift { count: r })
            } else {
                Ok(l.wrapping_shl(r as u32))
            }
        }
        BinOp::Shr => {
            if r < 0 {
                Err(EvalError::NegativeShift { count: r })
            } else {
                Ok(l.wrapping_shr(r as u32))
            }
        }
        BinOp::Range | BinOp::Tuple | BinOp::Equal | BinOp::Bind => unreachable!("not arithmetic"),
    }
}

/// Raw structural rendering, without applying [`Expr::evaluate`]. Useful in
/// debug contexts where an evaluation failure must not be fatal; the
/// canonical printed form is [`Expr::print`].
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(i) => write!(f, "{i}"),
            Expr::Var(n) => write!(f, "{n}"),
            Expr::Bin(op, l, r) => match op {
                BinOp::Add => write!(f, "({l}+{r})"),
                BinOp::Sub => write!(f, "({l}-{r})"),
                BinOp::Mul => write!(f, "({l}*{r})"),
                BinOp::Div => write!(f, "({l}/{r})"),
                BinOp::Mod => write!(f, "({l}%{r})"),
                BinOp::Shl => write!(f, "({l}<<{r})"),
                BinOp::Shr => write!(f, "({l}>>{r})"),
                BinOp::Range => write!(f, "{l}..{r}"),
                BinOp::Tuple => write!(f, "{l}][{r}"),
                BinOp::Equal => write!(f, "{l}=={r}"),
                BinOp::Bind => write!(f, "{l}:{r}"),
            },
        }
    }
}
