//! The source form of every node kind: syntax that re-lexes as an equivalent
//! program fragment. This is entirely separate from the structural debug form
//! in [`crate::pretty`].

use std::fmt;

use itertools::Itertools;

use super::literal::escape_string;
use super::{Binding, Expression, ExpressionNode, Identifier, Path, Segment, Statement, StatementNode};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) | Self::Const(name) => name.fmt(f),
            Self::Path(path) => path.fmt(f),

            Self::Var(binding) | Self::InstanceVar(binding) | Self::ClassVar(binding) => {
                binding.fmt(f)
            }

            Self::Prefix { op, value } => write!(f, "{op}{value}"),
            Self::Infix { op, left, right } => write!(f, "{left} {op} {right}"),

            Self::Assign { target, value } => write!(f, "{target} = {value}"),
            Self::Call { receiver, args } => {
                write!(f, "{receiver}({})", args.iter().format(", "))
            }

            Self::String(value) => escape_string(f, value),
            Self::Int(literal) => f.write_str(&literal.raw),
            Self::Float(literal) => f.write_str(&literal.raw),
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Nil => f.write_str("nil"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            StatementNode::Expression(expression) => write!(f, "({expression})"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("::")?;
        }

        f.write_str(&self.value)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.names {
            name.fmt(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A const segment renders as `::Name`, an ident segment as `::.name`.
        // The asymmetry is deliberate and load-bearing for consumers; keep it.
        match self {
            Self::Const(name) => name.fmt(f),
            Self::Ident(name) => {
                if name.global {
                    f.write_str("::")?;
                }

                write!(f, ".{}", name.value)
            }
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;

        if let Some(anno) = &self.anno {
            write!(f, " : {anno}")?;
        }

        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }

        Ok(())
    }
}
