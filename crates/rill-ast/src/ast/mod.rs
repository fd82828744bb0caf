//! The tree the parser produces and every later pass consumes. Nodes are
//! plain data: the parser builds them bottom-up with their spans, composes
//! them into exclusively-owned trees, and later passes either rewrite them in
//! place or drop them. Nothing here validates structure (an empty path, say) -
//! that is the parser's responsibility.
//!
//! Every node kind supports two independent renderings: the source form
//! (`Display`, producing re-lexable syntax) and the structural debug form
//! ([`Prettier`](crate::pretty::Prettier)).

mod display;
mod literal;
mod operator;

#[cfg(test)]
mod tests;

pub use literal::{FloatLiteral, IntLiteral};
pub use operator::{InfixOp, PrefixOp};

use crate::source::Span;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Expression {
    pub node: ExpressionNode,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ExpressionNode {
    /// A lowercase-style name, like `foo` or `::foo`.
    Ident(Identifier),

    /// A capitalized, type-style name, like `Foo` or `::Foo`. Deliberately a
    /// separate kind from [`Ident`](ExpressionNode::Ident) even though the
    /// payload is the same, so later passes can dispatch on the two
    /// exhaustively.
    Const(Identifier),

    /// A qualified sequence of identifier segments, like `::Foo.bar`.
    Path(Path),

    /// A local binding, with an optional annotation and initializer.
    Var(Binding),

    /// An instance-level binding. Same shape as
    /// [`Var`](ExpressionNode::Var), distinct tag.
    InstanceVar(Binding),

    /// A class-level binding. Same shape as [`Var`](ExpressionNode::Var),
    /// distinct tag.
    ClassVar(Binding),

    /// A unary operator applied to an operand, like `-x`.
    Prefix {
        op: PrefixOp,
        value: Box<Expression>,
    },

    /// A binary operator applied to two operands, like `a + b`.
    Infix {
        op: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// An assignment, like `x = 1`.
    Assign {
        target: Box<Expression>,
        value: Box<Expression>,
    },

    /// A call with an ordered (possibly empty) argument list, like `f(1, 2)`.
    Call {
        receiver: Box<Expression>,
        args: Vec<Expression>,
    },

    String(String),
    Int(IntLiteral),
    Float(FloatLiteral),
    Bool(bool),
    Nil,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Statement {
    pub node: StatementNode,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum StatementNode {
    /// An expression in statement position.
    Expression(Expression),
}

/// The payload of both `Ident` and `Const` nodes. `global` is true when the
/// name was prefixed with an explicit root-namespace marker (`::`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub global: bool,
}

impl Identifier {
    pub fn new(value: impl Into<String>, global: bool) -> Self {
        Self {
            value: value.into(),
            global,
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Path {
    pub names: Vec<Segment>,
    pub global: bool,
}

/// One segment of a [`Path`]. The two cases render differently in the source
/// form, so a path must remember which one each of its names was.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Segment {
    Ident(Identifier),
    Const(Identifier),
}

/// The payload of the `Var`, `InstanceVar` and `ClassVar` nodes: a name, an
/// optional declared type, and an optional initializer.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Binding {
    pub name: Box<Expression>,
    pub anno: Option<Box<Expression>>,
    pub value: Option<Box<Expression>>,
}

impl Binding {
    pub fn new(
        name: Expression,
        anno: Option<Expression>,
        value: Option<Expression>,
    ) -> Self {
        Self {
            name: Box::new(name),
            anno: anno.map(Box::new),
            value: value.map(Box::new),
        }
    }

    /// True iff this binding has no initializer, independent of whether it
    /// has an annotation.
    pub fn is_uninitialized(&self) -> bool {
        self.value.is_none()
    }
}

impl Expression {
    pub fn new(node: ExpressionNode, span: Span) -> Self {
        Self { node, span }
    }

    pub fn ident(value: impl Into<String>, global: bool, span: Span) -> Self {
        Self::new(ExpressionNode::Ident(Identifier::new(value, global)), span)
    }

    pub fn constant(value: impl Into<String>, global: bool, span: Span) -> Self {
        Self::new(ExpressionNode::Const(Identifier::new(value, global)), span)
    }

    pub fn path(names: Vec<Segment>, global: bool, span: Span) -> Self {
        Self::new(ExpressionNode::Path(Path { names, global }), span)
    }

    pub fn var(
        name: Expression,
        anno: Option<Expression>,
        value: Option<Expression>,
        span: Span,
    ) -> Self {
        Self::new(ExpressionNode::Var(Binding::new(name, anno, value)), span)
    }

    pub fn instance_var(
        name: Expression,
        anno: Option<Expression>,
        value: Option<Expression>,
        span: Span,
    ) -> Self {
        Self::new(
            ExpressionNode::InstanceVar(Binding::new(name, anno, value)),
            span,
        )
    }

    pub fn class_var(
        name: Expression,
        anno: Option<Expression>,
        value: Option<Expression>,
        span: Span,
    ) -> Self {
        Self::new(
            ExpressionNode::ClassVar(Binding::new(name, anno, value)),
            span,
        )
    }

    pub fn prefix(op: PrefixOp, value: Expression, span: Span) -> Self {
        Self::new(
            ExpressionNode::Prefix {
                op,
                value: Box::new(value),
            },
            span,
        )
    }

    pub fn infix(op: InfixOp, left: Expression, right: Expression, span: Span) -> Self {
        Self::new(
            ExpressionNode::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    pub fn assign(target: Expression, value: Expression, span: Span) -> Self {
        Self::new(
            ExpressionNode::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        )
    }

    pub fn call(receiver: Expression, args: Vec<Expression>, span: Span) -> Self {
        Self::new(
            ExpressionNode::Call {
                receiver: Box::new(receiver),
                args,
            },
            span,
        )
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Self::new(ExpressionNode::String(value.into()), span)
    }

    pub fn int(raw: impl Into<String>, span: Span) -> Self {
        Self::new(ExpressionNode::Int(IntLiteral::new(raw)), span)
    }

    pub fn float(raw: impl Into<String>, span: Span) -> Self {
        Self::new(ExpressionNode::Float(FloatLiteral::new(raw)), span)
    }

    pub fn boolean(value: bool, span: Span) -> Self {
        Self::new(ExpressionNode::Bool(value), span)
    }

    pub fn nil(span: Span) -> Self {
        Self::new(ExpressionNode::Nil, span)
    }
}

impl Statement {
    pub fn new(node: StatementNode, span: Span) -> Self {
        Self { node, span }
    }

    /// Wrap an expression in statement position.
    pub fn expression(expression: Expression, span: Span) -> Self {
        Self::new(StatementNode::Expression(expression), span)
    }
}
