//! The structural debug form of every node kind: the kind's name followed by
//! each stored field labelled by name, recursing into children. Sequences
//! render bracketed and comma-separated. Completely independent of the source
//! form in [`crate::ast::display`].

use std::io;

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::ast::{
    Binding, Expression, ExpressionNode, Identifier, Path, Segment, Statement, StatementNode,
};

pub struct Prettier<'a> {
    allocator: Arena<'a>,
    width: usize,
}

impl<'a> Prettier<'a> {
    pub fn new() -> Self {
        Self {
            allocator: Arena::new(),
            width: 80,
        }
    }

    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    pub fn pretty_expression(&'a self, expression: &Expression) -> String {
        let doc = self.doc_expression(expression);
        let mut res = Vec::new();
        doc.render(self.width, &mut res).unwrap();
        String::from_utf8(res).unwrap()
    }

    pub fn pretty_statement(&'a self, statement: &Statement) -> String {
        let doc = self.doc_statement(statement);
        let mut res = Vec::new();
        doc.render(self.width, &mut res).unwrap();
        String::from_utf8(res).unwrap()
    }

    pub fn write_expression(
        &'a self,
        sink: &mut impl io::Write,
        expression: &Expression,
    ) -> io::Result<()> {
        self.doc_expression(expression).render(self.width, sink)
    }

    pub fn write_statement(
        &'a self,
        sink: &mut impl io::Write,
        statement: &Statement,
    ) -> io::Result<()> {
        self.doc_statement(statement).render(self.width, sink)
    }

    fn doc_statement(&'a self, statement: &Statement) -> DocBuilder<'a, Arena<'a>> {
        match &statement.node {
            StatementNode::Expression(expression) => self.doc_node(
                "ExpressionStatement",
                vec![("expression", self.doc_expression(expression))],
            ),
        }
    }

    fn doc_expression(&'a self, expression: &Expression) -> DocBuilder<'a, Arena<'a>> {
        match &expression.node {
            ExpressionNode::Ident(name) => self.doc_identifier("Ident", name),
            ExpressionNode::Const(name) => self.doc_identifier("Const", name),
            ExpressionNode::Path(path) => self.doc_path(path),

            ExpressionNode::Var(binding) => self.doc_binding("Var", binding),
            ExpressionNode::InstanceVar(binding) => self.doc_binding("InstanceVar", binding),
            ExpressionNode::ClassVar(binding) => self.doc_binding("ClassVar", binding),

            ExpressionNode::Prefix { op, value } => self.doc_node(
                "Prefix",
                vec![
                    ("op", self.allocator.text(format!("{op:?}"))),
                    ("value", self.doc_expression(value)),
                ],
            ),

            ExpressionNode::Infix { op, left, right } => self.doc_node(
                "Infix",
                vec![
                    ("op", self.allocator.text(format!("{op:?}"))),
                    ("left", self.doc_expression(left)),
                    ("right", self.doc_expression(right)),
                ],
            ),

            ExpressionNode::Assign { target, value } => self.doc_node(
                "Assign",
                vec![
                    ("target", self.doc_expression(target)),
                    ("value", self.doc_expression(value)),
                ],
            ),

            ExpressionNode::Call { receiver, args } => self.doc_node(
                "Call",
                vec![
                    ("receiver", self.doc_expression(receiver)),
                    (
                        "args",
                        self.doc_sequence(args.iter().map(|arg| self.doc_expression(arg))),
                    ),
                ],
            ),

            ExpressionNode::String(value) => self.doc_node(
                "StringLiteral",
                vec![("value", self.allocator.text(format!("{value:?}")))],
            ),

            ExpressionNode::Int(literal) => self.doc_node(
                "IntLiteral",
                vec![
                    ("raw", self.allocator.text(format!("{:?}", literal.raw))),
                    ("value", self.allocator.text(literal.value.to_string())),
                ],
            ),

            ExpressionNode::Float(literal) => self.doc_node(
                "FloatLiteral",
                vec![
                    ("raw", self.allocator.text(format!("{:?}", literal.raw))),
                    ("value", self.allocator.text(literal.value.to_string())),
                ],
            ),

            ExpressionNode::Bool(value) => self.doc_node(
                "BoolLiteral",
                vec![("value", self.allocator.text(value.to_string()))],
            ),

            ExpressionNode::Nil => self.allocator.text("NilLiteral"),
        }
    }

    fn doc_path(&'a self, path: &Path) -> DocBuilder<'a, Arena<'a>> {
        let names = self.doc_sequence(path.names.iter().map(|name| match name {
            Segment::Ident(name) => self.doc_identifier("Ident", name),
            Segment::Const(name) => self.doc_identifier("Const", name),
        }));

        self.doc_node(
            "Path",
            vec![
                ("names", names),
                ("global", self.allocator.text(path.global.to_string())),
            ],
        )
    }

    fn doc_identifier(&'a self, kind: &'static str, name: &Identifier) -> DocBuilder<'a, Arena<'a>> {
        self.doc_node(
            kind,
            vec![
                ("value", self.allocator.text(format!("{:?}", name.value))),
                ("global", self.allocator.text(name.global.to_string())),
            ],
        )
    }

    fn doc_binding(&'a self, kind: &'static str, binding: &Binding) -> DocBuilder<'a, Arena<'a>> {
        self.doc_node(
            kind,
            vec![
                ("name", self.doc_expression(&binding.name)),
                ("anno", self.doc_optional(binding.anno.as_deref())),
                ("value", self.doc_optional(binding.value.as_deref())),
            ],
        )
    }

    fn doc_optional(&'a self, expression: Option<&Expression>) -> DocBuilder<'a, Arena<'a>> {
        match expression {
            Some(expression) => self.doc_expression(expression),
            None => self.allocator.text("None"),
        }
    }

    fn doc_sequence(
        &'a self,
        docs: impl Iterator<Item = DocBuilder<'a, Arena<'a>>>,
    ) -> DocBuilder<'a, Arena<'a>> {
        self.allocator
            .intersperse(docs, self.allocator.text(", "))
            .brackets()
    }

    fn doc_node(
        &'a self,
        kind: &'static str,
        fields: Vec<(&'static str, DocBuilder<'a, Arena<'a>>)>,
    ) -> DocBuilder<'a, Arena<'a>> {
        let fields = self.allocator.intersperse(
            fields.into_iter().map(|(name, doc)| {
                self.allocator
                    .text(name)
                    .append(self.allocator.text(": "))
                    .append(doc)
            }),
            self.allocator.text(", "),
        );

        self.allocator.text(kind).append(fields.parens())
    }
}

impl Default for Prettier<'_> {
    fn default() -> Self {
        Self::new()
    }
}
