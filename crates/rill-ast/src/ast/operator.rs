use std::fmt;

use crate::token::TokenKind;

/// The operators a `Prefix` node may carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrefixOp {
    Plus,
    Minus,
    Splat,
    DoubleSplat,
}

impl PrefixOp {
    /// Map a token kind to its prefix operator.
    ///
    /// # Panics
    ///
    /// Panics on any kind outside the prefix operator set. Reaching such a
    /// kind here means the grammar and this table have drifted out of sync,
    /// which is a bug in the parser, not something to recover from.
    pub fn from_token(token: TokenKind) -> Self {
        match token {
            TokenKind::Plus => Self::Plus,
            TokenKind::Minus => Self::Minus,
            TokenKind::Star => Self::Splat,
            TokenKind::DoubleStar => Self::DoubleSplat,
            kind => panic!("token {kind:?} is not a prefix operator"),
        }
    }

    /// The canonical source lexeme of this operator.
    pub fn lexeme(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Splat => "*",
            Self::DoubleSplat => "**",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// The operators an `Infix` node may carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InfixOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    DivFloor,
    Power,
}

impl InfixOp {
    /// Map a token kind to its infix operator.
    ///
    /// # Panics
    ///
    /// Panics on any kind outside the infix operator set, like
    /// [`PrefixOp::from_token`].
    pub fn from_token(token: TokenKind) -> Self {
        match token {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Subtract,
            TokenKind::Star => Self::Multiply,
            TokenKind::Slash => Self::Divide,
            TokenKind::DoubleSlash => Self::DivFloor,
            TokenKind::DoubleStar => Self::Power,
            kind => panic!("token {kind:?} is not an infix operator"),
        }
    }

    /// The canonical source lexeme of this operator.
    pub fn lexeme(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::DivFloor => "//",
            Self::Power => "**",
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
