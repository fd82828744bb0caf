/// The lexical categories the lexer produces and the parser dispatches on
/// while building the tree. This layer only ever inspects these by equality
/// or `match`; producing them is the lexer's job.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Name,
    Const,

    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,

    Equal,
    Dot,
    ColonColon,

    LeftParen,
    RightParen,
    Comma,

    True,
    False,
    Nil,
}
