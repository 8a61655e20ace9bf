use logos::Logos;

/// Represents the kind of a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Kinds carry no payload; the matched text travels next to the kind in
/// [`Token::lexeme`], and literal values are decoded by the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Floating-point literal tokens, such as `3.14`, `1.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// String literal tokens, such as `"hello\n"`.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `int`
    #[token("int")]
    Int,
    /// `float`
    #[token("float")]
    FloatType,
    /// `string`
    #[token("string")]
    StringType,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `void`
    #[token("void")]
    Void,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `quit`
    #[token("quit")]
    Quit,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Whitespace.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,

    /// Text the lexer could not recognize. Never produced by the derived
    /// matcher; [`tokenize_line`] emits it for lexing failures.
    Invalid,
    /// Synthetic marker issued once the line source is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Returns `true` for the keywords that introduce a typed declaration.
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(self, Self::Int | Self::FloatType | Self::StringType | Self::Bool | Self::Void)
    }
}

/// A single token together with the text it was produced from.
///
/// Tokens are immutable once the lexer hands them out. The `line` is the
/// number of the source line the token came from, counted from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the token.
    pub kind:   TokenKind,
    /// Exact source text of the token.
    pub lexeme: String,
    /// Source line the token came from.
    pub line:   usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }
}

/// Splits one source line into tokens.
///
/// Unrecognized input does not stop tokenization; it becomes a
/// [`TokenKind::Invalid`] token whose lexeme is the offending slice, so that
/// the parser can report it at the position it occurs.
///
/// # Parameters
/// - `text`: The source line.
/// - `line`: Line number attached to every produced token.
///
/// # Returns
/// The tokens of the line, in order.
///
/// # Example
/// ```
/// use minic::interpreter::lexer::{TokenKind, tokenize_line};
///
/// let kinds: Vec<_> = tokenize_line("x += 1.5; // bump", 1).into_iter()
///                                                          .map(|t| t.kind)
///                                                          .collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::PlusAssign,
///                 TokenKind::Float,
///                 TokenKind::Semicolon]);
/// ```
#[must_use]
pub fn tokenize_line(text: &str, line: usize) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(text);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let kind = kind.unwrap_or(TokenKind::Invalid);
        tokens.push(Token::new(kind, lexer.slice(), line));
    }

    tokens
}
