//! Logos-based lexer for C-family source
//!
//! Fast tokenization using the logos crate. The lexer is lossless: every
//! byte of the input belongs to exactly one token, whitespace included.

use super::keywords::is_keyword;
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(LogosToken::Ident) if is_keyword(text) => SyntaxKind::KEYWORD,
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Accept identifiers whose non-ASCII characters are Unicode XID characters.
fn valid_identifier(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let mut chars = lex.slice().chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || unicode_ident::is_xid_start(first))
        && chars.all(unicode_ident::is_xid_continue)
}

/// Consume the rest of a raw string literal after its opening `R"`.
///
/// The delimiter runs up to the `(` and the literal ends at the first
/// `)delimiter"`.
fn raw_string(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let rest = lex.remainder();
    let Some(open) = rest.find('(') else {
        return false;
    };
    let delimiter = &rest[..open];
    if delimiter.len() > 16
        || delimiter
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\\' | ')' | '"'))
    {
        return false;
    }
    let closing = format!("){delimiter}\"");
    match rest[open + 1..].find(&closing) {
        Some(end) => {
            lex.bump(open + 1 + end + closing.len());
            true
        }
        None => false,
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"([ \t\r\n\x0B\x0C]|\\\r?\n)+")]
    Whitespace,

    // A backslash-newline continues the comment onto the next line.
    #[regex(r"//([^\\\n]|\\\r?\n|\\[^\n]?)*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    #[regex(r"[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*", valid_identifier)]
    Ident,

    #[regex(r"[0-9][0-9']*[uUlLzZ]*")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F']*[uUlLzZ]*")]
    #[regex(r"0[bB][01][01']*[uUlLzZ]*")]
    Integer,

    #[regex(r"[0-9][0-9']*\.[0-9']*([eE][+-]?[0-9]+)?[fFlL]?")]
    #[regex(r"\.[0-9][0-9']*([eE][+-]?[0-9]+)?[fFlL]?")]
    #[regex(r"[0-9][0-9']*[eE][+-]?[0-9]+[fFlL]?")]
    Floating,

    #[regex(r"([0-9][0-9']*\.?[0-9']*|\.[0-9][0-9']*)([eE][+-]?[0-9]+)?[fFlL]?[ij]")]
    Imaginary,

    #[regex(r"(u8|u|U|L)?'([^'\\\n]|\\.)*'")]
    Character,

    #[regex(r#"(u8|u|U|L)?"([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r#"(u8|u|U|L)?R""#, raw_string)]
    RawString,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (longest match wins in logos)
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token(".*")]
    DotStar,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    Arrow,
    #[token("->*")]
    ArrowStar,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("^=")]
    CaretEq,
    #[token("&&")]
    AmpAmp,
    #[token("&=")]
    AmpEq,
    #[token("||")]
    PipePipe,
    #[token("|=")]
    PipeEq,
    #[token("!=")]
    BangEq,
    #[token("==")]
    EqEq,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    LtLt,
    #[token("<<=")]
    LtLtEq,
    #[token("<=>")]
    Spaceship,
    #[token(">=")]
    GtEq,
    #[token(">>")]
    GtGt,
    #[token(">>=")]
    GtGtEq,
    #[token("##")]
    HashHash,
    #[token("%:")]
    PercentColon,
    #[token("%:%:")]
    PercentColonPercentColon,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("#")]
    Hash,
    #[token("\\")]
    Backslash,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            UnterminatedComment => SyntaxKind::ERROR,

            // Names and literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Floating => SyntaxKind::FLOATING,
            Imaginary => SyntaxKind::IMAGINARY,
            Character => SyntaxKind::CHARACTER,
            String | RawString => SyntaxKind::STRING,

            // Multi-char punctuation
            ColonColon => SyntaxKind::COLON_COLON,
            DotStar => SyntaxKind::DOT_STAR,
            Ellipsis => SyntaxKind::ELLIPSIS,
            Arrow => SyntaxKind::ARROW,
            ArrowStar => SyntaxKind::ARROW_STAR,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            CaretEq => SyntaxKind::CARET_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            AmpEq => SyntaxKind::AMP_EQ,
            PipePipe => SyntaxKind::PIPE_PIPE,
            PipeEq => SyntaxKind::PIPE_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            LtEq => SyntaxKind::LT_EQ,
            LtLt => SyntaxKind::LT_LT,
            LtLtEq => SyntaxKind::LT_LT_EQ,
            Spaceship => SyntaxKind::SPACESHIP,
            GtEq => SyntaxKind::GT_EQ,
            GtGt => SyntaxKind::GT_GT,
            GtGtEq => SyntaxKind::GT_GT_EQ,
            HashHash | PercentColonPercentColon => SyntaxKind::HASH_HASH,
            PercentColon => SyntaxKind::HASH,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Question => SyntaxKind::QUESTION,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Caret => SyntaxKind::CARET,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Tilde => SyntaxKind::TILDE,
            Bang => SyntaxKind::BANG,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Hash => SyntaxKind::HASH,
            Backslash => SyntaxKind::BACKSLASH,
        }
    }
}
