//! Lexical kinds, semantic types, and the classified token.

use serde::{Deserialize, Serialize};

use crate::base::Range;
use crate::frontend::RawTokenKind;

/// Syntactic category of a token, independent of meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexicalKind {
    Punctuation,
    Identifier,
    Literal,
    Comment,
    Keyword,
}

impl LexicalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Punctuation => "Punctuation",
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
        }
    }
}

impl From<RawTokenKind> for LexicalKind {
    fn from(kind: RawTokenKind) -> Self {
        match kind {
            RawTokenKind::Punctuation => Self::Punctuation,
            RawTokenKind::Identifier => Self::Identifier,
            RawTokenKind::Keyword => Self::Keyword,
            RawTokenKind::Comment => Self::Comment,
            RawTokenKind::Literal(_) => Self::Literal,
        }
    }
}

/// Meaning-bearing classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    // Punctuation, comments, keywords
    Punctuation,
    Comment,
    Keyword,

    // Literals
    Integer,
    Floating,
    Imaginary,
    Character,
    String,

    // Identifiers
    Namespace,
    Class,
    Structure,
    Union,
    TypeAlias,
    Enumeration,
    Enumerator,
    Variable,
    GlobalVariable,
    MemberVariable,
    StaticMemberVariable,
    Function,
    MemberFunction,
    StaticMemberFunction,
    FunctionParameter,
    TemplateParameter,
    TemplateNonTypeParameter,
    PreprocessingDirective,
    Macro,

    /// An identifier the front end could not resolve.
    Identifier,
}

impl SemanticType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Punctuation => "Punctuation",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
            Self::Integer => "Integer",
            Self::Floating => "Floating",
            Self::Imaginary => "Imaginary",
            Self::Character => "Character",
            Self::String => "String",
            Self::Namespace => "Namespace",
            Self::Class => "Class",
            Self::Structure => "Structure",
            Self::Union => "Union",
            Self::TypeAlias => "TypeAlias",
            Self::Enumeration => "Enumeration",
            Self::Enumerator => "Enumerator",
            Self::Variable => "Variable",
            Self::GlobalVariable => "GlobalVariable",
            Self::MemberVariable => "MemberVariable",
            Self::StaticMemberVariable => "StaticMemberVariable",
            Self::Function => "Function",
            Self::MemberFunction => "MemberFunction",
            Self::StaticMemberFunction => "StaticMemberFunction",
            Self::FunctionParameter => "FunctionParameter",
            Self::TemplateParameter => "TemplateParameter",
            Self::TemplateNonTypeParameter => "TemplateNonTypeParameter",
            Self::PreprocessingDirective => "PreprocessingDirective",
            Self::Macro => "Macro",
            Self::Identifier => "Identifier",
        }
    }

    /// Whether this type may be paired with the given lexical kind.
    pub fn is_valid_for(self, kind: LexicalKind) -> bool {
        match kind {
            LexicalKind::Punctuation => self == Self::Punctuation,
            LexicalKind::Comment => self == Self::Comment,
            LexicalKind::Keyword => {
                matches!(self, Self::Keyword | Self::PreprocessingDirective)
            }
            LexicalKind::Literal => matches!(
                self,
                Self::Integer
                    | Self::Floating
                    | Self::Imaginary
                    | Self::Character
                    | Self::String
                    | Self::Macro
            ),
            LexicalKind::Identifier => !matches!(
                self,
                Self::Punctuation
                    | Self::Comment
                    | Self::Keyword
                    | Self::Integer
                    | Self::Floating
                    | Self::Imaginary
                    | Self::Character
                    | Self::String
            ),
        }
    }

    /// Plain `Identifier` carries no semantic information; everything else does.
    pub fn is_resolved(self) -> bool {
        self != Self::Identifier
    }
}

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticToken {
    pub kind: LexicalKind,
    pub token_type: SemanticType,
    pub range: Range,
}

impl SemanticToken {
    pub fn new(kind: LexicalKind, token_type: SemanticType, range: Range) -> Self {
        Self {
            kind,
            token_type,
            range,
        }
    }
}
