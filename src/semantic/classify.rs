//! Token classification.
//!
//! [`classify`] is a total function over the lexical kind of a token, the
//! cursor resolved at its start (identifiers only), and its role inside a
//! preprocessing directive. It never fails: an identifier with no usable
//! cursor degrades to [`SemanticType::Identifier`].

use super::SemanticType;
use crate::frontend::{CursorInfo, CursorKind, LiteralKind, RawTokenKind};

/// Where a token sits relative to a preprocessing directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectiveRole {
    /// Ordinary code.
    #[default]
    Outside,
    /// The directive keyword following `#` (`define`, `include`, `if`).
    Name,
    /// Any other token on the directive's logical line.
    Body,
}

/// Classify one raw token.
pub fn classify(kind: RawTokenKind, cursor: Option<&CursorInfo>, role: DirectiveRole) -> SemanticType {
    match kind {
        RawTokenKind::Punctuation => SemanticType::Punctuation,
        RawTokenKind::Comment => SemanticType::Comment,
        RawTokenKind::Keyword => match role {
            DirectiveRole::Name => SemanticType::PreprocessingDirective,
            DirectiveRole::Outside | DirectiveRole::Body => SemanticType::Keyword,
        },
        // Front ends report literals inside a macro definition as part of the
        // macro, not by their literal subtype.
        RawTokenKind::Literal(_) if role != DirectiveRole::Outside => SemanticType::Macro,
        RawTokenKind::Literal(literal) => literal_type(literal),
        RawTokenKind::Identifier => match role {
            DirectiveRole::Name => SemanticType::PreprocessingDirective,
            DirectiveRole::Body => SemanticType::Macro,
            DirectiveRole::Outside => cursor
                .map(classify_cursor)
                .unwrap_or(SemanticType::Identifier),
        },
    }
}

fn literal_type(literal: LiteralKind) -> SemanticType {
    match literal {
        LiteralKind::Integer => SemanticType::Integer,
        LiteralKind::Floating => SemanticType::Floating,
        LiteralKind::Imaginary => SemanticType::Imaginary,
        LiteralKind::Character => SemanticType::Character,
        LiteralKind::String => SemanticType::String,
    }
}

/// Classify the entity a cursor names, following references to their
/// declaration.
///
/// When a declaration carries several facts at once, the more specific one
/// wins: static over member, static over template-ness, non-type template
/// parameter over template parameter.
pub fn classify_cursor(cursor: &CursorInfo) -> SemanticType {
    let Some(decl) = cursor.declaration() else {
        return SemanticType::Identifier;
    };

    match decl.kind {
        CursorKind::Namespace | CursorKind::NamespaceAlias => SemanticType::Namespace,

        CursorKind::ClassDecl
        | CursorKind::ClassTemplate
        | CursorKind::ClassTemplatePartialSpecialization => SemanticType::Class,
        CursorKind::StructDecl => SemanticType::Structure,
        CursorKind::UnionDecl => SemanticType::Union,
        CursorKind::EnumDecl => SemanticType::Enumeration,
        CursorKind::EnumConstantDecl => SemanticType::Enumerator,
        CursorKind::TypedefDecl | CursorKind::TypeAliasDecl | CursorKind::TypeAliasTemplateDecl => {
            SemanticType::TypeAlias
        }

        CursorKind::MacroDefinition | CursorKind::MacroExpansion => SemanticType::Macro,

        CursorKind::FunctionDecl | CursorKind::FunctionTemplate => {
            if decl.is_member() {
                member_function(decl.is_static)
            } else {
                SemanticType::Function
            }
        }
        CursorKind::CxxMethod => member_function(decl.is_static),
        CursorKind::Constructor | CursorKind::Destructor | CursorKind::ConversionFunction => {
            SemanticType::MemberFunction
        }

        CursorKind::ParmDecl => SemanticType::FunctionParameter,
        CursorKind::FieldDecl => member_variable(decl.is_static),
        CursorKind::VarDecl => {
            if decl.is_member() {
                // A variable declared directly in a record is a static data member.
                SemanticType::StaticMemberVariable
            } else if decl.scope.is_global() {
                SemanticType::GlobalVariable
            } else {
                SemanticType::Variable
            }
        }

        CursorKind::NonTypeTemplateParameter => SemanticType::TemplateNonTypeParameter,
        CursorKind::TemplateTypeParameter | CursorKind::TemplateTemplateParameter => {
            SemanticType::TemplateParameter
        }

        CursorKind::TypeRef
        | CursorKind::TemplateRef
        | CursorKind::NamespaceRef
        | CursorKind::MemberRef
        | CursorKind::VariableRef
        | CursorKind::OverloadedDeclRef
        | CursorKind::DeclRefExpr
        | CursorKind::MemberRefExpr
        | CursorKind::Other => SemanticType::Identifier,
    }
}

fn member_function(is_static: bool) -> SemanticType {
    if is_static {
        SemanticType::StaticMemberFunction
    } else {
        SemanticType::MemberFunction
    }
}

fn member_variable(is_static: bool) -> SemanticType {
    if is_static {
        SemanticType::StaticMemberVariable
    } else {
        SemanticType::MemberVariable
    }
}
