//! Semantic cursors: what the front end knows about the entity under a token.

/// Declaration and reference kinds a front end can resolve.
///
/// Reference kinds (`*Ref`, `*RefExpr`) point at a declaration through
/// [`CursorInfo::referenced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    // Declarations
    Namespace,
    NamespaceAlias,
    ClassDecl,
    ClassTemplate,
    ClassTemplatePartialSpecialization,
    StructDecl,
    UnionDecl,
    EnumDecl,
    EnumConstantDecl,
    TypedefDecl,
    TypeAliasDecl,
    TypeAliasTemplateDecl,
    FunctionDecl,
    FunctionTemplate,
    CxxMethod,
    Constructor,
    Destructor,
    ConversionFunction,
    ParmDecl,
    VarDecl,
    FieldDecl,
    TemplateTypeParameter,
    NonTypeTemplateParameter,
    TemplateTemplateParameter,

    // Preprocessor
    MacroDefinition,
    MacroExpansion,

    // References
    TypeRef,
    TemplateRef,
    NamespaceRef,
    MemberRef,
    VariableRef,
    OverloadedDeclRef,
    DeclRefExpr,
    MemberRefExpr,

    /// Anything the engine has no classification for.
    Other,
}

impl CursorKind {
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::TypeRef
                | Self::TemplateRef
                | Self::NamespaceRef
                | Self::MemberRef
                | Self::VariableRef
                | Self::OverloadedDeclRef
                | Self::DeclRefExpr
                | Self::MemberRefExpr
        )
    }

    pub fn is_template_parameter(self) -> bool {
        matches!(
            self,
            Self::TemplateTypeParameter
                | Self::NonTypeTemplateParameter
                | Self::TemplateTemplateParameter
        )
    }
}

/// Category of a cursor's semantic parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    TranslationUnit,
    Namespace,
    Class,
    Struct,
    Union,
    Function,
}

impl Scope {
    /// Class, struct or union scope.
    pub fn is_record(self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Union)
    }

    /// Namespace or file scope.
    pub fn is_global(self) -> bool {
        matches!(self, Self::TranslationUnit | Self::Namespace)
    }
}

/// A resolved cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorInfo {
    pub kind: CursorKind,
    /// `static` storage or a static member
    pub is_static: bool,
    pub scope: Scope,
    /// The declaration a reference cursor points at
    pub referenced: Option<Box<CursorInfo>>,
}

impl CursorInfo {
    pub fn new(kind: CursorKind) -> Self {
        Self {
            kind,
            is_static: false,
            scope: Scope::default(),
            referenced: None,
        }
    }

    /// A reference cursor pointing at `target`.
    pub fn reference(kind: CursorKind, target: CursorInfo) -> Self {
        Self {
            referenced: Some(Box::new(target)),
            ..Self::new(kind)
        }
    }

    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Follow reference cursors to the declaration they name. Returns `None`
    /// for a reference that could not be resolved.
    pub fn declaration(&self) -> Option<&CursorInfo> {
        let mut cursor = self;
        while cursor.kind.is_reference() {
            cursor = cursor.referenced.as_deref()?;
        }
        Some(cursor)
    }

    pub fn is_template_parameter(&self) -> bool {
        self.kind.is_template_parameter()
    }

    pub fn is_non_type_template_parameter(&self) -> bool {
        self.kind == CursorKind::NonTypeTemplateParameter
    }

    pub fn is_member(&self) -> bool {
        self.scope.is_record()
    }
}
