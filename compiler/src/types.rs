use serde::Serialize;

/// The structural kind of a host declaration. Only `Enum` is a sum type;
/// the other kinds exist so a host can hand over whatever its attribute was
/// attached to and get a proper diagnostic back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DeclarationKind {
    Enum,
    Struct,
    Class,
}

/// One component of a variant's payload clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDecl {
    pub label: Option<String>,
    pub type_ref: String,
}

impl ParamDecl {
    pub fn unnamed(type_ref: &str) -> ParamDecl {
        ParamDecl {
            label: None,
            type_ref: type_ref.to_string(),
        }
    }

    pub fn labeled(label: &str, type_ref: &str) -> ParamDecl {
        ParamDecl {
            label: Some(label.to_string()),
            type_ref: type_ref.to_string(),
        }
    }
}

/// One declared case of a host sum type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantDecl {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub params: Vec<ParamDecl>,
}

impl VariantDecl {
    pub fn new(name: &str, params: Vec<ParamDecl>) -> VariantDecl {
        VariantDecl {
            name: name.to_string(),
            line: 0,
            column: 0,
            params,
        }
    }
}

/// An already-parsed host declaration, as handed over by the host tool.
/// The compiler reads it; it never parses source text itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub kind: DeclarationKind,
    pub variants: Vec<VariantDecl>,
}

impl Declaration {
    pub fn new(name: &str, kind: DeclarationKind, variants: Vec<VariantDecl>) -> Declaration {
        Declaration {
            name: name.to_string(),
            line: 0,
            column: 0,
            kind,
            variants,
        }
    }
}
