use serde::Serialize;

use crate::naming::{to_pascal_case, to_snake_case};

/// Per-variant wire-level naming, derived once from the variant name and
/// cached on its descriptor so that emission and decoding never re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireNames {
    /// snake_case field name the payload is stored under.
    pub key: String,
    /// PascalCase value the discriminator field must equal to select the
    /// variant.
    pub tag: String,
}

impl WireNames {
    pub fn derive(name: &str) -> WireNames {
        WireNames {
            key: to_snake_case(name),
            tag: to_pascal_case(name),
        }
    }
}

/// One case of a sum type. The payload is either absent or a single opaque
/// type reference; line/column locate the originating variant declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub payload: Option<String>,
    pub wire: WireNames,
}

impl VariantDescriptor {
    pub fn new(name: &str, payload: Option<&str>) -> VariantDescriptor {
        VariantDescriptor {
            name: name.to_string(),
            line: 0,
            column: 0,
            payload: payload.map(str::to_string),
            wire: WireNames::derive(name),
        }
    }
}

/// The full description of a sum type's tagged-union wire format.
///
/// Invariants once verified: `variants` is non-empty and variant names are
/// pairwise distinct. The discriminator key is supplied by the caller and is
/// never derived from variant names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDescriptor {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub discriminator_key: String,
    pub variants: Vec<VariantDescriptor>,
}

impl SchemaDescriptor {
    pub fn new(
        name: &str,
        discriminator_key: &str,
        variants: Vec<VariantDescriptor>,
    ) -> SchemaDescriptor {
        SchemaDescriptor {
            name: name.to_string(),
            line: 0,
            column: 0,
            discriminator_key: discriminator_key.to_string(),
            variants,
        }
    }

    /// Looks up a variant descriptor by its declared name.
    pub fn variant(&self, name: &str) -> Option<&VariantDescriptor> {
        self.variants.iter().find(|variant| variant.name == name)
    }
}
