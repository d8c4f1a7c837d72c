use crate::{
    derive::{DeriveOptions, DEFAULT_DISCRIMINATOR_KEY},
    error::{Diagnostic, DiagnosticKind},
    types::{Declaration, DeclarationKind},
};
use detag_schema::{SchemaDescriptor, VariantDescriptor, WireNames};

/// Extracts a `SchemaDescriptor` from a host declaration.
///
/// The declaration must be a sum type with at least one variant, and each
/// variant's payload clause, if present, must be a single unlabeled
/// component. Extraction aborts on the first invalid variant rather than
/// collecting several payload-shape failures; a partial descriptor is never
/// produced. Wire names are derived here, once per variant.
pub fn extract_schema(
    decl: &Declaration,
    options: &DeriveOptions,
) -> Result<SchemaDescriptor, Diagnostic> {
    if decl.kind != DeclarationKind::Enum {
        return Err(Diagnostic::new(
            DiagnosticKind::NotASumType,
            decl.line,
            decl.column,
        ));
    }

    if decl.variants.is_empty() {
        return Err(Diagnostic::new(
            DiagnosticKind::EmptyVariantSet,
            decl.line,
            decl.column,
        ));
    }

    let mut variants = Vec::with_capacity(decl.variants.len());
    for case in &decl.variants {
        let payload = match case.params.as_slice() {
            [] => None,
            [param] if param.label.is_none() => Some(param.type_ref.clone()),
            _ => {
                return Err(Diagnostic::new(
                    DiagnosticKind::InvalidPayloadShape(case.name.clone()),
                    case.line,
                    case.column,
                ))
            }
        };

        variants.push(VariantDescriptor {
            name: case.name.clone(),
            line: case.line,
            column: case.column,
            payload,
            wire: WireNames::derive(&case.name),
        });
    }

    let discriminator_key = options
        .discriminator_key
        .clone()
        .unwrap_or_else(|| DEFAULT_DISCRIMINATOR_KEY.to_string());

    Ok(SchemaDescriptor {
        name: decl.name.clone(),
        line: decl.line,
        column: decl.column,
        discriminator_key,
        variants,
    })
}
