use crate::error::{Diagnostic, DiagnosticKind};
use detag_schema::SchemaDescriptor;

/// Re-checks the invariants extraction alone cannot guarantee once all
/// variants are collected. Returns `Ok(())` if verification passed, or the
/// first located diagnostic otherwise; the descriptor is considered valid
/// and frozen afterwards.
pub fn verify_schema(schema: &SchemaDescriptor) -> Result<(), Diagnostic> {
    let mut seen: Vec<&str> = Vec::with_capacity(schema.variants.len());
    for variant in &schema.variants {
        if seen.contains(&variant.name.as_str()) {
            return Err(Diagnostic::new(
                DiagnosticKind::DuplicateVariantName(variant.name.clone()),
                variant.line,
                variant.column,
            ));
        }
        seen.push(&variant.name);
    }
    Ok(())
}
