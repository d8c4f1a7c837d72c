use crate::{
    error::Diagnostic, extract::extract_schema, types::Declaration, verify::verify_schema,
};
use detag_schema::{DecodePlan, SchemaDescriptor};

/// Discriminator field name used when the caller does not supply one.
pub const DEFAULT_DISCRIMINATOR_KEY: &str = "tag";

/// Caller-supplied configuration for one derivation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeriveOptions {
    /// Wire name of the discriminator field; `None` means `"tag"`. Never
    /// derived from variant names.
    pub discriminator_key: Option<String>,
}

/// Extract and verify a schema descriptor from a host declaration.
/// Returns `Err(Diagnostic)` if extraction or verification fails.
pub fn derive_schema(
    decl: &Declaration,
    options: &DeriveOptions,
) -> Result<SchemaDescriptor, Diagnostic> {
    let schema = extract_schema(decl, options)?;
    verify_schema(&schema)?;
    Ok(schema)
}

/// Derive the full decoder for a host declaration: the validated descriptor
/// plus the decode plan compiled from it. On failure nothing is emitted.
pub fn derive_decoder(
    decl: &Declaration,
    options: &DeriveOptions,
) -> Result<(SchemaDescriptor, DecodePlan), Diagnostic> {
    let schema = derive_schema(decl, options)?;
    let plan = DecodePlan::compile(&schema);
    Ok((schema, plan))
}
