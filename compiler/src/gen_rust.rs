use detag_schema::{naming::to_pascal_case, SchemaDescriptor, VariantDescriptor};

/// Escapes Rust reserved keywords by suffixing with an underscore.
fn escape_rust_keyword(s: &str) -> String {
    let keywords = [
        "as", "break", "const", "continue", "crate", "else",
        "enum", "extern", "false", "fn", "for", "if", "impl",
        "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static",
        "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while",
    ];
    if keywords.contains(&s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

/// Quotes a name as a Rust string literal.
fn quote(text: &str) -> String {
    format!("{:?}", text)
}

fn rust_type_name(schema: &SchemaDescriptor) -> String {
    escape_rust_keyword(&to_pascal_case(&schema.name))
}

fn rust_variant_name(variant: &VariantDescriptor) -> String {
    escape_rust_keyword(&to_pascal_case(&variant.name))
}

/// Compiles the generated extension for a validated schema into Rust source:
/// the wire-key enum, the discriminator enum, and a `FromTagged` impl whose
/// `from_tagged` dispatches on the discriminator in declaration order. Wire
/// names are baked into the output as string literals; nothing is re-derived
/// at decode time.
pub fn compile_schema_to_rust(schema: &SchemaDescriptor) -> String {
    let mut rust_code: Vec<String> = Vec::new();

    // Add necessary imports
    rust_code.push("use serde_json::Value;".to_string());
    rust_code.push("use detag::{decode_payload, DecodeError, FromTagged};".to_string());
    rust_code.push("".to_string());

    rust_code.push(generate_key_enum(schema));
    rust_code.push(generate_discriminator_enum(schema));
    rust_code.push(generate_from_tagged_impl(schema));

    rust_code.join("\n")
}

/// Generates the key enumeration: the discriminator key plus one wire key
/// per variant.
fn generate_key_enum(schema: &SchemaDescriptor) -> String {
    let type_name = rust_type_name(schema);
    let mut variants = vec!["    Tag,".to_string()];
    let mut arms = vec![format!(
        "            {}Key::Tag => {},",
        type_name,
        quote(&schema.discriminator_key)
    )];

    for variant in &schema.variants {
        let rust_name = rust_variant_name(variant);
        variants.push(format!("    {},", rust_name));
        arms.push(format!(
            "            {}Key::{} => {},",
            type_name,
            rust_name,
            quote(&variant.wire.key)
        ));
    }

    format!(
        "#[derive(Clone, Copy, PartialEq, Eq)]\n#[allow(dead_code)]\nenum {0}Key {{\n{1}\n}}\n\nimpl {0}Key {{\n    fn name(self) -> &'static str {{\n        match self {{\n{2}\n        }}\n    }}\n}}\n",
        type_name,
        variants.join("\n"),
        arms.join("\n")
    )
}

/// Generates the discriminator enumeration mapping each variant to its tag
/// string.
fn generate_discriminator_enum(schema: &SchemaDescriptor) -> String {
    let type_name = rust_type_name(schema);
    let mut variants = Vec::new();
    let mut arms = Vec::new();

    for variant in &schema.variants {
        let rust_name = rust_variant_name(variant);
        variants.push(format!("    {},", rust_name));
        arms.push(format!(
            "            {} => Some({}Discriminator::{}),",
            quote(&variant.wire.tag),
            type_name,
            rust_name
        ));
    }
    arms.push("            _ => None,".to_string());

    format!(
        "#[derive(Clone, Copy, PartialEq, Eq)]\nenum {0}Discriminator {{\n{1}\n}}\n\nimpl {0}Discriminator {{\n    fn from_tag(tag: &str) -> Option<Self> {{\n        match tag {{\n{2}\n        }}\n    }}\n}}\n",
        type_name,
        variants.join("\n"),
        arms.join("\n")
    )
}

/// Generates the decode entry point. Payload type references pass through to
/// the generated source unmodified.
fn generate_from_tagged_impl(schema: &SchemaDescriptor) -> String {
    let type_name = rust_type_name(schema);
    let mut match_arms = Vec::new();

    for variant in &schema.variants {
        let rust_name = rust_variant_name(variant);
        match &variant.payload {
            Some(type_ref) => match_arms.push(format!(
                "            {0}Discriminator::{1} => Ok({0}::{1}(decode_payload::<{2}>(value, {0}Key::{1}.name(), {3})?)),",
                type_name,
                rust_name,
                type_ref,
                quote(&variant.name)
            )),
            None => match_arms.push(format!(
                "            {0}Discriminator::{1} => Ok({0}::{1}),",
                type_name, rust_name
            )),
        }
    }

    format!(
        "impl FromTagged for {0} {{\n    fn from_tagged(value: &Value) -> Result<Self, DecodeError> {{\n        let tag = match value.get({0}Key::Tag.name()) {{\n            Some(Value::String(tag)) => tag.as_str(),\n            _ => return Err(DecodeError::MissingDiscriminator({1}.to_string())),\n        }};\n        let discriminator = {0}Discriminator::from_tag(tag)\n            .ok_or_else(|| DecodeError::UnknownDiscriminator(tag.to_string()))?;\n        match discriminator {{\n{2}\n        }}\n    }}\n}}\n",
        type_name,
        quote(&schema.discriminator_key),
        match_arms.join("\n")
    )
}
