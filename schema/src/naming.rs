//! Naming-convention transforms between host identifiers and wire names.
//!
//! Variant identifiers are camelCase by convention of the caller; the wire
//! format stores payloads under snake_case keys and discriminator values as
//! PascalCase tags.

/// Converts an identifier to snake_case.
///
/// An underscore is inserted before each transition from a lowercase letter
/// or digit to an uppercase letter, and before the last letter of an
/// uppercase run that is followed by a lowercase letter, so that acronyms
/// keep their word boundary (`"HTTPServer"` becomes `"http_server"`, not
/// `"h_t_t_p_server"`). The result is then fully lowercased. Empty input is
/// returned unchanged.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::with_capacity(s.len() + 4);
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                // Break before a fresh word, or at the end of an acronym run.
                if prev != '_'
                    && (!prev.is_uppercase()
                        || (i + 1 < chars.len() && chars[i + 1].is_lowercase()))
                {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Converts an identifier to PascalCase by uppercasing the first character.
/// The rest of the string is left unchanged; words are not re-segmented.
/// Empty input is returned unchanged.
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_basic() {
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_snake_case("hello"), "hello");
        assert_eq!(to_snake_case("world"), "world");
        assert_eq!(to_snake_case("reallyCamel"), "really_camel");
        assert_eq!(to_snake_case("sessionID"), "session_id");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("parseHTTPResponse"), "parse_http_response");
        assert_eq!(to_snake_case("point2D"), "point2_d");
    }

    #[test]
    fn snake_case_never_doubles_underscores() {
        for name in ["hello", "reallyCamel", "HTTPServer", "aB", "a1B", "ABc"] {
            let snake = to_snake_case(name);
            assert!(!snake.starts_with('_'), "{:?} -> {:?}", name, snake);
            assert!(!snake.contains("__"), "{:?} -> {:?}", name, snake);
        }
    }

    #[test]
    fn pascal_case_basic() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("world"), "World");
        assert_eq!(to_pascal_case("reallyCamel"), "ReallyCamel");
        assert_eq!(to_pascal_case("HTTPServer"), "HTTPServer");
    }

    #[test]
    fn pascal_case_is_idempotent() {
        for name in ["world", "reallyCamel", "HTTPServer", "x"] {
            let once = to_pascal_case(name);
            assert_eq!(to_pascal_case(&once), once);
        }
    }
}
