//! Structural type identity.

use std::fmt;

use colt_result::{Error, Result};

/// Base names of the types shipped with this crate.
pub mod standard_types {
    pub const VARCHAR: &str = "varchar";
    pub const VARBINARY: &str = "varbinary";
}

/// Name plus ordered parameters; two signatures are the same type exactly
/// when they are structurally equal.
///
/// Base names are stored lowercase. Type parameters render before literal
/// parameters: `map(varchar(3),varbinary)`, `varchar(10)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeSignature {
    base: String,
    type_parameters: Vec<TypeSignature>,
    literal_parameters: Vec<i64>,
}

impl TypeSignature {
    pub fn new(
        base: impl AsRef<str>,
        type_parameters: Vec<TypeSignature>,
        literal_parameters: Vec<i64>,
    ) -> Self {
        Self {
            base: base.as_ref().to_ascii_lowercase(),
            type_parameters,
            literal_parameters,
        }
    }

    /// A signature without parameters.
    pub fn simple(base: impl AsRef<str>) -> Self {
        Self::new(base, Vec::new(), Vec::new())
    }

    /// `varchar(length)`.
    pub fn varchar(length: i64) -> Self {
        Self::new(standard_types::VARCHAR, Vec::new(), vec![length])
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[inline]
    pub fn type_parameters(&self) -> &[TypeSignature] {
        &self.type_parameters
    }

    #[inline]
    pub fn literal_parameters(&self) -> &[i64] {
        &self.literal_parameters
    }

    /// Parse the rendered form, e.g. `VARCHAR(10)` or `map(varchar(3),varbinary)`.
    ///
    /// Whitespace around names and parameters is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let Some(open) = text.find('(') else {
            check_base(text, text)?;
            return Ok(Self::simple(text));
        };
        if !text.ends_with(')') {
            return Err(Error::invalid_type_parameter(format!(
                "unbalanced parameter list in type signature '{text}'"
            )));
        }
        let base = text[..open].trim();
        check_base(base, text)?;
        let inner = &text[open + 1..text.len() - 1];

        let mut type_parameters = Vec::new();
        let mut literal_parameters = Vec::new();
        for part in split_top_level(inner, text)? {
            let part = part.trim();
            if part.is_empty() {
                return Err(Error::invalid_type_parameter(format!(
                    "empty parameter in type signature '{text}'"
                )));
            }
            let starts_numeric = part.starts_with(|c: char| c.is_ascii_digit() || c == '-');
            if starts_numeric {
                let value = part.parse::<i64>().map_err(|e| {
                    Error::invalid_type_parameter(format!(
                        "parameter '{part}' of '{text}' is not an integer: {e}"
                    ))
                })?;
                literal_parameters.push(value);
            } else {
                type_parameters.push(Self::parse(part)?);
            }
        }
        Ok(Self::new(base, type_parameters, literal_parameters))
    }
}

fn check_base(base: &str, whole: &str) -> Result<()> {
    let valid = !base.is_empty()
        && base
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !base.starts_with(|c: char| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_type_parameter(format!(
            "invalid base name in type signature '{whole}'"
        )))
    }
}

fn split_top_level<'a>(inner: &'a str, whole: &str) -> Result<Vec<&'a str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::invalid_type_parameter(format!(
                        "unbalanced parameter list in type signature '{whole}'"
                    ))
                })?;
            }
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::invalid_type_parameter(format!(
            "unbalanced parameter list in type signature '{whole}'"
        )));
    }
    parts.push(&inner[start..]);
    Ok(parts)
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if self.type_parameters.is_empty() && self.literal_parameters.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        let mut first = true;
        for p in &self.type_parameters {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{p}")?;
            first = false;
        }
        for p in &self.literal_parameters {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{p}")?;
            first = false;
        }
        f.write_str(")")
    }
}

impl std::str::FromStr for TypeSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(TypeSignature::varchar(5), TypeSignature::varchar(5));
        assert_ne!(TypeSignature::varchar(5), TypeSignature::varchar(6));
        assert_eq!(
            TypeSignature::new("VARCHAR", vec![], vec![5]),
            TypeSignature::varchar(5)
        );
    }

    #[test]
    fn renders_and_parses() {
        assert_eq!(TypeSignature::varchar(10).to_string(), "varchar(10)");
        assert_eq!(TypeSignature::simple("varbinary").to_string(), "varbinary");

        let parsed = TypeSignature::parse(" VARCHAR ( 10 ) ").unwrap();
        assert_eq!(parsed, TypeSignature::varchar(10));

        let nested: TypeSignature = "map(varchar(3), varbinary)".parse().unwrap();
        assert_eq!(nested.base(), "map");
        assert_eq!(nested.type_parameters().len(), 2);
        assert!(nested.literal_parameters().is_empty());
        assert_eq!(nested.to_string(), "map(varchar(3),varbinary)");
        assert_eq!(TypeSignature::parse(&nested.to_string()).unwrap(), nested);
    }

    #[test]
    fn negative_literals_parse_so_types_can_reject_them() {
        let sig = TypeSignature::parse("varchar(-1)").unwrap();
        assert_eq!(sig.literal_parameters(), &[-1]);
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        let malformed = [
            "",
            "varchar(",
            "varchar(3",
            "varchar(3))",
            "varchar()",
            "9lives",
            "varchar(1x)",
            "var char",
        ];
        for bad in malformed {
            assert!(
                matches!(TypeSignature::parse(bad), Err(Error::InvalidTypeParameter(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
