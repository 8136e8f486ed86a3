//! Attribute parsing for `#[envtag(...)]` annotations.
//!
//! This module extracts and validates metadata from struct fields and from the struct
//! itself during macro expansion.

use syn::{Attribute, Field, Lit, LitStr};

/// Parsed `#[envtag(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name (`env = "NAME"`).
    pub env: Option<String>,

    /// Fallback literal rendered as text (`fallback = "x"`, `fallback = 5`, `fallback = true`).
    pub fallback: Option<String>,

    /// Raw free-text tag (`tag = "env:\"NAME\" fallback:\"x\""`), tokenized at runtime.
    pub tag: Option<String>,
}

/// Parsed `#[envtag(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every environment variable name
    pub prefix: String,
}

impl FieldAttrs {
    /// Extract and validate `#[envtag(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in envtag_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                // env = "..."
                if meta.path.is_ident("env") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.env = Some(value.value());
                    return Ok(());
                }

                // fallback = literal
                if meta.path.is_ident("fallback") {
                    let value = meta.value()?;
                    let negative = value.peek(syn::Token![-]);
                    if negative {
                        value.parse::<syn::Token![-]>()?;
                    }
                    let text = match value.parse::<Lit>()? {
                        Lit::Str(s) if !negative => s.value(),
                        Lit::Bool(b) if !negative => b.value.to_string(),
                        Lit::Int(i) => {
                            let digits = i.base10_digits();
                            if negative {
                                format!("-{digits}")
                            } else {
                                digits.to_string()
                            }
                        }
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "fallback must be a string, integer or boolean literal",
                            ))
                        }
                    };
                    attrs.fallback = Some(text);
                    return Ok(());
                }

                // tag = "..."
                if meta.path.is_ident("tag") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.tag = Some(value.value());
                    return Ok(());
                }

                Err(meta.error("unsupported envtag attribute"))
            })?;
        }

        if attrs.tag.is_some() && (attrs.env.is_some() || attrs.fallback.is_some()) {
            return Err(syn::Error::new_spanned(
                field,
                "tag cannot be combined with env or fallback",
            ));
        }
        if attrs.fallback.is_some() && attrs.env.is_none() {
            return Err(syn::Error::new_spanned(field, "fallback requires env"));
        }

        Ok(attrs)
    }
}

impl StructAttrs {
    /// Extract struct-level `#[envtag(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in envtag_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level envtag attribute"))
            })?;
        }

        Ok(parsed)
    }
}

fn envtag_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("envtag"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_env_and_fallback() {
        let field: Field = parse_quote! {
            #[envtag(env = "PORT", fallback = "8080")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.env, Some("PORT".to_string()));
        assert_eq!(attrs.fallback, Some("8080".to_string()));
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_parse_literal_fallbacks() {
        let field: Field = parse_quote! {
            #[envtag(env = "N", fallback = 42)]
            pub n: i64
        };
        assert_eq!(
            FieldAttrs::from_field(&field).unwrap().fallback,
            Some("42".to_string())
        );

        let field: Field = parse_quote! {
            #[envtag(env = "N", fallback = -7)]
            pub n: i64
        };
        assert_eq!(
            FieldAttrs::from_field(&field).unwrap().fallback,
            Some("-7".to_string())
        );

        let field: Field = parse_quote! {
            #[envtag(env = "FLAG", fallback = true)]
            pub flag: bool
        };
        assert_eq!(
            FieldAttrs::from_field(&field).unwrap().fallback,
            Some("true".to_string())
        );
    }

    #[test]
    fn test_parse_tag() {
        let field: Field = parse_quote! {
            #[envtag(tag = "env:\"X\" fallback:\"5\"")]
            pub x: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some(r#"env:"X" fallback:"5""#.to_string()));
    }

    #[test]
    fn test_parse_split_attributes() {
        let field: Field = parse_quote! {
            #[envtag(env = "HOST")]
            #[envtag(fallback = "localhost")]
            pub host: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.env, Some("HOST".to_string()));
        assert_eq!(attrs.fallback, Some("localhost".to_string()));
    }

    #[test]
    fn test_no_attributes() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub plain: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.env.is_none() && attrs.fallback.is_none() && attrs.tag.is_none());
    }

    #[test]
    fn test_reject_tag_with_env() {
        let field: Field = parse_quote! {
            #[envtag(tag = "env:A", env = "B")]
            pub a: String
        };
        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_fallback_without_env() {
        let field: Field = parse_quote! {
            #[envtag(fallback = "x")]
            pub a: String
        };
        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_unknown_key() {
        let field: Field = parse_quote! {
            #[envtag(required)]
            pub a: String
        };
        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_float_fallback() {
        let field: Field = parse_quote! {
            #[envtag(env = "R", fallback = 1.5)]
            pub r: i64
        };
        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_struct_prefix() {
        let input: syn::DeriveInput = parse_quote! {
            #[envtag(prefix = "APP_")]
            struct Config {}
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, "APP_");
    }
}
