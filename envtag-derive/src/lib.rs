//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// How a field can be written, decided from its declared type
enum SlotKind {
    Str,
    Bool,
    Int,
    ReadOnly,
    Unsupported(String),
}

/// Classify a field type by its last path segment
///
/// Shared references are read-only. Mutable references are written through when they
/// point at a supported type.
fn classify(ty: &Type) -> SlotKind {
    match ty {
        Type::Reference(reference) if reference.mutability.is_none() => SlotKind::ReadOnly,
        Type::Reference(reference) => match classify(&reference.elem) {
            kind @ (SlotKind::Str | SlotKind::Bool | SlotKind::Int) => kind,
            _ => SlotKind::Unsupported(type_name(ty)),
        },
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(seg) = type_path.path.segments.last() else {
                return SlotKind::Unsupported(type_name(ty));
            };
            if !seg.arguments.is_empty() {
                return SlotKind::Unsupported(type_name(ty));
            }
            if seg.ident == "String" {
                SlotKind::Str
            } else if seg.ident == "bool" {
                SlotKind::Bool
            } else if seg.ident == "i64" {
                SlotKind::Int
            } else {
                SlotKind::Unsupported(type_name(ty))
            }
        }
        _ => SlotKind::Unsupported(type_name(ty)),
    }
}

/// Whether the field itself is a `&mut` reference
fn is_mut_reference(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => reference.mutability.is_some(),
        Type::Group(group) => is_mut_reference(&group.elem),
        Type::Paren(paren) => is_mut_reference(&paren.elem),
        _ => false,
    }
}

fn type_name(ty: &Type) -> String {
    ty.to_token_stream().to_string()
}

/// `Record` derive macro
///
/// Implements `envtag::Record` by listing every field with its metadata and a write slot.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[envtag(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[envtag(env = "NAME")]`: Environment variable to read
/// - `#[envtag(fallback = literal)]`: Fallback literal, requires `env`
/// - `#[envtag(tag = "env:\"NAME\" fallback:\"x\"")]`: Free-text tag parsed at runtime
///
/// Fields without `#[envtag]` are listed without metadata and never written. Enums,
/// tuple structs and unit structs are described as opaque, which the populator rejects.
#[proc_macro_derive(Record, attributes(envtag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Ok(opaque(input)),
        },
        _ => return Ok(opaque(input)),
    };

    let prefix = StructAttrs::from_attrs(&input.attrs)?.prefix;

    let descriptors = fields
        .iter()
        .map(|field| {
            let field_ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let field_name = field_ident.unraw().to_string();
            let attrs = FieldAttrs::from_field(field)?;

            let metadata = match (attrs.tag, attrs.env) {
                (Some(tag), _) => quote! {
                    ::std::option::Option::Some(::envtag::Metadata::Tag(#tag))
                },
                (None, Some(env)) => {
                    let fallback = match attrs.fallback {
                        Some(fallback) => quote! { ::std::option::Option::Some(#fallback) },
                        None => quote! { ::std::option::Option::None },
                    };
                    quote! {
                        ::std::option::Option::Some(::envtag::Metadata::Options {
                            env: #env,
                            fallback: #fallback,
                        })
                    }
                }
                (None, None) => quote! { ::std::option::Option::None },
            };

            let target = if is_mut_reference(&field.ty) {
                quote! { &mut *self.#field_ident }
            } else {
                quote! { &mut self.#field_ident }
            };
            let slot = match classify(&field.ty) {
                SlotKind::Str => quote! { ::envtag::Slot::Str(#target) },
                SlotKind::Bool => quote! { ::envtag::Slot::Bool(#target) },
                SlotKind::Int => quote! { ::envtag::Slot::Int(#target) },
                SlotKind::ReadOnly => quote! { ::envtag::Slot::ReadOnly },
                SlotKind::Unsupported(name) => quote! { ::envtag::Slot::Unsupported(#name) },
            };

            Ok(quote! {
                ::envtag::Field {
                    name: #field_name,
                    metadata: #metadata,
                    slot: #slot,
                }
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::envtag::Record for #struct_name #ty_generics #where_clause {
            fn shape(&mut self) -> ::envtag::Shape<'_> {
                ::envtag::Shape::Struct {
                    prefix: #prefix,
                    fields: ::std::vec![#(#descriptors),*],
                }
            }
        }
    })
}

/// Impl for anything that is not a struct with named fields
fn opaque(input: &DeriveInput) -> proc_macro2::TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::envtag::Record for #name #ty_generics #where_clause {
            fn shape(&mut self) -> ::envtag::Shape<'_> {
                ::envtag::Shape::Opaque
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn kind(ty: Type) -> &'static str {
        match classify(&ty) {
            SlotKind::Str => "str",
            SlotKind::Bool => "bool",
            SlotKind::Int => "int",
            SlotKind::ReadOnly => "read_only",
            SlotKind::Unsupported(_) => "unsupported",
        }
    }

    #[test]
    fn test_classify_supported() {
        assert_eq!(kind(parse_quote!(String)), "str");
        assert_eq!(kind(parse_quote!(std::string::String)), "str");
        assert_eq!(kind(parse_quote!(bool)), "bool");
        assert_eq!(kind(parse_quote!(i64)), "int");
    }

    #[test]
    fn test_classify_read_only() {
        assert_eq!(kind(parse_quote!(&'a str)), "read_only");
        assert_eq!(kind(parse_quote!(&'static String)), "read_only");
        assert_eq!(kind(parse_quote!(&'a i64)), "read_only");
    }

    #[test]
    fn test_classify_mut_reference() {
        assert_eq!(kind(parse_quote!(&'a mut String)), "str");
        assert_eq!(kind(parse_quote!(&'a mut bool)), "bool");
        assert_eq!(kind(parse_quote!(&'a mut i64)), "int");
        assert_eq!(kind(parse_quote!(&'a mut f64)), "unsupported");
        assert_eq!(kind(parse_quote!(&'a mut &'b str)), "unsupported");
        assert!(is_mut_reference(&parse_quote!(&'a mut i64)));
        assert!(!is_mut_reference(&parse_quote!(&'a i64)));
        assert!(!is_mut_reference(&parse_quote!(i64)));
    }

    #[test]
    fn test_expand_mut_reference_reborrows() {
        let input: DeriveInput = parse_quote! {
            struct Counters<'a> {
                #[envtag(env = "COUNT")]
                count: &'a mut i64,
            }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("& mut * self . count"));
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(kind(parse_quote!(f64)), "unsupported");
        assert_eq!(kind(parse_quote!(i32)), "unsupported");
        assert_eq!(kind(parse_quote!(Option<String>)), "unsupported");
        assert_eq!(kind(parse_quote!(Vec<String>)), "unsupported");
        assert_eq!(kind(parse_quote!((i64, i64))), "unsupported");
    }

    #[test]
    fn test_expand_rejects_bad_attributes() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[envtag(tag = "env:A", fallback = "x")]
                a: String,
            }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_expand_enum_is_opaque() {
        let input: DeriveInput = parse_quote! {
            enum Mode { A, B }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("Opaque"));
    }
}
