use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attr_helpers::{parse_code_system_attrs, variant_code};

/// Builds the `CodeSystem`, `Display` and `FromStr` impls for a fieldless enum.
pub(crate) fn generate_code_system_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "CodeSystem can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "CodeSystem enums cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "a code system needs at least one code",
        ));
    }

    let attrs = parse_code_system_attrs(&input.attrs)?;
    let Some(url) = attrs.url else {
        return Err(syn::Error::new_spanned(
            name,
            "missing #[code_system(url = \"...\")]",
        ));
    };
    let system_name = attrs.name.unwrap_or_else(|| name.to_string());

    let mut codes = Vec::with_capacity(data.variants.len());
    let mut idents = Vec::with_capacity(data.variants.len());
    let mut seen: HashMap<String, String> = HashMap::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "CodeSystem variants cannot carry data",
            ));
        }
        let ident = &variant.ident;
        let code = match variant_code(&variant.attrs)? {
            Some(code) => code,
            None => attrs.rename_all.apply(&ident.to_string()),
        };
        if let Some(previous) = seen.insert(code.clone(), ident.to_string()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!(
                    "code `{}` is already used by variant `{}`",
                    code, previous
                ),
            ));
        }
        codes.push(code);
        idents.push(ident.clone());
    }

    let indices: Vec<usize> = (0..idents.len()).collect();

    Ok(quote! {
        impl ::fhir_codec::CodeSystem for #name {
            const SYSTEM: &'static ::fhir_codec::CodeSystemDef = &::fhir_codec::CodeSystemDef {
                name: #system_name,
                url: #url,
                codes: &[#(#codes),*],
            };

            fn from_index(index: usize) -> ::std::option::Option<Self> {
                match index {
                    #(#indices => Some(#name::#idents),)*
                    _ => None,
                }
            }

            fn index(self) -> usize {
                match self {
                    #(#name::#idents => #indices,)*
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(::fhir_codec::CodeSystem::code(*self))
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = ::fhir_codec::UnknownCodeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <#name as ::fhir_codec::CodeSystem>::resolve(s).ok_or_else(|| {
                    ::fhir_codec::UnknownCodeError {
                        system: #url,
                        value: s.to_string(),
                    }
                })
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> syn::Result<String> {
        generate_code_system_impl(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn lists_codes_in_declaration_order() {
        let output = expand(syn::parse_quote! {
            #[code_system(url = "http://hl7.org/fhir/care-plan-intent")]
            enum CarePlanIntent { Proposal, Plan, Order, Option }
        })
        .expect("derive succeeds");
        let positions: Vec<usize> = ["\"proposal\"", "\"plan\"", "\"order\"", "\"option\""]
            .iter()
            .map(|code| output.find(code).expect("code is emitted"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(output.contains("\"CarePlanIntent\""));
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = expand(syn::parse_quote! {
            #[code_system(url = "http://example.org/dup")]
            enum Dup {
                Active,
                #[code("active")]
                AlsoActive,
            }
        })
        .expect_err("duplicate must fail");
        assert!(err.to_string().contains("already used by variant `Active`"));
    }

    #[test]
    fn url_is_required() {
        assert!(expand(syn::parse_quote! { enum NoUrl { A } }).is_err());
    }

    #[test]
    fn data_carrying_variants_are_rejected() {
        assert!(expand(syn::parse_quote! {
            #[code_system(url = "http://example.org/bad")]
            enum Bad { A(u8) }
        })
        .is_err());
    }
}
