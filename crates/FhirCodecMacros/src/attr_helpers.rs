use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{token, Attribute, Expr, Lit, LitStr, Meta};

/// Wire casing applied to variants that carry no explicit `#[code]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    KebabCase,
    PascalCase,
    CamelCase,
    LowerCase,
    UpperCase,
}

impl RenameRule {
    fn from_literal(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "kebab-case" => Ok(RenameRule::KebabCase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            "lowercase" => Ok(RenameRule::LowerCase),
            "UPPERCASE" => Ok(RenameRule::UpperCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unsupported rename_all rule `{}`, expected one of kebab-case, PascalCase, camelCase, lowercase, UPPERCASE",
                    other
                ),
            )),
        }
    }

    pub(crate) fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::KebabCase => ident.to_kebab_case(),
            RenameRule::PascalCase => ident.to_upper_camel_case(),
            RenameRule::CamelCase => ident.to_lower_camel_case(),
            RenameRule::LowerCase => ident.to_lowercase(),
            RenameRule::UpperCase => ident.to_uppercase(),
        }
    }
}

/// Parsed form of the enum-level `#[code_system(...)]` attribute.
pub(crate) struct CodeSystemAttrs {
    pub(crate) name: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) rename_all: RenameRule,
}

fn string_value(expr: &Expr) -> syn::Result<LitStr> {
    if let Expr::Lit(expr_lit) = expr
        && let Lit::Str(lit_str) = &expr_lit.lit
    {
        return Ok(lit_str.clone());
    }
    Err(syn::Error::new(expr.span(), "expected a string literal"))
}

/// Collects `name`, `url` and `rename_all` from every `#[code_system(...)]`
/// attribute on the enum.
pub(crate) fn parse_code_system_attrs(attrs: &[Attribute]) -> syn::Result<CodeSystemAttrs> {
    let mut parsed = CodeSystemAttrs {
        name: None,
        url: None,
        rename_all: RenameRule::KebabCase,
    };

    for attr in attrs {
        if !attr.path().is_ident("code_system") {
            continue;
        }
        let list = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)?;
        for meta in list {
            let nv = match meta {
                Meta::NameValue(nv) => nv,
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected `key = \"value\"` inside #[code_system(...)]",
                    ));
                }
            };
            let value = string_value(&nv.value)?;
            if nv.path.is_ident("name") {
                parsed.name = Some(value.value());
            } else if nv.path.is_ident("url") {
                parsed.url = Some(value.value());
            } else if nv.path.is_ident("rename_all") {
                parsed.rename_all = RenameRule::from_literal(&value)?;
            } else {
                return Err(syn::Error::new(
                    nv.path.span(),
                    "unknown code_system key, expected `name`, `url` or `rename_all`",
                ));
            }
        }
    }

    Ok(parsed)
}

/// Reads an explicit wire code from `#[code("...")]` or `#[code = "..."]`.
pub(crate) fn variant_code(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident("code") {
            continue;
        }
        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => string_value(&nv.value)?,
            Meta::Path(path) => {
                return Err(syn::Error::new(
                    path.span(),
                    "expected #[code(\"...\")] or #[code = \"...\"]",
                ));
            }
        };
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "a code must not be empty"));
        }
        return Ok(Some(lit.value()));
    }
    Ok(None)
}
