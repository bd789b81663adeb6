use super::error::derived_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

/// Expands `#[api_model]`: serde/`ToSchema` derives plus the camelCase, strict-field policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_attrs(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` under `server`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = &input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

fn api_model_attrs(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let derived = derived_names(&input.attrs);
    let (serde_rename, serde_deny) = existing_serde(&input.attrs)?;

    let mut out = TokenStream::new();

    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derived.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();
    if !missing.is_empty() {
        out.extend(quote! { #[derive(#(#missing),*)] });
    }

    if !derived.contains("ToSchema") {
        out.extend(quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] });
    }

    let rename =
        args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    match serde_rename {
        Some(existing) if existing.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            ));
        },
        Some(_) => {},
        None => out.extend(quote! { #[serde(rename_all = #rename)] }),
    }

    let deny = args.deny_unknown_fields.unwrap_or(true);
    if serde_deny && !deny {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        ));
    }
    if deny && !serde_deny {
        out.extend(quote! { #[serde(deny_unknown_fields)] });
    }

    Ok(out)
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&nv, "rename_all must be a string literal")? else {
                return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string literal"));
            };
            set_once(&mut parsed.rename_all, value, &nv)?;
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&nv, "deny_unknown_fields must be a boolean literal")?
            else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean literal",
                ));
            };
            set_once(&mut parsed.deny_unknown_fields, value.value, &nv)?;
        } else {
            return Err(syn::Error::new_spanned(
                nv.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue, message: &str) -> syn::Result<Lit> {
    match &nv.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, token: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

/// Reads `rename_all` and `deny_unknown_fields` from existing `#[serde(...)]` attributes.
fn existing_serde(attrs: &[Attribute]) -> syn::Result<(Option<LitStr>, bool)> {
    let mut rename_all = None;
    let mut deny_unknown_fields = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip values of unrelated serde keys such as `default = "..."`.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok((rename_all, deny_unknown_fields))
}
