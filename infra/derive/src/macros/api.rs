use super::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde attributes already present on the struct.
#[derive(Default)]
struct SerdeMeta {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`: derives, `ToSchema` and the serde policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn api_model_tokens(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let serde_meta = serde_meta(&input.attrs)?;
    let derived = derived_trait_names(&input.attrs);

    let derive_attr = derive_attr(&derived);
    let schema_attr = if derived.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &serde_meta.rename_all {
        Some(existing) if existing.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (serde_meta.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` behind the `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_args(args: TokenStream) -> syn::Result<ApiModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ApiModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string"));
            };
            set_once(&mut parsed.rename_all, &nv, value)?;
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            set_once(&mut parsed.deny_unknown_fields, &nv, value.value)?;
        } else {
            return Err(syn::Error::new_spanned(
                nv.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue) -> syn::Result<Lit> {
    match &nv.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, "Expected a literal value")),
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn derive_attr(derived: &FxHashSet<String>) -> TokenStream {
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    let tokens: Vec<_> =
        wanted.into_iter().filter(|(name, _)| !derived.contains(*name)).map(|(_, t)| t).collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn serde_meta(attrs: &[Attribute]) -> syn::Result<SerdeMeta> {
    let mut meta_info = SerdeMeta::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                meta_info.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                meta_info.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(meta_info)
}
