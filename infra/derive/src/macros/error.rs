use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident, PathArguments, Type, Variant};

const CONTEXT_FIELD: &str = "context";
const SOURCE_FIELD: &str = "source";
const INTERNAL_VARIANT: &str = "Internal";

/// What the expansion needs to know about a single enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    contextual: bool,
    cfgs: Vec<&'a Attribute>,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == INTERNAL_VARIANT
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "avia_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<syn::Result<Vec<_>>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    if let Some(orphan) = variants.iter().find(|v| v.source.is_some() && !v.contextual) {
        return syn::Error::new_spanned(
            orphan.ident,
            "avia_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter(|v| !v.is_internal()).filter_map(|v| source_impl(name, &ext, v));
    let message_impls = variants.iter().find(|v| v.is_internal()).map(|v| message_impls(name, v));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #message_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "avia_error requires named fields for source/context handling",
        ));
    };

    let contextual = context_field(fields)?.is_some();
    let source = fields
        .named
        .iter()
        .find(|f| is_source(f))
        .and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));
    let cfgs = variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect();

    Ok(ErrorVariant { ident: &variant.ident, source, contextual, cfgs })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == CONTEXT_FIELD)) else {
        return Ok(None);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn is_source(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|i| i == SOURCE_FIELD)
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    if derives.is_empty() { quote!() } else { quote! { #[derive(#(#derives),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.contextual).map(|v| {
        let ident = v.ident;
        let cfgs = &v.cfgs;
        quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext: &Ident, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
    let (field, ty) = variant.source?;
    let ident = variant.ident;
    let cfgs = &variant.cfgs;

    Some(quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfgs)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn message_impls(name: &Ident, internal: &ErrorVariant<'_>) -> TokenStream {
    let cfgs = &internal.cfgs;

    quote! {
        #(#cfgs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfgs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

/// Matches `Option<Cow<'static, str>>` (any path prefix on `Option` and `Cow`).
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(args) = generic_args(ty, "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(inner)) = args.first() else {
        return false;
    };
    let Some(cow_args) = generic_args(inner, "Cow") else {
        return false;
    };

    let mut cow_args = cow_args.iter();
    let static_lifetime =
        matches!(cow_args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_target = matches!(
        cow_args.next(),
        Some(GenericArgument::Type(Type::Path(p))) if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );

    static_lifetime && str_target
}

fn generic_args<'a>(
    ty: &'a Type,
    expected: &str,
) -> Option<&'a syn::punctuated::Punctuated<GenericArgument, syn::Token![,]>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != expected {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}
