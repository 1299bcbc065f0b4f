use crate::derive_utils::apply_derives;
use crate::field_utils::ensure_required_fields;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Item, ItemStruct, LitStr, Result, Token, Type, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[component] 宏实现
/// - 若缺失则追加字段：`identifier: String`, `version: Option<Version>`，并置于字段最前
/// - 自动实现 `ComponentType`（TYPE_ID）与 `Identity`（type_id/identifier/version/set_version/clear_version/dict）
/// - 参数：`#[component(type_id = "...", debug = true|false)]`；
///   - `type_id` 必填，作为该组件类别的常量标识
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ComponentAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[component] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let Some(type_id) = cfg.type_id else {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "missing required key 'type_id', e.g. #[component(type_id = \"model\")]",
        )
        .to_compile_error()
        .into();
    };

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    // 重新组织字段：确保 identifier/version 在最前，并避免重复
    let identifier_ty: Type = syn::parse_quote! { String };
    let version_ty: Type =
        syn::parse_quote! { ::std::option::Option<::component_domain::value_object::Version> };
    ensure_required_fields(
        fields_named,
        &[("identifier", &identifier_ty), ("version", &version_ty)],
        /*reposition_existing*/ true,
    );

    // 合并/规范 derive：默认添加 Debug（可通过 debug=false 关闭）、Clone、Serialize、Deserialize
    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let out_struct = ItemStruct { ..st };

    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #out_struct

        impl #impl_generics ::component_domain::identity::ComponentType for #ident #ty_generics #where_clause {
            const TYPE_ID: &'static str = #type_id;
        }

        impl #impl_generics ::component_domain::identity::Identity for #ident #ty_generics #where_clause {
            fn type_id(&self) -> &'static str {
                <Self as ::component_domain::identity::ComponentType>::TYPE_ID
            }

            fn identifier(&self) -> &str { &self.identifier }

            fn version(&self) -> ::std::option::Option<::component_domain::value_object::Version> {
                self.version
            }

            fn set_version(&mut self, version: ::component_domain::value_object::Version) {
                self.version = ::std::option::Option::Some(version);
            }

            fn clear_version(&mut self) {
                self.version = ::std::option::Option::None;
            }

            fn dict(&self) -> ::component_domain::error::ComponentResult<::component_domain::identity::FieldMap> {
                ::component_domain::identity::to_field_map(self)
            }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct ComponentAttrConfig {
    type_id: Option<LitStr>,
    derive_debug: Option<bool>,
}

impl Parse for ComponentAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut type_id: Option<LitStr> = None;
        let mut derive_debug: Option<bool> = None;

        if input.is_empty() {
            return Ok(Self {
                type_id,
                derive_debug,
            });
        }

        let elems: Punctuated<ComponentAttrElem, Token![,]> =
            Punctuated::<ComponentAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                ComponentAttrElem::TypeId(lit) => {
                    if type_id.is_some() {
                        return Err(syn::Error::new(
                            lit.span(),
                            "duplicate key 'type_id' in attribute",
                        ));
                    }
                    if lit.value().is_empty() || lit.value().contains('/') {
                        return Err(syn::Error::new(
                            lit.span(),
                            "'type_id' must be non-empty and must not contain '/'",
                        ));
                    }
                    type_id = Some(lit);
                }
                ComponentAttrElem::Debug(b) => {
                    if derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    derive_debug = Some(b);
                }
            }
        }

        Ok(Self {
            type_id,
            derive_debug,
        })
    }
}

enum ComponentAttrElem {
    TypeId(LitStr),
    Debug(bool),
}

impl Parse for ComponentAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        if key == "type_id" {
            let _eq: Token![=] = input.parse()?;
            let lit: LitStr = input.parse()?;
            Ok(ComponentAttrElem::TypeId(lit))
        } else if key == "debug" {
            let _eq: Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => Ok(ComponentAttrElem::Debug(b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            }
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'type_id' or 'debug'",
            ))
        }
    }
}
