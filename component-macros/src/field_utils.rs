use syn::{Field, FieldsNamed, Token, Type, punctuated::Punctuated};

fn field_named<'a>(named: &'a Punctuated<Field, Token![,]>, name: &str) -> Option<&'a Field> {
    named
        .iter()
        .find(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}

/// 确保具名字段结构体包含所需字段，并按给定顺序置于最前
/// - required: (字段名, 字段类型) 列表
/// - reposition_existing: 为 true 时已存在的字段也会移至最前（复用其原定义与属性）；
///   为 false 时已存在的字段保持原位，仅在最前补齐缺失字段。
pub(crate) fn ensure_required_fields(
    fields_named: &mut FieldsNamed,
    required: &[(&str, &Type)],
    reposition_existing: bool,
) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required.iter() {
        match field_named(&old_named, name) {
            Some(existing) if reposition_existing => new_named.push(existing.clone()),
            Some(_) => {}
            None => {
                let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
                let field: Field = syn::parse_quote! { #ident: #ty };
                new_named.push(field);
            }
        }
    }

    // 其余字段保持原始相对顺序
    for f in old_named.into_iter() {
        let moved = reposition_existing
            && f.ident
                .as_ref()
                .map(|i| required.iter().any(|(n, _)| i == n))
                .unwrap_or(false);
        if !moved {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}
