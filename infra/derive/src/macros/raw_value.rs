use fxhash::FxHashSet;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, Meta, Type, UnOp, Variant,
};

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// The scalar families a raw value can belong to.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RawKind {
    Integer,
    Char,
    Str,
}

impl RawKind {
    fn classify(ty: &Type) -> Option<Self> {
        match ty {
            Type::Reference(reference) => {
                let is_static = reference.lifetime.as_ref().is_some_and(|lt| lt.ident == "static");
                let is_str = matches!(&*reference.elem, Type::Path(p) if p.path.is_ident("str"));
                (reference.mutability.is_none() && is_static && is_str).then_some(Self::Str)
            },
            Type::Path(path) => {
                let ident = path.path.get_ident()?.to_string();
                if ident == "char" {
                    Some(Self::Char)
                } else {
                    INTEGER_TYPES.contains(&ident.as_str()).then_some(Self::Integer)
                }
            },
            _ => None,
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Char => "char",
            Self::Str => "string",
        }
    }
}

/// A resolved raw value, explicit or implicit.
enum RawLiteral {
    Integer(i128),
    Char(char),
    Str(String),
}

impl RawLiteral {
    fn key(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Char(value) => format!("{value:?}"),
            Self::Str(value) => format!("{value:?}"),
        }
    }

    fn tokens(&self) -> TokenStream {
        match self {
            Self::Integer(value) => {
                let magnitude = Literal::u128_unsuffixed(value.unsigned_abs());
                if *value < 0 { quote!(-#magnitude) } else { quote!(#magnitude) }
            },
            Self::Char(value) => {
                let lit = Literal::character(*value);
                quote!(#lit)
            },
            Self::Str(value) => {
                let lit = Literal::string(value);
                quote!(#lit)
            },
        }
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "RawValue can only be derived for enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "RawValue cannot be derived for generic enums",
        ));
    }

    let (raw_ty, kind) = raw_type(input)?;
    let assigned = assign_raw_values(data.variants.iter(), kind)?;

    let idents: Vec<&Ident> = assigned.iter().map(|(ident, _)| *ident).collect();
    let literals: Vec<TokenStream> = assigned.iter().map(|(_, lit)| lit.tokens()).collect();

    let try_from = if kind == RawKind::Str {
        quote! {
            #[automatically_derived]
            impl<'raw> ::core::convert::TryFrom<&'raw str> for #name {
                type Error = ::tour_domain::raw::UnknownRawValue;

                fn try_from(raw: &'raw str) -> ::core::result::Result<Self, Self::Error> {
                    match raw {
                        #( #literals => ::core::result::Result::Ok(Self::#idents), )*
                        _ => ::core::result::Result::Err(
                            ::tour_domain::raw::UnknownRawValue::new(stringify!(#name), format!("{raw:?}")),
                        ),
                    }
                }
            }
        }
    } else {
        quote! {
            #[automatically_derived]
            impl ::core::convert::TryFrom<#raw_ty> for #name {
                type Error = ::tour_domain::raw::UnknownRawValue;

                fn try_from(raw: #raw_ty) -> ::core::result::Result<Self, Self::Error> {
                    <Self as ::tour_domain::raw::RawValue>::from_raw_value(raw).ok_or_else(|| {
                        ::tour_domain::raw::UnknownRawValue::new(stringify!(#name), format!("{raw:?}"))
                    })
                }
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::tour_domain::raw::RawValue for #name {
            type Raw = #raw_ty;

            #[inline]
            fn raw_value(&self) -> Self::Raw {
                match *self {
                    #( Self::#idents => #literals, )*
                }
            }

            #[inline]
            fn from_raw_value(raw: Self::Raw) -> ::core::option::Option<Self> {
                match raw {
                    #( #literals => ::core::option::Option::Some(Self::#idents), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #try_from
    })
}

fn raw_type(input: &DeriveInput) -> syn::Result<(Type, RawKind)> {
    let mut raw_ty = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("raw_value")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type") {
                raw_ty = Some(meta.value()?.parse::<Type>()?);
                Ok(())
            } else {
                Err(meta.error("expected `type = ...`"))
            }
        })?;
    }

    let raw_ty = raw_ty.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "RawValue requires `#[raw_value(type = ...)]`")
    })?;
    let kind = RawKind::classify(&raw_ty).ok_or_else(|| {
        syn::Error::new_spanned(
            &raw_ty,
            "unsupported raw value type: expected a primitive integer, `char`, or `&'static str`",
        )
    })?;

    Ok((raw_ty, kind))
}

/// Walks the variants in declaration order, filling in implicit values.
fn assign_raw_values<'a>(
    variants: impl Iterator<Item = &'a Variant>,
    kind: RawKind,
) -> syn::Result<Vec<(&'a Ident, RawLiteral)>> {
    let mut seen = FxHashSet::default();
    let mut next_integer: Option<i128> = Some(0);
    let mut assigned = Vec::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "RawValue variants cannot carry associated values",
            ));
        }

        let literal = match (explicit_literal(variant, kind)?, kind) {
            (Some(literal), _) => literal,
            (None, RawKind::Integer) => RawLiteral::Integer(next_integer.ok_or_else(|| {
                syn::Error::new_spanned(&variant.ident, "implicit raw value overflows")
            })?),
            (None, RawKind::Str) => RawLiteral::Str(lower_camel_case(&variant.ident)),
            (None, RawKind::Char) => {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "char raw values are never implicit, add `#[raw = '...']`",
                ));
            },
        };

        if let RawLiteral::Integer(value) = literal {
            next_integer = value.checked_add(1);
        }
        if !seen.insert(literal.key()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("raw value {} is already assigned to another variant", literal.key()),
            ));
        }

        assigned.push((&variant.ident, literal));
    }

    Ok(assigned)
}

fn explicit_literal(variant: &Variant, kind: RawKind) -> syn::Result<Option<RawLiteral>> {
    let Some(attr) = variant.attrs.iter().find(|attr| attr.path().is_ident("raw")) else {
        return Ok(None);
    };
    // `#[raw = lit]` only admits plain literals, so negative integers use `#[raw(-2)]`.
    let parsed;
    let value = match &attr.meta {
        Meta::NameValue(name_value) => &name_value.value,
        Meta::List(_) => {
            parsed = attr.parse_args::<Expr>()?;
            &parsed
        },
        Meta::Path(path) => {
            return Err(syn::Error::new_spanned(path, "expected `#[raw = ...]` or `#[raw(...)]`"));
        },
    };

    let literal = match (kind, value) {
        (RawKind::Integer, expr) => RawLiteral::Integer(integer_value(expr)?),
        (RawKind::Char, Expr::Lit(ExprLit { lit: Lit::Char(c), .. })) => RawLiteral::Char(c.value()),
        (RawKind::Str, Expr::Lit(ExprLit { lit: Lit::Str(s), .. })) => RawLiteral::Str(s.value()),
        (kind, expr) => {
            return Err(syn::Error::new_spanned(
                expr,
                format!("expected a {} literal", kind.describe()),
            ));
        },
    };

    Ok(Some(literal))
}

fn integer_value(expr: &Expr) -> syn::Result<i128> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<i128>(),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr: inner, .. }) => integer_value(inner)?
            .checked_neg()
            .ok_or_else(|| syn::Error::new_spanned(expr, "integer literal out of range")),
        other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
    }
}

fn lower_camel_case(ident: &Ident) -> String {
    let name = ident.unraw().to_string();
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| first.to_lowercase().chain(chars).collect())
}
