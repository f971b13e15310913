//! Derive macro implementation for envfill

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Visibility};

mod attrs;
mod label;

use attrs::{FieldAttrs, StructAttrs};
use label::type_label;

/// `EnvFill` derive macro
///
/// Implements `envfill::EnvStruct` and `envfill::Target` so the struct can be
/// passed to `envfill::parse`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to every `name` in this struct
///
/// **Field-level**:
/// - `#[env(name = "VAR")]`: Environment variable to read
/// - `#[env(default = "literal")]`: Fallback used when `VAR` is unset or empty
///
/// Fields whose type is `String`, `i32`, `bool` or `f32` are converted from
/// strings. A field whose type implements `EnvStruct` is filled recursively.
/// Any other type compiles and is skipped while no value resolves for it;
/// once one does, the walk fails with `EnvError::UnsupportedFieldKind`.
///
/// # Example
///
/// See the `envfill` crate documentation for usage examples.
#[proc_macro_derive(EnvFill, attributes(env))]
pub fn derive_envfill(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvFill only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvFill only supports structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut slots = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let (descriptor, slot) = expand_field(field, &struct_attrs)?;
        descriptors.push(descriptor);
        slots.push(quote! {
            #index => ::core::option::Option::Some(#slot),
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envfill::EnvStruct for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::envfill::FieldDescriptor] {
                const FIELDS: &[::envfill::FieldDescriptor] = &[
                    #(#descriptors),*
                ];
                FIELDS
            }

            #[allow(clippy::needless_borrow)]
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<::envfill::FieldSlot<'_>> {
                #[allow(unused_imports)]
                use ::envfill::__private::{
                    ViaBoolean as _, ViaFloat as _, ViaInteger as _, ViaNested as _,
                    ViaOther as _, ViaText as _,
                };
                match index {
                    #(#slots)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::envfill::Target for #struct_name #ty_generics #where_clause {
            fn as_struct_mut(
                &mut self,
            ) -> ::core::option::Option<&mut dyn ::envfill::EnvStruct> {
                ::core::option::Option::Some(self)
            }
        }
    })
}

/// Descriptor literal and slot expression for one field.
fn expand_field(field: &Field, struct_attrs: &StructAttrs) -> syn::Result<(TokenStream2, TokenStream2)> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "EnvFill requires named fields"))?;
    let field_name = ident.unraw().to_string();
    let attrs = FieldAttrs::from_field(field)?;
    let ty = &field.ty;
    let type_name = type_label(ty);

    let env = match &attrs.name {
        Some(name) => {
            let full = format!("{}{}", struct_attrs.prefix, name);
            quote!(::core::option::Option::Some(#full))
        }
        None => quote!(::core::option::Option::None),
    };
    let env_default = match &attrs.default {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    };
    let assignable = matches!(field.vis, Visibility::Public(_));

    // The slot is chosen by the first `Via*` impl that applies to the type.
    let slot = quote! {
        (&&&&&&::envfill::__private::Dispatch::<#ty>::new()).slot(&mut self.#ident)
    };

    let descriptor = quote! {
        ::envfill::FieldDescriptor {
            name: #field_name,
            env: #env,
            env_default: #env_default,
            assignable: #assignable,
            type_name: #type_name,
        }
    };

    Ok((descriptor, slot))
}
