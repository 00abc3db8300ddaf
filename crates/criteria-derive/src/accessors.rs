use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Generics, Ident, Type, Visibility, ext::IdentExt};

///
/// AccessorsInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(accessors), supports(struct_named))]
struct AccessorsInput {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<Ignored, AccessorField>,

    /// Entity name reported in descriptors; defaults to the struct name.
    #[darling(default)]
    entity_name: Option<String>,
}

///
/// AccessorField
///

#[derive(FromField)]
#[darling(attributes(accessor))]
struct AccessorField {
    ident: Option<Ident>,
    ty: Type,

    /// Leave the field out of the model and generate nothing for it.
    #[darling(default)]
    skip: bool,
}

///
/// FieldCardinality
///

#[derive(Clone, Copy)]
enum FieldCardinality {
    One,
    Opt,
    Many,
}

impl FieldCardinality {
    fn variant(self) -> Ident {
        let name = match self {
            Self::One => "One",
            Self::Opt => "Opt",
            Self::Many => "Many",
        };

        format_ident!("{}", name)
    }
}

// derive_accessors
pub fn derive_accessors(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, DarlingError> {
    let parsed = AccessorsInput::from_derive_input(input)?;

    if !parsed.generics.params.is_empty() {
        return Err(
            DarlingError::custom("Accessors cannot be derived for generic structs")
                .with_span(&parsed.generics),
        );
    }

    let fields = parsed
        .data
        .take_struct()
        .ok_or_else(|| DarlingError::unsupported_shape("expected a struct with named fields"))?
        .fields;

    let ident = &parsed.ident;
    let vis = &parsed.vis;
    let ident_str = ident.to_string();
    let entity_name = parsed.entity_name.unwrap_or_else(|| ident_str.clone());

    let mut models = Vec::new();
    let mut members = Vec::new();

    for field in fields.iter().filter(|field| !field.skip) {
        let Some(field_ident) = &field.ident else {
            return Err(DarlingError::custom("expected a named field").with_span(&field.ty));
        };

        let name = field_ident.unraw().to_string();
        let cardinality = classify_field(&field.ty).variant();
        models.push(quote! {
            ::criteria::model::FieldModel::new(
                #name,
                ::criteria::model::FieldCardinality::#cardinality,
            )
        });

        members.push(field_members(ident, vis, field_ident, &name, &field.ty));
    }

    // quote
    Ok(quote! {
        impl ::criteria::traits::EntityKind for #ident {
            const MODEL: &'static ::criteria::model::EntityModel =
                &::criteria::model::EntityModel {
                    path: concat!(module_path!(), "::", #ident_str),
                    entity_name: #entity_name,
                    fields: &[#(#models),*],
                };
        }

        impl ::criteria::traits::Traverse for #ident {
            type Target = Self;
        }

        impl #ident {
            #(#members)*
        }
    })
}

// field_members
// getter, setter, and their accessor constants for one field
fn field_members(
    owner: &Ident,
    vis: &Visibility,
    field: &Ident,
    name: &str,
    ty: &Type,
) -> TokenStream {
    let getter_prefix = if is_bool(ty) { "is" } else { "get" };
    let getter = format_ident!("{}_{}", getter_prefix, name);
    let setter = format_ident!("set_{}", name);
    let getter_const = format_ident!("{}", getter.to_string().to_uppercase());
    let setter_const = format_ident!("{}", setter.to_string().to_uppercase());
    let getter_str = getter.to_string();
    let setter_str = setter.to_string();

    quote! {
        #[must_use]
        #vis const fn #getter(&self) -> &#ty {
            &self.#field
        }

        #vis fn #setter(&mut self, value: #ty) {
            self.#field = value;
        }

        #vis const #getter_const: &'static ::criteria::accessor::Accessor<#owner, #ty> = {
            static ACCESSOR: ::criteria::accessor::Accessor<#owner, #ty> =
                ::criteria::accessor::Accessor::getter(#getter_str, #owner::#getter);
            &ACCESSOR
        };

        #vis const #setter_const: &'static ::criteria::accessor::Accessor<#owner, #ty> = {
            static ACCESSOR: ::criteria::accessor::Accessor<#owner, #ty> =
                ::criteria::accessor::Accessor::setter(#setter_str, #owner::#setter);
            &ACCESSOR
        };
    }
}

fn classify_field(ty: &Type) -> FieldCardinality {
    match last_segment(ty).as_deref() {
        Some("Option") => FieldCardinality::Opt,
        Some("Vec" | "VecDeque" | "BTreeSet" | "HashSet") => FieldCardinality::Many,
        _ => FieldCardinality::One,
    }
}

fn is_bool(ty: &Type) -> bool {
    last_segment(ty).as_deref() == Some("bool")
}

fn last_segment(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };

    path.path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(src: &str) -> String {
        derive_accessors(src.parse().expect("tokens")).to_string()
    }

    #[test]
    fn generates_model_and_accessors() {
        let out = expand_str("struct Person { name: String, active: bool, tags: Vec<String> }");

        assert!(out.contains("EntityKind for Person"));
        assert!(out.contains("fn get_name"));
        assert!(out.contains("fn is_active"));
        assert!(out.contains("GET_NAME"));
        assert!(out.contains("SET_ACTIVE"));
        assert!(out.contains("FieldCardinality :: Many"));
    }

    #[test]
    fn skipped_fields_are_left_out() {
        let out = expand_str("struct Person { name: String, #[accessor(skip)] cache: Vec<u8> }");

        assert!(!out.contains("get_cache"));
        assert!(!out.contains("\"cache\""));
    }

    #[test]
    fn entity_name_can_be_overridden() {
        let out = expand_str(r#"#[accessors(entity_name = "User")] struct Account { id: u64 }"#);

        assert!(out.contains("entity_name : \"User\""));
    }

    #[test]
    fn optional_fields_are_opt() {
        let out = expand_str("struct Card { owner: Option<Box<Person>> }");

        assert!(out.contains("FieldCardinality :: Opt"));
    }

    #[test]
    fn generic_structs_are_rejected() {
        let out = expand_str("struct Wrapper<T> { inner: T }");

        assert!(out.contains("compile_error"));
        assert!(out.contains("generic"));
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let out = expand_str("struct Pair(u32, u32);");

        assert!(out.contains("compile_error"));
    }
}
