use proc_macro::TokenStream;

mod accessors;

/// Generates the entity model, getters, setters, and `'static` accessor
/// constants for a struct with named fields.
///
/// ```ignore
/// #[derive(Accessors)]
/// #[accessors(entity_name = "User")]
/// struct Account {
///     name: String,
///     active: bool,
///     #[accessor(skip)]
///     cache: Vec<u8>,
/// }
///
/// // Account::GET_NAME, Account::SET_NAME, Account::IS_ACTIVE, Account::SET_ACTIVE
/// ```
#[proc_macro_derive(Accessors, attributes(accessors, accessor))]
pub fn derive_accessors(input: TokenStream) -> TokenStream {
    accessors::derive_accessors(input.into()).into()
}
