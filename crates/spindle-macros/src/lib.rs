extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record` and `Model` for a struct with named fields.
///
/// Each field maps to the column of the same name (a raw identifier loses its
/// `r#` prefix). `#[column("Name")]` maps a field to a different column.
#[proc_macro_derive(Model, attributes(column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match spindle_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
