use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let spindle = &self.spindle;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();

        let columns = self.model.fields.iter().map(|field| &field.column);

        let value_arms = self.model.fields.iter().map(|field| {
            let column = &field.column;
            let field_ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #column => ::std::result::Result::Ok(
                    <#ty as #spindle::Primitive>::to_value(&self.#field_ident)
                ),
            }
        });

        quote! {
            impl #spindle::Record for #model_ident {
                fn columns(&self) -> #spindle::Result<#spindle::Vec<#spindle::String>> {
                    ::std::result::Result::Ok(::std::vec![
                        #( #spindle::String::from(#columns), )*
                    ])
                }

                fn values(
                    &self,
                    columns: &[#spindle::String],
                ) -> #spindle::Result<#spindle::Vec<#spindle::Value>> {
                    columns
                        .iter()
                        .map(|column| match column.as_str() {
                            #( #value_arms )*
                            other => ::std::result::Result::Err(
                                #spindle::unknown_column(#model_name, other)
                            ),
                        })
                        .collect()
                }
            }
        }
    }

    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let spindle = &self.spindle;
        let model_ident = &self.model.ident;

        let load_fields = self.model.fields.iter().map(|field| {
            let column = &field.column;
            let field_ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #field_ident: #spindle::load_column::<#ty>(&mut row, #column)?,
            }
        });

        quote! {
            impl #spindle::Model for #model_ident {
                fn load(mut row: #spindle::Row) -> #spindle::Result<Self> {
                    ::std::result::Result::Ok(#model_ident {
                        #( #load_fields )*
                    })
                }
            }
        }
    }
}
