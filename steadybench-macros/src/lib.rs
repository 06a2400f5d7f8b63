//! Steadybench Macros
//!
//! Procedural macro for benchmark registration.
//!
//! `#[bench]` registers a no-argument function as a benchmark; the whole
//! function body is the timed unit of work. Fixture setup belongs outside
//! the function (statics, lazy initialization) so it stays out of the timed
//! region.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

#[derive(Default)]
struct BenchConfig {
    id: Option<String>,
    name: Option<String>,
}

/// Register a benchmark function
///
/// # Example
///
/// ```ignore
/// #[bench]
/// fn split_csv_line() {
///     let fields = split(black_box(ROW), ",");
///     black_box(fields);
/// }
///
/// // With a display name
/// #[bench(name = "StringSplit/csv")]
/// fn split_csv() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn bench(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    bench_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn bench_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    validate_signature(&func)?;

    let config = parse_bench_config(args)?;

    let fn_name = &func.sig.ident;
    let fn_name_str = fn_name.to_string();

    let id = config.id.unwrap_or_else(|| fn_name_str.clone());
    let name = config.name.unwrap_or_else(|| fn_name_str.clone());

    Ok(quote! {
        #func

        ::steadybench::internal::inventory::submit! {
            ::steadybench::BenchmarkDef {
                id: #id,
                name: #name,
                runner_fn: #fn_name,
                file: file!(),
                line: line!(),
            }
        }
    })
}

fn validate_signature(func: &ItemFn) -> Result<(), syn::Error> {
    if !func.sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig.inputs,
            "benchmark functions take no arguments; the whole body is timed",
        ));
    }
    if func.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "async benchmarks are not supported",
        ));
    }
    Ok(())
}

fn parse_bench_config(args: TokenStream2) -> Result<BenchConfig, syn::Error> {
    let mut config = BenchConfig::default();
    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let attr_name = meta
            .path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default();
        match attr_name.as_str() {
            "id" => {
                let value: syn::LitStr = meta.value()?.parse()?;
                config.id = Some(value.value());
                Ok(())
            }
            "name" => {
                let value: syn::LitStr = meta.value()?.parse()?;
                config.name = Some(value.value());
                Ok(())
            }
            other => Err(meta.error(format!("unknown attribute: {}", other))),
        }
    });

    syn::parse::Parser::parse2(parser, args)?;
    Ok(config)
}
