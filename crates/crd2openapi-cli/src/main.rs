//! crd2openapi - convert CustomResourceDefinitions to OpenAPI documents
//!
//! Reads one CRD (JSON or YAML) from stdin and writes an OpenAPI document
//! to stdout as pretty-printed JSON.

use clap::Parser;
use std::io::{self, Read};

use crd2openapi_convert::{ConvertOptions, convert, write_document};

mod error;
mod exit_codes;

use error::CliError;

#[derive(Parser)]
#[command(name = "crd2openapi")]
#[command(version)]
#[command(
    about = "Read a CRD from stdin and write an OpenAPI document to stdout",
    long_about = None
)]
struct Cli {
    /// CRD version to convert (default: the greatest declared version)
    #[arg(long)]
    crd_version: Option<String>,

    /// Output in OpenAPI v2 (Swagger) format, the default format is OpenAPI v3
    #[arg(long)]
    output_openapi_v2: bool,

    /// Inject default apiVersion and kind values into the custom resource schemas
    #[arg(long)]
    inject_default_gvk: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    if let Err(err) = run(&cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> error::Result<()> {
    let mut src = Vec::new();
    io::stdin().lock().read_to_end(&mut src)?;

    let options = ConvertOptions {
        version: cli.crd_version.clone(),
        legacy: cli.output_openapi_v2,
        inject_default_gvk: cli.inject_default_gvk,
    };

    let doc = convert(&src, options).map_err(CliError::from)?;
    write_document(&doc, io::stdout().lock()).map_err(CliError::from)?;

    Ok(())
}
