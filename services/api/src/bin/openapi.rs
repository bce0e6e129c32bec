//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI specification for the Dinosaur Explorer API to disk.
//!
//! Usage: `openapi [OUTPUT]` (defaults to `openapi.json`).

use api_lib::web::ApiDoc;
use std::path::PathBuf;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("openapi.json"));

    let api_doc = ApiDoc::openapi();
    std::fs::write(&output, api_doc.to_pretty_json()?)?;
    println!(
        "✅ OpenAPI specification with {} paths generated at {}",
        api_doc.paths.paths.len(),
        output.display()
    );
    Ok(())
}
