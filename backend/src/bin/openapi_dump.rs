//! Print the OpenAPI document as JSON.

use std::io::Write;
use std::process::ExitCode;

use directory_backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let document = match ApiDoc::openapi().to_pretty_json() {
        Ok(document) => document,
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "failed to serialise OpenAPI document: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = writeln!(std::io::stdout(), "{document}") {
        let _ = writeln!(std::io::stderr(), "failed to write OpenAPI document: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
