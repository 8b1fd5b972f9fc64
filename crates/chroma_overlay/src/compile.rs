//! Compile pipeline
//!
//! validate → derive colors → render documents → package

use chroma_color::validate_and_normalize;

use crate::archive::package;
use crate::documents::build_documents;
use crate::error::Result;
use crate::request::{validate_package_name, ThemeRequest};

/// Compile `request` into overlay archive bytes.
///
/// Pure and reentrant: identical requests always produce byte-identical
/// archives, and any failure aborts without a partial result.
pub fn compile(request: &ThemeRequest) -> Result<Vec<u8>> {
    let seed = validate_and_normalize(&request.seed)?;
    let package_name = validate_package_name(&request.package_name)?;
    let theme_name = request.display_name();

    tracing::debug!(
        %seed,
        package = package_name,
        theme = theme_name,
        components = ?request.components,
        "compiling overlay"
    );

    let documents = build_documents(seed, package_name, theme_name, &request.components)?;
    package(&documents)
}
