//! Combines parsed read-mes into one globally-numbered catalog.

use log::debug;

use crate::catalog::{Catalog, Script};
use crate::error::Result;
use crate::parser;
use crate::sources::ReadmeSource;

/// Parses every source in caller order and concatenates the results.
///
/// Category indices are renumbered to be globally contiguous: category N of
/// source K comes after all categories of sources before K. Each script is
/// stamped with its source read-me's directory for later reconciliation and
/// file resolution.
///
/// # Errors
///
/// Propagates the first parse failure; a partially merged catalog is never
/// returned.
pub fn merge_catalogs(sources: &[ReadmeSource]) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    for source in sources {
        let parsed = parser::parse_readme(&source.text, &source.path)?;
        let base = catalog.categories.len();

        debug!(
            "Merged `{}`: {} categories, {} scripts (offset {base})",
            source.path,
            parsed.categories.len(),
            parsed.scripts.len(),
        );

        catalog.categories.extend(parsed.categories);
        catalog.scripts.extend(parsed.scripts.into_iter().map(|s| Script {
            category: base + s.category,
            name: s.name,
            file: s.file,
            parameters: s.parameters,
            description: s.description,
            source_dir: source.directory.clone(),
        }));
    }

    Ok(catalog)
}
