//! Post-processing of result tables.

use std::collections::HashMap;

use crate::models::Table;

/// Standardize column names in place.
///
/// Names present in `col_maps` take the mapped replacement; every other
/// name is lowercased with spaces replaced by underscores. Empty tables
/// pass through untouched.
pub fn standard_cols(table: &mut Table, col_maps: Option<&HashMap<String, String>>) {
    if table.is_empty() {
        return;
    }
    table.rename_columns(|name| match col_maps.and_then(|maps| maps.get(name)) {
        Some(mapped) => mapped.clone(),
        None => name.to_lowercase().replace(' ', "_"),
    });
}
