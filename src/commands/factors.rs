use super::OutputTarget;
use crate::factors::{catalog, entries_for, CatalogEntry, Category};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct FactorsConfig {
    /// Vector code of a single category to list (`SL`, `LAV`, ...)
    pub category: Option<String>,
    pub target: OutputTarget,
}

pub fn list_factors(config: FactorsConfig) -> Result<()> {
    let entries = select_entries(config.category.as_deref())?;
    config.target.render(|writer| writer.write_catalog(&entries))
}

fn select_entries(code: Option<&str>) -> Result<Vec<CatalogEntry>> {
    match code {
        None => Ok(catalog()),
        Some(code) => {
            let category = Category::from_code(&code.to_ascii_uppercase()).ok_or_else(|| {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
                anyhow::anyhow!(
                    "Unknown factor category {:?}. Expected one of: {}",
                    code,
                    known.join(", ")
                )
            })?;
            Ok(entries_for(category))
        }
    }
}
