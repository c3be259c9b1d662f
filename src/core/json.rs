use crate::core::categories::{Category, CATEGORIES};
use crate::core::errors::FetchError;
use crate::core::range_set::{CategoryRanges, RangeSet};
use serde::Deserialize;
use serde_json::{Map, Value};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Decode a GitHub meta document into a [RangeSet] ordered by [CATEGORIES].
///
/// The document must be a JSON object. Keys other than the category keys (`domains`,
/// `ssh_key_fingerprints`, ...) are ignored, and a missing or `null` category is empty.
pub fn parse(json: &str) -> Result<RangeSet, FetchError> {
    let document: Map<String, Value> = serde_json::from_str(json).map_err(FetchError::Decode)?;

    let categories = CATEGORIES
        .iter()
        .map(|category| parse_category(&document, category))
        .collect::<Result<Vec<CategoryRanges>, FetchError>>()?;

    Ok(RangeSet { categories })
}

fn parse_category(
    document: &Map<String, Value>,
    category: &Category,
) -> Result<CategoryRanges, FetchError> {
    let ranges = match document.get(category.key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => Vec::<String>::deserialize(value).map_err(FetchError::Decode)?,
    };

    Ok(CategoryRanges {
        name: category.name.to_string(),
        ranges,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
