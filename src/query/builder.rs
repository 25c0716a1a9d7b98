//! Parameter builder

use super::transform::{rename_keys, renamed_key, RenameMap};
use crate::types::{JsonValue, PageParam, QueryParams, PAGE_SIZE_FIELD};

/// Build the parameters for one fetch.
///
/// `base` is renamed first. In paged mode the renamed page and size fields
/// are then inserted over it, so they win whenever a renamed query key lands
/// on the same name. With paging off, only the renamed `base` is sent.
pub fn build_params(
    base: &QueryParams,
    page: Option<(u32, u32)>,
    page_param: PageParam,
    rename: &RenameMap,
) -> QueryParams {
    let mut params = rename_keys(base.clone(), rename);

    if let Some((current, size)) = page {
        params.insert(
            renamed_key(page_param.field_name(), rename).to_string(),
            JsonValue::from(current),
        );
        params.insert(
            renamed_key(PAGE_SIZE_FIELD, rename).to_string(),
            JsonValue::from(size),
        );
    }

    params
}
