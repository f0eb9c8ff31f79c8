//! Normalization of raw explorer records into the fixed export schema.

pub(crate) mod convert;
mod normalize;
mod records;

pub use convert::{epoch_to_utc, gas_fee_eth, safe_div};
pub use normalize::normalize_records;
pub use records::{Category, NormalizedRecord, TransactionType};

use crate::chain::fetch::RawTransaction;

/// Normalize every category and concatenate in the fixed export order:
/// normal, internal, ERC-20, ERC-721. Each category keeps its input order;
/// nothing is re-sorted across categories.
pub fn normalize_all(
    mut rows_for: impl FnMut(Category) -> Vec<RawTransaction>,
) -> Vec<NormalizedRecord> {
    let mut records = Vec::new();
    for category in Category::ALL {
        let rows = rows_for(category);
        records.extend(normalize_records(category, &rows));
    }
    records
}
