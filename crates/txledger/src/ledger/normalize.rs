//! The four category transforms, expressed as one generic pass.

use crate::chain::fetch::RawTransaction;
use crate::ledger::convert::{epoch_to_utc, fmt_amount, gas_fee_eth, safe_div, WEI_PER_ETH};
use crate::ledger::records::{Category, NormalizedRecord, TransactionType};
use serde_json::Value;

/// A call with no input data moves ETH only.
const EMPTY_INPUT: &str = "0x";

/// Map one category's raw records to normalized rows, preserving input
/// order. Every raw record yields exactly one row; fields that fail to
/// convert degrade instead of dropping the record.
pub fn normalize_records(category: Category, rows: &[RawTransaction]) -> Vec<NormalizedRecord> {
    rows.iter().map(|raw| normalize_one(category, raw)).collect()
}

fn normalize_one(category: Category, raw: &RawTransaction) -> NormalizedRecord {
    let varying = category_fields(category, raw);
    NormalizedRecord {
        transaction_hash: field(raw, "hash"),
        date_time: epoch_to_utc(&field(raw, "timeStamp")),
        from_address: field(raw, "from"),
        to_address: field(raw, "to"),
        transaction_type: varying.transaction_type,
        asset_contract_address: varying.asset_contract_address,
        asset_symbol: varying.asset_symbol,
        token_id: varying.token_id,
        value_amount: varying.value_amount,
        gas_fee_eth: varying.gas_fee_eth,
    }
}

/// The per-category part of the mapping: transaction type, value scaling,
/// gas fee availability, and asset identification.
struct CategoryFields {
    transaction_type: TransactionType,
    asset_contract_address: String,
    asset_symbol: String,
    token_id: String,
    value_amount: String,
    gas_fee_eth: String,
}

fn category_fields(category: Category, raw: &RawTransaction) -> CategoryFields {
    match category {
        Category::Normal => CategoryFields {
            transaction_type: if field(raw, "input") == EMPTY_INPUT {
                TransactionType::EthTransfer
            } else {
                TransactionType::ContractInteraction
            },
            asset_contract_address: String::new(),
            asset_symbol: "ETH".to_string(),
            token_id: String::new(),
            value_amount: fmt_amount(safe_div(&field(raw, "value"), WEI_PER_ETH)),
            gas_fee_eth: fmt_amount(gas_fee_eth(
                &field(raw, "gasUsed"),
                &field(raw, "gasPrice"),
            )),
        },
        Category::Internal => CategoryFields {
            transaction_type: TransactionType::InternalTransfer,
            asset_contract_address: String::new(),
            asset_symbol: "ETH".to_string(),
            token_id: String::new(),
            value_amount: fmt_amount(safe_div(&field(raw, "value"), WEI_PER_ETH)),
            // The API does not attribute gas to internal calls.
            gas_fee_eth: String::new(),
        },
        Category::Erc20 => {
            let decimals = field(raw, "tokenDecimal").trim().parse::<i32>().unwrap_or(0);
            CategoryFields {
                transaction_type: TransactionType::Erc20,
                asset_contract_address: field(raw, "contractAddress"),
                asset_symbol: field(raw, "tokenSymbol"),
                token_id: String::new(),
                value_amount: fmt_amount(safe_div(&field(raw, "value"), 10f64.powi(decimals))),
                gas_fee_eth: String::new(),
            }
        }
        Category::Erc721 => CategoryFields {
            transaction_type: TransactionType::Erc721,
            asset_contract_address: field(raw, "contractAddress"),
            asset_symbol: field(raw, "tokenName"),
            token_id: field(raw, "tokenID"),
            value_amount: "1".to_string(),
            gas_fee_eth: String::new(),
        },
    }
}

/// Extract a field as text. Missing keys and non-text values degrade to the
/// empty string; bare JSON numbers are accepted where some explorers emit
/// them.
fn field(raw: &RawTransaction, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
