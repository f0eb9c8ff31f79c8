//! Output schema: one flat record shape for all four transfer categories.

use serde::{Deserialize, Serialize};

/// Transaction categories exposed by the explorer's account module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Normal,
    Internal,
    Erc20,
    Erc721,
}

impl Category {
    /// Fixed export order.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Internal, Self::Erc20, Self::Erc721];

    /// Account-module action name for the API request.
    pub fn action(self) -> &'static str {
        match self {
            Self::Normal => "txlist",
            Self::Internal => "txlistinternal",
            Self::Erc20 => "tokentx",
            Self::Erc721 => "tokennfttx",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionType {
    #[serde(rename = "ETH transfer")]
    EthTransfer,
    #[serde(rename = "Contract Interaction")]
    ContractInteraction,
    #[serde(rename = "Internal Transfer")]
    InternalTransfer,
    #[serde(rename = "ERC-20")]
    Erc20,
    #[serde(rename = "ERC-721")]
    Erc721,
}

/// One output row. Serde renames carry the exact CSV column names; field
/// order is the column order. Numeric cells are pre-formatted strings so a
/// degraded value renders as `0` and a non-computable one as an empty cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    #[serde(rename = "Transaction Hash")]
    pub transaction_hash: String,
    #[serde(rename = "Date & Time")]
    pub date_time: String,
    #[serde(rename = "From Address")]
    pub from_address: String,
    #[serde(rename = "To Address")]
    pub to_address: String,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: TransactionType,
    #[serde(rename = "Asset Contract Address")]
    pub asset_contract_address: String,
    #[serde(rename = "Asset Symbol / Name")]
    pub asset_symbol: String,
    #[serde(rename = "Token ID")]
    pub token_id: String,
    #[serde(rename = "Value / Amount")]
    pub value_amount: String,
    #[serde(rename = "Gas Fee (ETH)")]
    pub gas_fee_eth: String,
}
