//! Account Enrichment
//!
//! Turns a raw ledger record into an `Account` with the derived activity flag,
//! large-balance flag and exchange label.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::numeric::{parse_integer, to_whole_units};
use crate::constants::{ACTIVE_WINDOW_SECS, MIN_BALANCE_UNITS, known_accounts::KNOWN_ACCOUNTS};

/// One account exactly as the ledger API returns it
///
/// Missing or null fields decode to their empty value; numeric strings then read as zero.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RawAccount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_count: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Enriched account written to the snapshot
///
/// Field order matches the snapshot layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Account {
    pub active: bool,
    pub large_balance: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub account_identifier: String,
    pub balance: String,
    pub transaction_count: String,
    pub updated_at: i64,
}

impl Account {
    /// Transaction count, zero when the remote string is malformed
    pub fn transaction_count(&self) -> BigDecimal {
        parse_integer(&self.transaction_count)
    }

    /// Balance in whole coins, zero when the remote string is malformed
    pub fn balance_units(&self) -> BigDecimal {
        to_whole_units(&parse_integer(&self.balance))
    }
}

/// Immutable identifier -> label lookup
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    /// The embedded exchange hot-wallet list
    pub fn known_exchanges() -> Self {
        Self::new(KNOWN_ACCOUNTS.iter().copied())
    }

    pub fn lookup(&self, account_identifier: &str) -> Option<&str> {
        self.names.get(account_identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct AccountEnricher {
    names: NameTable,
    large_balance_units: BigDecimal,
}

impl AccountEnricher {
    pub fn new(names: NameTable) -> Self {
        Self {
            names,
            large_balance_units: BigDecimal::from(MIN_BALANCE_UNITS),
        }
    }

    /// Build the enriched account for `raw` as seen at `now` (Unix seconds)
    ///
    /// Pure: the same record and `now` always give the same result.
    pub fn enrich(&self, raw: &RawAccount, now: i64) -> Account {
        let balance_units = to_whole_units(&parse_integer(&raw.balance));

        Account {
            active: now.saturating_sub(raw.updated_at) < ACTIVE_WINDOW_SECS,
            large_balance: balance_units > self.large_balance_units,
            name: self
                .names
                .lookup(&raw.account_identifier)
                .map(str::to_string),
            account_identifier: raw.account_identifier.clone(),
            balance: raw.balance.clone(),
            transaction_count: raw.transaction_count.clone(),
            updated_at: raw.updated_at,
        }
    }
}
