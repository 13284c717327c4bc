use serde::Serialize;
use std::collections::BTreeMap;

use super::enrich::Account;

/// Accounts keyed by identifier, serialized in identifier order
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ResultSet {
    accounts: BTreeMap<String, Account>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every account in order; a repeated identifier replaces the whole
    /// earlier record (last write wins, no field-wise merge)
    pub fn merge<I>(&mut self, accounts: I)
    where
        I: IntoIterator<Item = Account>,
    {
        for account in accounts {
            self.accounts
                .insert(account.account_identifier.clone(), account);
        }
    }

    pub fn get(&self, account_identifier: &str) -> Option<&Account> {
        self.accounts.get(account_identifier)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, name: Option<&str>, balance: &str) -> Account {
        Account {
            active: true,
            large_balance: false,
            name: name.map(str::to_string),
            account_identifier: id.to_string(),
            balance: balance.to_string(),
            transaction_count: "20000".to_string(),
            updated_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_later_scan_replaces_whole_record() {
        let mut set = ResultSet::new();
        set.merge(vec![account("x", Some("Foo"), "100")]);

        let mut replacement = account("x", Some("Bar"), "999");
        replacement.active = false;
        set.merge(vec![replacement.clone()]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("x"), Some(&replacement));
        assert_eq!(set.get("x").unwrap().name.as_deref(), Some("Bar"));
    }

    #[test]
    fn test_replacement_drops_earlier_name() {
        let mut set = ResultSet::new();
        set.merge(vec![account("x", Some("Foo"), "100")]);
        set.merge(vec![account("x", None, "100")]);

        assert_eq!(set.get("x").unwrap().name, None);
    }

    #[test]
    fn test_merge_deduplicates_within_one_scan() {
        let mut set = ResultSet::new();
        set.merge(vec![
            account("a", None, "1"),
            account("b", None, "2"),
            account("a", None, "3"),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").unwrap().balance, "3");
    }

    #[test]
    fn test_iterates_in_identifier_order() {
        let mut set = ResultSet::new();
        set.merge(vec![
            account("c", None, "1"),
            account("a", None, "1"),
            account("b", None, "1"),
        ]);

        let ids: Vec<&str> = set.iter().map(|a| a.account_identifier.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_merge() {
        let mut set = ResultSet::new();
        set.merge(Vec::new());
        assert!(set.is_empty());
    }
}
