use crate::model::{Account, Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsPage {
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsPage {
    #[serde(rename = "feedItems")]
    pub items: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TransactionDirection, TransactionStatus};

    #[test]
    fn test_decode_feed_page() {
        let json = r#"{
            "feedItems": [
                {
                    "feedItemUid": "a",
                    "categoryUid": "cat-1",
                    "amount": { "currency": "GBP", "minorUnits": 120 },
                    "sourceAmount": { "currency": "GBP", "minorUnits": 120 },
                    "direction": "OUT",
                    "status": "SETTLED",
                    "counterPartyName": "Coffee"
                },
                {
                    "feedItemUid": "b",
                    "amount": { "currency": "GBP", "minorUnits": 5000 },
                    "direction": "IN",
                    "status": "PENDING"
                }
            ]
        }"#;

        let page: TransactionsPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "a");
        assert_eq!(page.items[1].direction, TransactionDirection::Incoming);
        assert_eq!(page.items[1].status, TransactionStatus::Pending);
    }

    #[test]
    fn test_missing_envelope_field_is_rejected() {
        assert!(serde_json::from_str::<TransactionsPage>(r#"{"items": []}"#).is_err());
        assert!(serde_json::from_str::<AccountsPage>(r#"{}"#).is_err());
    }

    #[test]
    fn test_one_bad_item_fails_the_whole_page() {
        let json = r#"{
            "feedItems": [
                {
                    "feedItemUid": "a",
                    "amount": { "currency": "GBP", "minorUnits": 120 },
                    "direction": "OUT",
                    "status": "SETTLED"
                },
                {
                    "feedItemUid": "b",
                    "amount": { "currency": "GBP", "minorUnits": 5000 },
                    "direction": "OUT"
                }
            ]
        }"#;

        assert!(serde_json::from_str::<TransactionsPage>(json).is_err());
    }
}
