use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryAmount {
    /// ISO 4217 currency code.
    pub currency: String,
    pub minor_units: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionDirection {
    #[serde(rename = "OUT")]
    Outgoing,
    #[serde(rename = "IN")]
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Settled,
    Pending,
    Declined,
}

/// One feed item of an account category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "feedItemUid")]
    pub id: String,
    pub amount: MonetaryAmount,
    pub direction: TransactionDirection,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_settled_outgoing(&self) -> bool {
        self.direction == TransactionDirection::Outgoing
            && self.status == TransactionStatus::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn feed_item(direction: &str, status: &str) -> String {
        format!(
            r#"{{
                "feedItemUid": "item-1",
                "amount": {{ "currency": "GBP", "minorUnits": 595 }},
                "direction": "{direction}",
                "status": "{status}"
            }}"#
        )
    }

    #[rstest]
    #[case::out_settled("OUT", "SETTLED", TransactionDirection::Outgoing, TransactionStatus::Settled)]
    #[case::in_pending("IN", "PENDING", TransactionDirection::Incoming, TransactionStatus::Pending)]
    #[case::out_declined("OUT", "DECLINED", TransactionDirection::Outgoing, TransactionStatus::Declined)]
    fn test_decode_tokens(
        #[case] direction: &str,
        #[case] status: &str,
        #[case] expected_direction: TransactionDirection,
        #[case] expected_status: TransactionStatus,
    ) {
        let tx: Transaction = serde_json::from_str(&feed_item(direction, status)).unwrap();

        assert_eq!(tx.id, "item-1");
        assert_eq!(tx.amount.minor_units, 595);
        assert_eq!(tx.direction, expected_direction);
        assert_eq!(tx.status, expected_status);
    }

    #[rstest]
    #[case::unknown_direction("SIDEWAYS", "SETTLED")]
    #[case::lowercase_direction("out", "SETTLED")]
    #[case::unknown_status("OUT", "REVERSED")]
    #[case::long_form_direction("OUTGOING", "SETTLED")]
    fn test_unrecognized_tokens_are_rejected(#[case] direction: &str, #[case] status: &str) {
        assert!(serde_json::from_str::<Transaction>(&feed_item(direction, status)).is_err());
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let json = r#"{
            "feedItemUid": "item-1",
            "amount": { "currency": "GBP", "minorUnits": 120 },
            "direction": "OUT"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_negative_minor_units_are_rejected() {
        let json = r#"{
            "feedItemUid": "item-1",
            "amount": { "currency": "GBP", "minorUnits": -120 },
            "direction": "OUT",
            "status": "SETTLED"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_fractional_minor_units_are_rejected() {
        let json = r#"{
            "feedItemUid": "item-1",
            "amount": { "currency": "GBP", "minorUnits": 1.5 },
            "direction": "OUT",
            "status": "SETTLED"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_transaction_round_trip() {
        let tx = Transaction {
            id: "item-7".to_string(),
            amount: MonetaryAmount {
                currency: "EUR".to_string(),
                minor_units: 1999,
            },
            direction: TransactionDirection::Incoming,
            status: TransactionStatus::Pending,
        };

        let encoded = serde_json::to_value(&tx).unwrap();
        assert_eq!(encoded["feedItemUid"], "item-7");
        assert_eq!(encoded["direction"], "IN");
        assert_eq!(encoded["status"], "PENDING");
        assert_eq!(encoded["amount"]["minorUnits"], 1999);

        let decoded: Transaction = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_is_settled_outgoing() {
        let mut tx: Transaction = serde_json::from_str(&feed_item("OUT", "SETTLED")).unwrap();
        assert!(tx.is_settled_outgoing());

        tx.status = TransactionStatus::Pending;
        assert!(!tx.is_settled_outgoing());

        tx.status = TransactionStatus::Settled;
        tx.direction = TransactionDirection::Incoming;
        assert!(!tx.is_settled_outgoing());
    }
}
