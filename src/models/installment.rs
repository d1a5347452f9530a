use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Installment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub total_amount: Decimal,
    pub installment_count: i64,
    pub installment_value: Decimal,
    pub paid_installments: i64,
    pub first_due_date: NaiveDate,
    pub is_split: bool,
    pub split_parts: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Installment {
    pub fn remaining_amount(&self) -> Decimal {
        self.installment_value * Decimal::from(self.installment_count - self.paid_installments)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_installments >= self.installment_count
    }
}

#[derive(Debug, Clone)]
pub struct InstallmentPayment {
    pub id: String,
    pub installment_id: String,
    pub payment_number: i64,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub is_paid: bool,
    pub paid_date: Option<NaiveDate>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct InstallmentParticipant {
    pub id: String,
    pub installment_id: String,
    pub name: String,
    pub parts: i64,
    pub amount_owed: Decimal,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_installment(count: i64, paid: i64, value: &str) -> Installment {
        Installment {
            id: "inst-1".to_string(),
            user_id: "local".to_string(),
            name: "Phone".to_string(),
            total_amount: Decimal::from_str(value).unwrap() * Decimal::from(count),
            installment_count: count,
            installment_value: Decimal::from_str(value).unwrap(),
            paid_installments: paid,
            first_due_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            is_split: false,
            split_parts: 1,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_remaining_amount() {
        let inst = sample_installment(12, 4, "50.00");
        assert_eq!(inst.remaining_amount(), Decimal::from_str("400.00").unwrap());
    }

    #[test]
    fn test_is_settled() {
        assert!(!sample_installment(12, 11, "50.00").is_settled());
        assert!(sample_installment(12, 12, "50.00").is_settled());
    }
}
