use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Clone)]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub due_date: Option<NaiveDate>,
    pub is_split: bool,
    pub split_parts: i64,
    pub is_paid: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Debt {
    pub fn remaining(&self) -> Decimal {
        self.total_amount - self.paid_amount
    }

    // paid/total as a 0-100 percentage for the progress display
    pub fn progress_percent(&self) -> f64 {
        if self.total_amount <= Decimal::ZERO {
            return 0.0;
        }
        (self.paid_amount / self.total_amount * Decimal::from(100))
            .to_f64()
            .unwrap_or(0.0)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.is_paid && due < today,
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DebtParticipant {
    pub id: String,
    pub debt_id: String,
    pub name: String,
    pub parts: i64,
    pub amount_owed: Decimal,
    pub is_paid: bool,
    pub created_at: String,
}
