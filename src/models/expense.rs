use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub is_split: bool,
    pub split_parts: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct ExpenseParticipant {
    pub id: String,
    pub expense_id: String,
    pub name: String,
    pub parts: i64,
    pub amount_owed: Decimal,
    pub is_paid: bool,
    pub created_at: String,
}
