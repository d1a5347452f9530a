use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub is_recurring: bool,
    pub created_at: String,
    pub updated_at: String,
}
