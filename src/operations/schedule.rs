use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct ScheduledPayment {
    pub payment_number: i64,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

/// Generates the monthly due dates for an installment plan. Each due date is
/// first_due plus i calendar months, so a Jan 31 start lands on Feb 28 (chrono
/// clamps to the end of shorter months).
pub fn payment_schedule(
    first_due: NaiveDate,
    count: i64,
    value: Decimal,
) -> Result<Vec<ScheduledPayment>, String> {
    if count < 1 {
        return Err("Installment count must be at least 1".to_string());
    }

    let mut payments = Vec::new();
    for i in 0..count {
        let due_date = first_due
            .checked_add_months(Months::new(i as u32))
            .ok_or_else(|| format!("Due date out of range for installment {}", i + 1))?;
        payments.push(ScheduledPayment {
            payment_number: i + 1,
            amount: value,
            due_date,
        });
    }

    Ok(payments)
}
