use crate::models::debt::Debt;
use crate::models::expense::Expense;
use crate::models::income::Income;
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashMap;

/// A month selector is a YYYY-MM string with a real month number.
pub fn is_month_key(value: &str) -> bool {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

pub fn month_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn expenses_in_month<'a>(expenses: &'a [Expense], month: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| month_of(e.date) == month)
        .collect()
}

pub fn incomes_in_month<'a>(incomes: &'a [Income], month: &str) -> Vec<&'a Income> {
    incomes
        .iter()
        .filter(|i| month_of(i.date) == month)
        .collect()
}

#[derive(Debug)]
pub struct MonthlyOverview {
    pub month: String,
    pub total_expenses: Decimal,
    pub expense_count: usize,
    pub total_income: Decimal,
    pub income_count: usize,
    pub balance: Decimal,
    pub open_debt: Decimal,
    pub active_debt_count: usize,
}

pub fn monthly_overview(
    expenses: &[Expense],
    incomes: &[Income],
    debts: &[Debt],
    month: &str,
) -> Result<MonthlyOverview, String> {
    if !is_month_key(month) {
        return Err(format!("Invalid month '{}'. Use YYYY-MM", month));
    }

    let month_expenses = expenses_in_month(expenses, month);
    let month_incomes = incomes_in_month(incomes, month);

    let total_expenses: Decimal = month_expenses.iter().map(|e| e.amount).sum();
    let total_income: Decimal = month_incomes.iter().map(|i| i.amount).sum();

    Ok(MonthlyOverview {
        month: month.to_string(),
        total_expenses,
        expense_count: month_expenses.len(),
        total_income,
        income_count: month_incomes.len(),
        balance: total_income - total_expenses,
        open_debt: open_debt(debts),
        active_debt_count: debts.iter().filter(|d| !d.is_paid).count(),
    })
}

/// Unsettled balance across every unpaid debt.
pub fn open_debt(debts: &[Debt]) -> Decimal {
    debts
        .iter()
        .filter(|d| !d.is_paid)
        .map(|d| d.remaining())
        .sum()
}

#[derive(Debug)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
    pub percentage: f64,
}

pub fn expenses_by_category(
    expenses: &[Expense],
    month: &str,
) -> Result<Vec<CategoryBreakdown>, String> {
    if !is_month_key(month) {
        return Err(format!("Invalid month '{}'. Use YYYY-MM", month));
    }

    let month_expenses = expenses_in_month(expenses, month);
    let month_total: Decimal = month_expenses.iter().map(|e| e.amount).sum();

    let mut totals: HashMap<String, (Decimal, usize)> = HashMap::new();
    for expense in &month_expenses {
        let entry = totals
            .entry(expense.category.clone())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, (total, count))| {
            let percentage = if month_total > Decimal::ZERO {
                (total / month_total * Decimal::from(100))
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
            CategoryBreakdown {
                category,
                total,
                count,
                percentage,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(breakdown)
}

#[derive(Debug)]
pub struct IncomeDetail {
    pub total: Decimal,
    pub recurring_total: Decimal,
    pub one_time_total: Decimal,
    pub recurring_count: usize,
    pub one_time_count: usize,
}

pub fn income_detail(incomes: &[Income]) -> IncomeDetail {
    let mut detail = IncomeDetail {
        total: Decimal::ZERO,
        recurring_total: Decimal::ZERO,
        one_time_total: Decimal::ZERO,
        recurring_count: 0,
        one_time_count: 0,
    };

    for income in incomes {
        detail.total += income.amount;
        if income.is_recurring {
            detail.recurring_total += income.amount;
            detail.recurring_count += 1;
        } else {
            detail.one_time_total += income.amount;
            detail.one_time_count += 1;
        }
    }

    detail
}

/// Same split, restricted to incomes dated in the given YYYY-MM month.
pub fn income_detail_for_month(incomes: &[Income], month: &str) -> Result<IncomeDetail, String> {
    if !is_month_key(month) {
        return Err(format!("Invalid month '{}'. Use YYYY-MM", month));
    }

    let month_incomes: Vec<Income> = incomes_in_month(incomes, month)
        .into_iter()
        .cloned()
        .collect();
    Ok(income_detail(&month_incomes))
}

#[derive(Debug)]
pub struct DebtSummary {
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining: Decimal,
    pub active_count: usize,
    pub settled_count: usize,
}

pub fn debt_summary(debts: &[Debt]) -> DebtSummary {
    let total_amount: Decimal = debts.iter().map(|d| d.total_amount).sum();
    let paid_amount: Decimal = debts.iter().map(|d| d.paid_amount).sum();

    DebtSummary {
        total_amount,
        paid_amount,
        remaining: total_amount - paid_amount,
        active_count: debts.iter().filter(|d| !d.is_paid).count(),
        settled_count: debts.iter().filter(|d| d.is_paid).count(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Expense,
    Income,
}

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub kind: FeedKind,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: Option<String>,
}

/// Expenses and incomes interleaved, newest first.
pub fn transaction_feed(expenses: &[Expense], incomes: &[Income]) -> Vec<FeedEntry> {
    let mut feed: Vec<FeedEntry> = Vec::new();

    for expense in expenses {
        feed.push(FeedEntry {
            kind: FeedKind::Expense,
            description: expense.description.clone(),
            amount: expense.amount,
            date: expense.date,
            category: Some(expense.category.clone()),
        });
    }
    for income in incomes {
        feed.push(FeedEntry {
            kind: FeedKind::Income,
            description: income.source.clone(),
            amount: income.amount,
            date: income.date,
            category: None,
        });
    }

    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed
}
