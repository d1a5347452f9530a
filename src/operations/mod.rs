pub mod categories;
pub mod debts;
pub mod expenses;
pub mod import;
pub mod incomes;
pub mod installments;
pub mod schedule;
pub mod split;
pub mod summary;
