pub mod category;
pub mod debt;
pub mod expense;
pub mod income;
pub mod installment;
