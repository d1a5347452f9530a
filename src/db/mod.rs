pub mod category_repository;
pub mod connection;
pub mod debt_repository;
pub mod expense_repository;
pub mod income_repository;
pub mod installment_repository;
