//! Domain types for the budget record store.

pub mod book;
pub mod budget_line;
pub mod period;

pub use book::BudgetBook;
pub use budget_line::BudgetLine;
pub use period::Period;
