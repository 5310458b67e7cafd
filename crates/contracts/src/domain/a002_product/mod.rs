pub mod aggregate;

pub use aggregate::{parse_contract_date, Product, ProductId};
