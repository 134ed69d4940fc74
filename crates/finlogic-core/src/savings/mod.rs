//! Savings growth: compound-interest future value and chartable series

pub mod future_value;
pub mod series;
