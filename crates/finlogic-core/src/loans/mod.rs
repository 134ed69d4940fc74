//! Loan repayment: equal periodic installments (EMI)

pub mod amortization;
