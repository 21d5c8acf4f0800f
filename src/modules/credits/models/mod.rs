pub mod tax_credit;

pub use tax_credit::{
    CreateCreditRequest, CreditStatus, CreditSummary, CreditType, TaxCredit,
    UpdateCreditRequest,
};
