pub mod invoice;

pub static ACCOUNTING_TAG: &str = "accounting";
