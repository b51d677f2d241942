pub mod c001_customer;
pub mod c003_rate_record;
