pub mod c001_customer;
pub mod c002_booking;
pub mod c003_rate_record;
