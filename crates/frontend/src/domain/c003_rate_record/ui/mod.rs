pub mod list;

pub use list::RateRecordList;
