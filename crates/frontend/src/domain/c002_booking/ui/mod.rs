pub mod details;

pub use details::BookingDetails;
