pub mod page;
pub mod review;
