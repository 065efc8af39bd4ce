pub mod feed;
pub mod imagery;
