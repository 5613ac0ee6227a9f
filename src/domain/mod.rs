pub mod errors;
pub mod insight;
pub mod place;
pub mod region;
pub mod slug;
