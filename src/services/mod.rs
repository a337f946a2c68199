pub mod links;
pub mod pages;
pub mod slug;
pub mod votes;
pub mod youtube;
