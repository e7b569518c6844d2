pub mod cache;
pub mod catalog;
pub mod launcher;
pub mod refresh;
pub mod url;
