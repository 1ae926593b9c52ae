pub mod sessions;
pub mod title_bar;
