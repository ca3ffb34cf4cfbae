pub mod export;
pub mod plots;
pub mod viewdata;
pub mod windows;
