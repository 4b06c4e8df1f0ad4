//! oly-skin adapters - external adapters for oly-skin.
//!
//! This crate provides adapters for:
//! - Filesystem photo source
//! - JSON Lines skin diary

pub mod diary;
pub mod fs;

pub use diary::{default_diary_path, JsonlDiary};
pub use fs::{read_photo, FsImageSource};
