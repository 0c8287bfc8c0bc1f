//! Plan AI - İSG kroki analizi CLI kütüphanesi

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
