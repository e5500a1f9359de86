//! Módulo core - Lógica central do Molde

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod template;
pub mod utils;
