//! Módulo de comandos do Molde

pub mod init;
