//! healops - Kubernetes diagnostics and LLM chat proxy

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod llm;
pub mod output;
pub mod web;
