//! Sundial onboarding wizard
//!
//! Three static pages (privacy pledge, data security, browser support)
//! stepped through with Back/Next. [`navigator`] holds the only state; the
//! rest describes and draws the pages.

pub mod app;
pub mod assets;
pub mod commands;
pub mod config;
pub mod context;
pub mod navigator;
pub mod pages;
pub mod view;

pub use commands::{WizardCommands, handle_wizard_command};
