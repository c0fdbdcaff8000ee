//! Severance Engine for Colombian statutory liquidación
//!
//! This crate computes the accrued primas, cesantías, intereses sobre
//! cesantías and vacaciones owed at the end of an employment period, using
//! the 360-day commercial year, and reconciles them against amounts already
//! paid. An HTTP API exposes both operations as JSON.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
