//! Salary simulator for Portuguese payroll
//!
//! This crate computes monthly IRS withholding, social security and net
//! salary from the official withholding tables, and inverts that calculation
//! to find the employer cost that delivers a target net salary across a
//! sweep of flexible-benefit percentages.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
mod simulator;

pub use simulator::Simulator;
