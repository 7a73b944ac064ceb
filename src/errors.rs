// ABOUTME: Structured error types re-exported from customer-core
// ABOUTME: Single import point for AppError, AppResult, and ErrorCode inside the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub use customer_core::errors::*;
