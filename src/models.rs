// ABOUTME: Customer data models re-exported from customer-core
// ABOUTME: Keeps the stored record type in the foundation crate for faster incremental builds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub use customer_core::models::*;
