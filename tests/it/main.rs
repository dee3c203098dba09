//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Canvas builder, gesture helpers and fixtures
//! - integration: Multi-component workflow tests driven through input events
//! - unit: Single-component tests against the public API

mod unit;
