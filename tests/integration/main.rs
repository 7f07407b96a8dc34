//! Integration tests for VALUEDECK.

mod dashboard_flow;
mod properties;
