//! UI components.

pub mod system_flow;
