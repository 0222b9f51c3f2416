//! Workspace-level integration tests. See `portal_flows.rs`.
