//! Workspace root package. It exists to install repository git hooks through
//! `rusty-hook`; the search library and CLI live under `crates/`.
