//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs provided to the component tree as
//! `RwSignal` contexts rather than module-level globals, so the gate
//! logic stays testable without a browser and screens receive the
//! session explicitly.

pub mod auth;
