//! Flutter-facing bridge for SpinalSense core.

pub mod api;
