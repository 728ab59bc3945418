//! Mutable build state for AquaBuild.
//!
//! The engine in `aquabuild-logic` is a pure function of an immutable
//! snapshot; this crate owns the mutable [`store::BuildStore`] around it.
//! Every mutation (tank, livestock, plants, equipment, substrate)
//! re-evaluates the build and refreshes the cached warnings, stocking
//! level, target parameters, and total cost, so consumers always read a
//! consistent snapshot. The store never mutates catalog entities.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`store`] | The build store: mutations plus automatic re-evaluation |
//! | [`probe`] | "Would this candidate item break compatibility" check |
//! | [`catalog`] | Built-in sample catalog for demos and the harness |

pub mod catalog;
pub mod probe;
pub mod store;
