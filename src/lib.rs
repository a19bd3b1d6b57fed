#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # FRED Core
//!
//! Rust core for the FRED fleet/equipment rental administration system.
//!
//! ## Overview
//!
//! FRED tracks equipment rental requests, purchase orders (POs), and the
//! links between them. This crate owns the one subsystem with real design
//! content: the **purchase order status workflow engine** — a finite state
//! machine over PO statuses with cross-entity business-rule gates and
//! UI guidance queries. Everything around it (pages, dashboards, uploads,
//! notifications) lives in the surrounding application and stays out of
//! this crate.
//!
//! ## Module Organization
//!
//! - [`models`] - Purchase order, rental, and rental/PO link data layer
//! - [`state_machine`] - The PO status workflow engine
//! - [`constants`] - Status groupings and system constants
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fred_core::config::FredConfig;
//! use fred_core::state_machine::{PgWorkflowStore, PoStateMachine, PoStatus};
//!
//! # tokio_test::block_on(async {
//! let config = FredConfig::from_env().unwrap();
//! let pool = config.connect().await.unwrap();
//!
//! let machine = PoStateMachine::new(42, PgWorkflowStore::new(pool));
//! let po = machine.apply_status_change(PoStatus::Open, "jsmith").await.unwrap();
//! println!("PO {} is now {:?}", po.po_id, po.status);
//! # });
//! ```
//!
//! The validators are authoritative; the guidance queries in
//! [`state_machine::guidance`] are advisory hints for the presentation
//! layer and must never replace validation.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod state_machine;

pub use config::FredConfig;
pub use error::{FredError, Result};
pub use models::{NewPurchaseOrder, NewRental, PurchaseOrder, Rental, RentalPoLink};
pub use state_machine::{
    allowed_next_statuses, allowed_transitions, validate_transition, workflow_info,
    BusinessRuleError, PgWorkflowStore, PoStateMachine, PoStatus, RentalStatus, StoreError,
    TransitionError, WorkflowError, WorkflowInfo, WorkflowStore,
};
