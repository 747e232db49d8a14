//! API Routes
//!
//! Route handlers organized by page.

pub mod forums;
pub mod health;
pub mod journal;
pub mod resources;
pub mod site;
pub mod tracker;
