//! Academic calendar and leave accounting for student leave management.
//!
//! This crate counts working days between two local dates, derives the
//! start date of a student's academic period from their batch and semester,
//! and turns a student's leave and on-duty requests into the number of
//! working days consumed as of a given date.
//!
//! All dates are calendar dates in the institution's local time zone. Nothing
//! here converts through UTC; "today" comes from a [`clock::Clock`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
