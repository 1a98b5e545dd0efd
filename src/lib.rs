// SPDX-License-Identifier: MPL-2.0
//! `medconf` is the companion app for the MedConf pharmaceutical summit,
//! built with the Iced GUI framework.
//!
//! It shows the programme, the sponsor roster, and a live countdown to the
//! opening, and lets attendees look their registration up against the
//! conference backend. It demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/medconf/1.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod countdown;
pub mod error;
pub mod i18n;
pub mod registration;
pub mod ui;
