// SPDX-License-Identifier: MPL-2.0
//! One module per screen. Screens own their local state and emit events;
//! the application decides what those events do.

pub mod admin;
pub mod agenda;
pub mod contact;
pub mod home;
pub mod registration;
pub mod sponsors;
