// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`screens::home`] - Hero, live countdown, and highlight cards
//! - [`screens::agenda`] - Two-day programme
//! - [`screens::sponsors`] - Sponsor roster grouped by tier
//! - [`screens::contact`] - Venue and contact details
//! - [`screens::registration`] - Registration lookup and confirmation
//! - [`screens::admin`] - Credential gate and attendee tools
//!
//! # Shared Infrastructure
//!
//! - [`card`] - Card primitive with entrance transition
//! - [`countdown_display`] - Live countdown component
//! - [`widgets`] - Custom Iced widgets (spinner, flip digits)
//! - [`styles`] - Centralized styling (buttons, cards, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Screen navigation and theme toggle
//! - [`notifications`] - Toast notification system for user feedback

pub mod card;
pub mod countdown_display;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod screens;
pub mod styles;
pub mod theming;
pub mod widgets;

pub use card::Card;
