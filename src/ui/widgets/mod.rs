// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod flip_digit;

pub use animated_spinner::AnimatedSpinner;
pub use flip_digit::FlipDigit;
