// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary
//! - Message arguments (`{ $details }`) via [`fluent::I18n::tr_with_args`]
//! - `MISSING: <key>` marker when a translation is absent

pub mod fluent;
