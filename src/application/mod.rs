// SPDX-License-Identifier: MPL-2.0
//! Application layer - the pick-and-locate use case.
//!
//! - [`port`]: collaborator traits implemented by infrastructure adapters
//! - [`locator`]: the two pick-and-locate strategies
//! - [`retriever`]: screen state the strategies' outcomes are applied to
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives [`locator::AssetLocator`] and renders [`retriever::Retriever`]

pub mod locator;
pub mod port;
pub mod retriever;
