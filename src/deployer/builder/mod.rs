//! Deployment orchestration and coordination.
//!
//! This module provides the main [`Deployer`] orchestrator that turns a staging
//! directory into a launcher copy plus one compressed artifact.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum of the written artifact
//! - [`orchestrator`] - Main [`Deployer`] struct and the deployment steps
//! - [`validation`] - Staging, output directory and launcher checks

mod checksum;
mod orchestrator;
mod validation;

pub use orchestrator::Deployer;
