//! Siteprov - typed provisioning of hosted collaboration sites
//!
//! The `siteprov` library turns a site archetype plus a loose bag of caller
//! supplied parameters into a validated, archetype-specific creation request,
//! and hands that request to a provisioning service that does the actual
//! (possibly long-running) site creation.
//!
//! # Architecture
//!
//! This library follows the Hexagonal Architecture pattern (also known as Ports and Adapters).
//! The dispatcher is isolated from the remote provisioning service, the connection that
//! supplies locale and tokens, and the file system through well-defined interfaces (ports).
//!
//! # Main Components
//!
//! - [`site`] - Archetypes, field groups, the parameter-set resolver and the dispatcher
//! - [`config`] - Application configuration management
//! - [`fs`] - File system abstractions
//! - [`validation`] - Validation types and utilities
//!
//! # Examples
//!
//! ```no_run
//! use siteprov::site::{
//!     SiteArchetype, SiteParameters,
//!     service::{SiteService, SiteServiceImpl, SubmitOptions},
//! };
//! # async fn run<P, C>(service: SiteServiceImpl<P, C>)
//! # where
//! #     P: siteprov::site::port::SiteProvisioner,
//! #     C: siteprov::site::context::ConnectionContext,
//! # {
//! let params = SiteParameters {
//!     title: Some("Contoso News".to_string()),
//!     url: Some("https://contoso.sharepoint.com/sites/news".to_string()),
//!     ..SiteParameters::default()
//! };
//!
//! let outcome = service
//!     .build_and_submit(SiteArchetype::CommunicationSite, &params, SubmitOptions::default())
//!     .await;
//! # }
//! ```

pub mod config;
pub mod fs;
pub mod site;
pub mod validation;
