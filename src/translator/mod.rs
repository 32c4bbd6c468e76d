//! Error translator: per-route, per-kind translation of validation failures.
//!
//! This module contains everything needed to turn the raw failure records
//! produced by the validation engine into the localized messages served to
//! API clients.
//!
//! # Architecture
//!
//! - `failure`: The failure record handed over by the validation engine
//! - `route`: Dispatch key for the routes that have translation rules
//! - `strings`: Centralized localized message templates (French)
//! - `template`: Placeholder rendering with a sentinel for absent values
//! - `registry`: Single source of truth mapping routes and error kinds to templates
//! - `translate`: The translation entry point and its response type
//! - `response`: HTTP response integration (422 + JSON array body)
//!
//! # Example
//!
//! ```rust,ignore
//! use validation_translator::{Translator, ValidationFailure};
//!
//! let translator = Translator::default();
//! let translated = translator.translate("/order/", &failures);
//! ```

mod failure;
mod registry;
mod response;
mod route;
mod strings;
mod template;
mod translate;

pub use failure::{ErrorKind, PathSegment, ValidationFailure};
pub use route::{RouteKey, UnknownRoute};
pub use translate::{translate, TranslatedErrors, Translator, UnknownRoutePolicy};
