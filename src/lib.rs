//! Translate structured request-validation failures into localized,
//! route-specific error messages.
//!
//! The validation engine and the HTTP router live elsewhere; this crate sits
//! between them. It receives the failures the engine reported for a request,
//! plus the request path, and produces the French messages the API returns
//! with a 422 status.
//!
//! # Example
//!
//! ```
//! use validation_translator::{translate, ErrorKind, ValidationFailure};
//!
//! let failures = vec![ValidationFailure::new(
//!     ["body", "email"],
//!     ErrorKind::MissingRequired,
//! )];
//!
//! let translated = translate("/register/", &failures);
//! assert_eq!(translated.messages(), ["Le champ email est requis."]);
//! assert_eq!(translated.status().as_u16(), 422);
//! ```

pub mod translator;

pub use translator::{
    translate, ErrorKind, PathSegment, RouteKey, TranslatedErrors, Translator, UnknownRoute,
    UnknownRoutePolicy, ValidationFailure,
};
