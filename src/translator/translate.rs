//! The translation entry point.
//!
//! Pure, stateless, synchronous: every call depends only on its two inputs
//! and touches no shared mutable state, so it can run from inside an async
//! request handler without blocking or yielding.

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use crate::translator::failure::ValidationFailure;
use crate::translator::registry::RuleRegistry;
use crate::translator::route::RouteKey;
use crate::translator::strings::FRENCH_MESSAGES;
use crate::translator::template::{context_value_to_string, render, MISSING_VALUE_SENTINEL};

/// What to do with failures on a route that has no translation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRoutePolicy {
    /// Produce no messages at all: the client gets an empty 422 array, which
    /// it cannot tell apart from "no errors". This is the API's current
    /// behavior and therefore the default.
    #[default]
    NoMessages,

    /// Produce one generic message per failure, symmetric with the per-route
    /// fallback. Opt-in.
    GlobalFallback,
}

/// Translates validation failures into localized messages.
///
/// `Default` gives the production configuration: unknown routes yield no
/// messages and absent context values render as `?`.
#[derive(Debug, Clone)]
pub struct Translator {
    unknown_route_policy: UnknownRoutePolicy,
    missing_value_sentinel: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            unknown_route_policy: UnknownRoutePolicy::default(),
            missing_value_sentinel: MISSING_VALUE_SENTINEL.to_string(),
        }
    }
}

impl Translator {
    /// Create a translator with an explicit unknown-route policy.
    pub fn new(unknown_route_policy: UnknownRoutePolicy) -> Self {
        Self {
            unknown_route_policy,
            ..Self::default()
        }
    }

    /// Override the text substituted for absent context values.
    pub fn with_missing_value_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.missing_value_sentinel = sentinel.into();
        self
    }

    /// Translate one request's validation failures.
    ///
    /// For a recognized route, produces exactly one message per failure, in
    /// input order: the kind-specific template when the route has one, the
    /// route's fallback otherwise. For an unrecognized route the configured
    /// [`UnknownRoutePolicy`] applies.
    ///
    /// This function never fails; malformed records degrade to sentinel
    /// substitutions, not errors.
    ///
    /// # Arguments
    /// * `path` - The request path, matched exactly against the known routes
    /// * `failures` - The failures the validation engine reported, in order
    pub fn translate(&self, path: &str, failures: &[ValidationFailure]) -> TranslatedErrors {
        let messages: Vec<String> = match RouteKey::from_path(path) {
            Ok(route) => {
                let rules = RuleRegistry::get().rules_for(route);
                failures
                    .iter()
                    .map(|failure| self.render_failure(rules.template_for(failure.kind), failure))
                    .collect()
            }
            Err(err) => match self.unknown_route_policy {
                UnknownRoutePolicy::NoMessages => {
                    if !failures.is_empty() {
                        warn!(
                            %err,
                            dropped = failures.len(),
                            "no messages produced for route without translation rules"
                        );
                    }
                    Vec::new()
                }
                UnknownRoutePolicy::GlobalFallback => {
                    warn!(%err, "applying global fallback messages");
                    failures
                        .iter()
                        .map(|failure| {
                            self.render_failure(FRENCH_MESSAGES.global_fallback, failure)
                        })
                        .collect()
                }
            },
        };

        debug!(
            path,
            failures = failures.len(),
            messages = messages.len(),
            "translated validation failures"
        );

        TranslatedErrors { messages }
    }

    /// Render one failure through a template.
    ///
    /// `{field}` resolves to the last path segment; every other placeholder
    /// to the failure's context. Absent values (including an empty field
    /// path) render as the sentinel.
    fn render_failure(&self, template: &str, failure: &ValidationFailure) -> String {
        let mut vars: HashMap<String, String> = failure
            .context
            .iter()
            .map(|(name, value)| (name.clone(), context_value_to_string(value)))
            .collect();
        if let Some(field) = failure.field() {
            vars.insert("field".to_string(), field);
        }

        render(template, &vars, &self.missing_value_sentinel)
    }
}

/// Translate with the default [`Translator`] configuration.
pub fn translate(path: &str, failures: &[ValidationFailure]) -> TranslatedErrors {
    Translator::default().translate(path, failures)
}

/// The translated messages for one request, always served with status 422.
///
/// Serializes as a bare JSON array of strings — no envelope object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslatedErrors {
    pub(crate) messages: Vec<String>,
}

impl TranslatedErrors {
    /// The response status. This component only runs on validation failure,
    /// so the status is fixed at 422 Unprocessable Entity.
    pub fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    /// The localized messages, one per translated failure, in input order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume into the message list.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no messages were produced.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
