//! Rule registry: single source of truth for translation rules.
//!
//! Maps each route to its table of kind-specific templates plus the route's
//! fallback template. Initialized once behind an `OnceLock`; immutable
//! thereafter, so lookups are lock-free and thread-safe.

use std::sync::OnceLock;

use crate::translator::failure::ErrorKind;
use crate::translator::route::RouteKey;
use crate::translator::strings::FRENCH_MESSAGES;

/// Translation rules for one route.
pub(crate) struct RouteRules {
    /// Kind-specific templates, checked in order
    templates: Vec<(ErrorKind, &'static str)>,

    /// Template for kinds with no specific rule
    fallback: &'static str,
}

impl RouteRules {
    /// Template for a failure of the given kind.
    ///
    /// Falls back to the route's generic template when the kind has no
    /// specific rule, so a known-route failure always yields a message.
    pub(crate) fn template_for(&self, kind: ErrorKind) -> &'static str {
        self.templates
            .iter()
            .find(|(rule_kind, _)| *rule_kind == kind)
            .map(|(_, template)| *template)
            .unwrap_or(self.fallback)
    }
}

/// Global rule registry singleton.
///
/// One field per `RouteKey` variant, so `rules_for` is an exhaustive match
/// and a route without rules cannot exist.
pub(crate) struct RuleRegistry {
    register: RouteRules,
    order: RouteRules,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();

impl RuleRegistry {
    /// Get the global rule registry instance.
    pub(crate) fn get() -> &'static RuleRegistry {
        REGISTRY.get_or_init(default_registry)
    }

    /// Rules for a route. Total over `RouteKey`; cannot fail.
    pub(crate) fn rules_for(&self, route: RouteKey) -> &RouteRules {
        match route {
            RouteKey::Register => &self.register,
            RouteKey::Order => &self.order,
        }
    }
}

/// Default rule set, one `RouteRules` per `RouteKey` variant.
fn default_registry() -> RuleRegistry {
    let catalog = &FRENCH_MESSAGES;
    RuleRegistry {
        register: RouteRules {
            templates: vec![
                (ErrorKind::MissingRequired, catalog.register_missing_required),
                (ErrorKind::StringTooShort, catalog.register_string_too_short),
                (ErrorKind::InvalidEmail, catalog.register_invalid_email),
            ],
            fallback: catalog.register_fallback,
        },
        order: RouteRules {
            templates: vec![
                (ErrorKind::MissingRequired, catalog.order_missing_required),
                (ErrorKind::WrongTypeInteger, catalog.order_wrong_type_integer),
                (ErrorKind::BelowMinimum, catalog.order_below_minimum),
            ],
            fallback: catalog.order_fallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = RuleRegistry::get();
        let registry2 = RuleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_route_has_usable_rules() {
        let registry = RuleRegistry::get();
        for route in [RouteKey::Register, RouteKey::Order] {
            let rules = registry.rules_for(route);
            assert!(rules.template_for(ErrorKind::Other).contains("{field}"));
        }
    }

    // ==================== /register/ Rules ====================

    #[test]
    fn test_register_kind_specific_templates() {
        let rules = RuleRegistry::get().rules_for(RouteKey::Register);

        assert_eq!(
            rules.template_for(ErrorKind::MissingRequired),
            "Le champ {field} est requis."
        );
        assert_eq!(
            rules.template_for(ErrorKind::StringTooShort),
            "Le champ {field} doit contenir au moins {limit_value} caractères."
        );
        assert_eq!(
            rules.template_for(ErrorKind::InvalidEmail),
            "Le champ {field} doit être une adresse email valide."
        );
    }

    #[test]
    fn test_register_fallback_for_unruled_kinds() {
        let rules = RuleRegistry::get().rules_for(RouteKey::Register);

        // Kinds the register route has no rule for
        assert_eq!(
            rules.template_for(ErrorKind::BelowMinimum),
            "Erreur sur le champ {field}."
        );
        assert_eq!(
            rules.template_for(ErrorKind::Other),
            "Erreur sur le champ {field}."
        );
    }

    // ==================== /order/ Rules ====================

    #[test]
    fn test_order_kind_specific_templates() {
        let rules = RuleRegistry::get().rules_for(RouteKey::Order);

        assert_eq!(
            rules.template_for(ErrorKind::MissingRequired),
            "Le champ {field} de la commande est requis."
        );
        assert_eq!(
            rules.template_for(ErrorKind::WrongTypeInteger),
            "Le champ {field} doit être un nombre entier."
        );
        assert_eq!(
            rules.template_for(ErrorKind::BelowMinimum),
            "Le champ {field} doit être supérieur ou égal à {limit_value}."
        );
    }

    #[test]
    fn test_order_fallback_for_unruled_kinds() {
        let rules = RuleRegistry::get().rules_for(RouteKey::Order);

        assert_eq!(
            rules.template_for(ErrorKind::InvalidEmail),
            "Erreur dans la commande sur le champ {field}."
        );
        assert_eq!(
            rules.template_for(ErrorKind::Other),
            "Erreur dans la commande sur le champ {field}."
        );
    }
}
