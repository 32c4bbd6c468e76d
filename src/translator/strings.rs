//! Centralized localized message templates.
//!
//! Templates use `{name}` placeholders filled by the template renderer:
//! `{field}` receives the offending field's name, every other placeholder is
//! looked up in the failure's context map. The API currently speaks one
//! hardcoded language (French); a second catalog would be a second const.

/// All localized message templates for one language.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    // ==================== /register/ ====================
    /// Required field absent on registration.
    /// Placeholders: {field}
    pub register_missing_required: &'static str,

    /// String below minimum length on registration.
    /// Placeholders: {field}, {limit_value}
    pub register_string_too_short: &'static str,

    /// Malformed email address on registration.
    /// Placeholders: {field}
    pub register_invalid_email: &'static str,

    /// Fallback for any other failure on registration.
    /// Placeholders: {field}
    pub register_fallback: &'static str,

    // ==================== /order/ ====================
    /// Required field absent on an order.
    /// Placeholders: {field}
    pub order_missing_required: &'static str,

    /// Non-integer value where an integer is required.
    /// Placeholders: {field}
    pub order_wrong_type_integer: &'static str,

    /// Number below the schema minimum on an order.
    /// Placeholders: {field}, {limit_value}
    pub order_below_minimum: &'static str,

    /// Fallback for any other failure on an order.
    /// Placeholders: {field}
    pub order_fallback: &'static str,

    // ==================== Cross-route ====================
    /// Generic message for failures on routes without rules, used only under
    /// the opt-in global-fallback policy.
    /// Placeholders: {field}
    pub global_fallback: &'static str,
}

/// French message catalog (the one language the API serves).
pub const FRENCH_MESSAGES: MessageCatalog = MessageCatalog {
    // /register/
    register_missing_required: "Le champ {field} est requis.",
    register_string_too_short: "Le champ {field} doit contenir au moins {limit_value} caractères.",
    register_invalid_email: "Le champ {field} doit être une adresse email valide.",
    register_fallback: "Erreur sur le champ {field}.",

    // /order/
    order_missing_required: "Le champ {field} de la commande est requis.",
    order_wrong_type_integer: "Le champ {field} doit être un nombre entier.",
    order_below_minimum: "Le champ {field} doit être supérieur ou égal à {limit_value}.",
    order_fallback: "Erreur dans la commande sur le champ {field}.",

    // Cross-route
    global_fallback: "Erreur de validation sur le champ {field}.",
};
