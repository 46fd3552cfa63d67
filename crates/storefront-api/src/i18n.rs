//! Localized error messages.
//!
//! A small embedded catalog; full message-catalog loading lives with an
//! external collaborator. Locale is negotiated from `Accept-Language` and
//! affects only response text, never decision logic.

use storefront_core::error::ErrorKind;

/// Supported response locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Negotiates a locale from an `Accept-Language` header value.
    ///
    /// The first supported primary tag wins; anything else falls back to
    /// English.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(value) = header else {
            return Self::En;
        };

        for part in value.split(',') {
            let tag = part.split(';').next().unwrap_or("").trim().to_lowercase();
            if tag.starts_with("fr") {
                return Self::Fr;
            }
            if tag.starts_with("en") || tag == "*" {
                return Self::En;
            }
        }
        Self::En
    }
}

/// Localized generic title for an error kind.
pub fn error_title(kind: ErrorKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (ErrorKind::Authentication | ErrorKind::Authorization, Locale::En) => "Access denied",
        (ErrorKind::Authentication | ErrorKind::Authorization, Locale::Fr) => "Accès refusé",
        (ErrorKind::Validation | ErrorKind::Conflict, Locale::En) => "Invalid request",
        (ErrorKind::Validation | ErrorKind::Conflict, Locale::Fr) => "Requête invalide",
        (ErrorKind::NotFound, Locale::En) => "Not found",
        (ErrorKind::NotFound, Locale::Fr) => "Introuvable",
        (_, Locale::En) => "Internal server error",
        (_, Locale::Fr) => "Erreur interne du serveur",
    }
}

/// Generic message for forbidden responses. Never names the required role.
pub fn forbidden_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "You are not permitted to perform this operation",
        Locale::Fr => "Vous n'êtes pas autorisé à effectuer cette opération",
    }
}

/// Message for requests to protected routes without credentials.
pub fn authentication_required_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Authentication is required to access this resource",
        Locale::Fr => "Une authentification est requise pour accéder à cette ressource",
    }
}

/// Message for protected-route requests carrying an expired token.
pub fn token_expired_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Authentication token has expired",
        Locale::Fr => "Le jeton d'authentification a expiré",
    }
}

/// Message for protected-route requests carrying an unusable token.
pub fn token_invalid_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Authentication token is invalid",
        Locale::Fr => "Le jeton d'authentification est invalide",
    }
}

/// Message for failed login attempts. Identical for unknown email and
/// wrong password.
pub fn bad_credentials_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Invalid email or password",
        Locale::Fr => "Email ou mot de passe invalide",
    }
}

/// Message for signup attempts with an email that is already registered.
pub fn duplicate_email_message(locale: Locale, email: &str) -> String {
    match locale {
        Locale::En => format!("Email '{email}' is already registered"),
        Locale::Fr => format!("L'email '{email}' est déjà enregistré"),
    }
}
