//! Form-input validation helpers
//!
//! Deliberately permissive, matching what the login and registration pages
//! enforce before a request goes out.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// `local@domain.tld` shape: no whitespace, exactly one `@`, at least one
/// `.` after it
pub fn validar_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Minimum length only, no charset constraints
pub fn validar_senha(senha: &str) -> bool {
    senha.chars().count() >= 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_validos() {
        assert!(validar_email("a@b.co"));
        assert!(validar_email("maria.souza@exemplo.com.br"));
        assert!(validar_email("x+tag@sub.dominio.io"));
    }

    #[test]
    fn emails_invalidos() {
        assert!(!validar_email("a@b"));
        assert!(!validar_email("a b@c.co"));
        assert!(!validar_email("a@@b.co"));
        assert!(!validar_email("@b.co"));
        assert!(!validar_email("a@b."));
        assert!(!validar_email(""));
    }

    #[test]
    fn senha_minimo_seis() {
        assert!(!validar_senha("12345"));
        assert!(validar_senha("123456"));
        assert!(validar_senha("uma senha longa"));
        // multi-byte characters count as characters, not bytes
        assert!(validar_senha("coraçã"));
    }
}
