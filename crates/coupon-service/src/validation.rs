//! Request validation.
//!
//! Structural checks that run before a request reaches the issuance engine.
//! Presence of the email is left to the engine so that a blank email is
//! always reported as `EmptyEmail`, never as `InvalidEmail`.

use coupon_core::CouponError;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Characters allowed in the local part besides ASCII alphanumerics.
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Check that `email` is a structurally valid address.
///
/// Blank input passes, since it is rejected by the engine with a more precise
/// error.
///
/// # Errors
///
/// Returns `CouponError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), CouponError> {
    if email.trim().is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(CouponError::InvalidEmail)
    }
}

/// Whether `email` has the shape `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| is_valid_label(label))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "a@x.com",
            "jimin.joo@example.com",
            "first+tag@sub.domain.co.kr",
            "o'brien@mail-server.org",
            "x_y-z@a1.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plainaddress",
            "@x.com",
            "a@",
            "a@@x.com",
            "a@x",
            "a@.x.com",
            "a@x..com",
            "a@-x.com",
            "a@x-.com",
            ".a@x.com",
            "a.@x.com",
            "a..b@x.com",
            "a b@x.com",
            "a@x .com",
            "a(b)@x.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn rejects_overlong_addresses() {
        let local = "a".repeat(MAX_LOCAL_LEN + 1);
        assert!(!is_valid_email(&format!("{local}@x.com")));

        let label = "b".repeat(MAX_LABEL_LEN + 1);
        assert!(!is_valid_email(&format!("a@{label}.com")));
    }

    #[test]
    fn blank_is_left_to_the_engine() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("  ").is_ok());
        assert_eq!(validate_email("nope"), Err(CouponError::InvalidEmail));
        assert!(validate_email("a@x.com").is_ok());
    }
}
