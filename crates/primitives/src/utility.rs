use validator::ValidationError;

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 128;

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();

    if len < MIN_LEN {
        return Err(error("password_too_short"));
    }

    if len > MAX_LEN {
        return Err(error("password_too_long"));
    }

    if password.chars().any(char::is_whitespace) {
        return Err(error("password_contains_whitespace"));
    }

    Ok(())
}

fn error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param("min_length".into(), &MIN_LEN);
    err.add_param("max_length".into(), &MAX_LEN);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_length_password() {
        assert!(validate_password("pass1234").is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_password("pass123").unwrap_err();
        assert_eq!(err.code, "password_too_short");
    }

    #[test]
    fn rejects_whitespace() {
        let err = validate_password("pass word 123").unwrap_err();
        assert_eq!(err.code, "password_contains_whitespace");
    }
}
