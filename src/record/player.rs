use std::env;

const USER_VARS: [&str; 3] = ["USER", "USERNAME", "LOGNAME"];

/// Name of the logged-in OS user, or `unknown`.
pub fn player_name() -> String {
    player_name_from(|key| env::var(key).ok())
}

fn player_name_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    USER_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_user_then_username() {
        let name = player_name_from(|key| match key {
            "USERNAME" => Some("win".to_string()),
            "LOGNAME" => Some("log".to_string()),
            _ => None,
        });
        assert_eq!(name, "win");
    }

    #[test]
    fn test_skips_blank_values() {
        let name = player_name_from(|key| match key {
            "USER" => Some("  ".to_string()),
            "LOGNAME" => Some("carol".to_string()),
            _ => None,
        });
        assert_eq!(name, "carol");
    }

    #[test]
    fn test_falls_back_to_unknown() {
        assert_eq!(player_name_from(|_| None), "unknown");
    }
}
