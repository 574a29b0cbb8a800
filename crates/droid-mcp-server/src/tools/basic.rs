//! Basic tool implementations (ping)

/// Ping the server to check if it's running
pub fn ping() -> String {
    "pong".to_string()
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_ping() {
        assert_eq!(super::ping(), "pong");
    }
}
