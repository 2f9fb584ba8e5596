//! User-Agent alias table.
//!
//! Short alias names map to full browser User-Agent strings. The parenthesised
//! notes are informative only and are not part of the alias name:
//!
//! - Linux Firefox (43.0 on Ubuntu Linux)
//! - Linux Konqueror (3)
//! - Linux Mozilla
//! - Mac Firefox (43.0)
//! - Mac Mozilla
//! - Mac Safari (9.0 on OS X 10.11.2, the default)
//! - Mac Safari 4
//! - Windows Chrome (43)
//! - Windows IE 6 through Windows IE 11
//! - Windows Edge
//! - Windows Mozilla
//! - Windows Firefox (43.0)
//! - iPhone (iOS 9.1)
//! - iPad (iOS 9.1)
//! - Android (5.1.1)
//! - rs-pismo (this library)

/// Alias used when nothing else resolves.
pub const DEFAULT_ALIAS: &str = "Mac Safari";

/// This library's own User-Agent string.
pub const LIBRARY_USER_AGENT: &str = concat!("rs-pismo/", env!("CARGO_PKG_VERSION"));

static AGENT_ALIASES: &[(&str, &str)] = &[
    ("rs-pismo", LIBRARY_USER_AGENT),
    ("Linux Firefox", "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:43.0) Gecko/20100101 Firefox/43.0"),
    ("Linux Konqueror", "Mozilla/5.0 (compatible; Konqueror/3; Linux)"),
    ("Linux Mozilla", "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.4) Gecko/20030624"),
    ("Mac Firefox", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.11; rv:43.0) Gecko/20100101 Firefox/43.0"),
    ("Mac Mozilla", "Mozilla/5.0 (Macintosh; U; PPC Mac OS X Mach-O; en-US; rv:1.4a) Gecko/20030401"),
    ("Mac Safari 4", "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_6_2; de-at) AppleWebKit/531.21.8 (KHTML, like Gecko) Version/4.0.4 Safari/531.21.10"),
    ("Mac Safari", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_2) AppleWebKit/601.3.9 (KHTML, like Gecko) Version/9.0.2 Safari/601.3.9"),
    ("Windows Chrome", "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/43.0.2357.125 Safari/537.36"),
    ("Windows IE 6", "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)"),
    ("Windows IE 7", "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; .NET CLR 1.1.4322; .NET CLR 2.0.50727)"),
    ("Windows IE 8", "Mozilla/5.0 (compatible; MSIE 8.0; Windows NT 5.1; Trident/4.0; .NET CLR 1.1.4322; .NET CLR 2.0.50727)"),
    ("Windows IE 9", "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)"),
    ("Windows IE 10", "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; WOW64; Trident/6.0)"),
    ("Windows IE 11", "Mozilla/5.0 (Windows NT 6.3; WOW64; Trident/7.0; rv:11.0) like Gecko"),
    ("Windows Edge", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/46.0.2486.0 Safari/537.36 Edge/13.10586"),
    ("Windows Mozilla", "Mozilla/5.0 (Windows; U; Windows NT 5.0; en-US; rv:1.4b) Gecko/20030516 Mozilla Firebird/0.6"),
    ("Windows Firefox", "Mozilla/5.0 (Windows NT 6.3; WOW64; rv:43.0) Gecko/20100101 Firefox/43.0"),
    ("iPhone", "Mozilla/5.0 (iPhone; CPU iPhone OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B5110e Safari/601.1"),
    ("iPad", "Mozilla/5.0 (iPad; CPU OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B143 Safari/601.1"),
    ("Android", "Mozilla/5.0 (Linux; Android 5.1.1; Nexus 7 Build/LMY47V) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.76 Safari/537.36"),
];

/// Look up the User-Agent string for an alias name. Names are case-sensitive.
#[must_use]
pub fn alias(name: &str) -> Option<&'static str> {
    AGENT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, agent)| *agent)
}

/// All known alias names, in table order.
pub fn alias_names() -> impl Iterator<Item = &'static str> {
    AGENT_ALIASES.iter().map(|(alias, _)| *alias)
}

/// The default desktop browser User-Agent.
#[must_use]
pub fn default_user_agent() -> &'static str {
    alias(DEFAULT_ALIAS).unwrap_or(LIBRARY_USER_AGENT)
}

/// Resolve the configured user agent. Never fails.
///
/// Order: a known alias in `user_agent`, then `user_agent` literally, then a
/// known alias in `user_agent_alias`, then the default.
#[must_use]
pub fn resolve(user_agent: Option<&str>, user_agent_alias: Option<&str>) -> String {
    if let Some(agent) = user_agent {
        return alias(agent).unwrap_or(agent).to_string();
    }

    user_agent_alias
        .and_then(alias)
        .unwrap_or_else(default_user_agent)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        assert_eq!(
            alias("Linux Mozilla"),
            Some("Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.4) Gecko/20030624")
        );
        assert!(alias("linux mozilla").is_none());
        assert!(alias("Browser Bob").is_none());
    }

    #[test]
    fn test_mac_safari_4_not_shadowed_by_mac_safari() {
        let safari = alias("Mac Safari").unwrap_or_default();
        let safari4 = alias("Mac Safari 4").unwrap_or_default();
        assert!(safari.contains("Version/9.0.2"));
        assert!(safari4.contains("Version/4.0.4"));
    }

    #[test]
    fn test_default_is_mac_safari() {
        assert_eq!(Some(default_user_agent()), alias("Mac Safari"));
        assert_eq!(resolve(None, None), default_user_agent());
    }

    #[test]
    fn test_user_agent_alias_is_substituted() {
        assert_eq!(resolve(Some("iPad"), None), alias("iPad").unwrap_or_default());
    }

    #[test]
    fn test_unknown_user_agent_is_literal() {
        assert_eq!(resolve(Some("Browser Bob"), None), "Browser Bob");
    }

    #[test]
    fn test_user_agent_alias_option() {
        assert_eq!(
            resolve(None, Some("Windows Edge")),
            alias("Windows Edge").unwrap_or_default()
        );
    }

    #[test]
    fn test_unknown_user_agent_alias_falls_back_to_default() {
        assert_eq!(resolve(None, Some("Browser Bob")), default_user_agent());
    }

    #[test]
    fn test_user_agent_wins_over_alias_option() {
        assert_eq!(
            resolve(Some("Android"), Some("iPhone")),
            alias("Android").unwrap_or_default()
        );
    }

    #[test]
    fn test_library_alias_carries_version() {
        let agent = alias("rs-pismo").unwrap_or_default();
        assert!(agent.starts_with("rs-pismo/"));
        assert!(alias_names().any(|name| name == "rs-pismo"));
    }
}
