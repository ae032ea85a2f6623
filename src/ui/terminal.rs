//! What the terminal behind stdout can show.

use is_terminal::IsTerminal;

/// Environment variables that mark a CI runner
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BITBUCKET_BUILD_NUMBER",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities_from(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn capabilities_from(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = env("NO_COLOR").is_some_and(|v| !v.is_empty());

    // first locale variable that is set wins, as in setlocale(3)
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| env(k).filter(|v| !v.is_empty()));
    let utf8_locale = locale.map_or(true, |l| {
        let l = l.to_ascii_lowercase();
        l.contains("utf-8") || l.contains("utf8")
    });

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !no_color,
        supports_unicode: !dumb && utf8_locale,
        is_ci: CI_MARKERS.iter().any(|k| env(k).is_some()),
    }
}
