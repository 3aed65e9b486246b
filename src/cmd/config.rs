use crate::config::AppConfig;

/// Prints the effective configuration with secrets masked.
pub fn run(config: &AppConfig) {
    for (label, value) in describe(config) {
        println!("{label}: {value}");
    }
}

fn describe(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Listen address", config.listen_address()),
        ("GitHub GraphQL URL", config.github_graphql_url.clone()),
        ("GitHub token", mask_secret(&config.github_token)),
        ("Gemini API base", config.gemini_api_base.clone()),
        ("Gemini model", config.gemini_model.clone()),
        ("Gemini API key", mask_secret(&config.gemini_api_key)),
        (
            "Upstream timeout",
            format!("{}s", config.upstream_timeout.as_secs()),
        ),
        (
            "CORS allowed origin",
            display_value(&config.cors_allowed_origin, "<any>"),
        ),
        ("Proxy access token", mask_secret(&config.access_token)),
    ]
}

fn display_value(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let prefix: String = token.chars().take(3).collect();
            let suffix: String = token
                .chars()
                .rev()
                .take(3)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
