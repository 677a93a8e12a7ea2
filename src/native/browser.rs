//! Opening links in the system browser

use std::process::Command;

/// Only http(s) links are handed to the desktop opener; form URLs come from
/// the backend and must not launch arbitrary handlers.
pub fn is_web_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Resolve a possibly relative link (`/forms/42`) against `base`
pub fn resolve_url(base: &str, url: &str) -> Result<String, String> {
    reqwest::Url::parse(base)
        .and_then(|base| base.join(url))
        .map(|resolved| resolved.to_string())
        .map_err(|e| format!("Invalid link {}: {}", url, e))
}

/// Open a URL in a new browser window/tab
pub fn open_url(url: &str) -> Result<(), String> {
    if !is_web_url(url) {
        return Err(format!("Refusing to open non-web URL: {}", url));
    }

    opener(url)
        .spawn()
        .map_err(|e| format!("Failed to open {}: {}", url, e))?;

    tracing::info!("Opened {}", url);
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    // Use xdg-open on Linux
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_urls_only() {
        assert!(is_web_url("https://vk.com"));
        assert!(is_web_url("http://localhost:8000/forms/1"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("forms/1"));
    }

    #[test]
    fn test_resolve_relative_link() {
        assert_eq!(
            resolve_url("http://localhost:8000", "/forms/42").unwrap(),
            "http://localhost:8000/forms/42"
        );
        assert_eq!(
            resolve_url("http://localhost:8000", "https://portal.example/forms/7").unwrap(),
            "https://portal.example/forms/7"
        );
        assert!(resolve_url("not a base", "/forms/42").is_err());
    }

    #[test]
    fn test_open_rejects_non_web_url() {
        let err = open_url("file:///tmp/form.html").unwrap_err();
        assert!(err.contains("non-web"));
    }
}
