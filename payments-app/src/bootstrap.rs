//! Process startup chores: static directory and console banner.

use std::path::Path;

/// Card numbers that render nicely in the demo front-end.
const TEST_CARDS: [(&str, &str); 3] = [
    ("4532 1488 0343 6467", "Visa"),
    ("5425 2334 3010 9903", "Mastercard"),
    ("3782 822463 10005", "Amex"),
];

/// Creates the static assets directory if it does not exist yet.
pub fn ensure_static_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.exists() {
        tracing::info!("Creating static directory {}", dir.display());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("failed to create {}: {}", dir.display(), e))
}

/// Renders the startup banner shown on the console.
pub fn banner(url: &str) -> String {
    let rule = "=".repeat(60);
    let mut out = format!("\n{rule}\n🚀 Fake Payment App Server Starting...\n{rule}\n");
    out.push_str(&format!("\n📱 Open your browser to: {url}\n"));
    out.push_str("\n💳 Test Card Numbers:\n");
    for (number, brand) in TEST_CARDS {
        out.push_str(&format!("   • {number} ({brand})\n"));
    }
    out.push_str("\n⚠️  Note: This is a FAKE payment system for prototyping only!\n");
    out.push_str(&format!("{rule}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_static_dir_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("public").join("assets");

        ensure_static_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Existing directories are left alone.
        ensure_static_dir(&dir).unwrap();
    }

    #[test]
    fn test_banner_mentions_url_and_cards() {
        let text = banner("http://localhost:5000");

        assert!(text.contains("http://localhost:5000"));
        assert!(text.contains("4532 1488 0343 6467"));
        assert!(text.contains("FAKE"));
    }
}
