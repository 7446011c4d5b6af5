//! Fenced code block extraction.
//!
//! Backends answer with prose around a triple-backtick block, e.g.
//!
//! ````text
//! Here is your Deployment:
//! ```yaml
//! apiVersion: apps/v1
//! ```
//! ````
//!
//! Only the first block is used. Responses carrying several blocks lose
//! everything after the first; callers treat the response as a single
//! artifact.

use regex::Regex;
use std::sync::LazyLock;

/// Fallback shown when the backend sends no explanation.
pub const MISSING_EXPLANATION: &str = "No explanation available.";

/// Opening fence with an optional language tag, a newline, then the
/// shortest body up to the next closing fence.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:\w+)?\n([\s\S]*?)```").expect("fenced block pattern is valid")
});

/// Extract the trimmed interior of the first fenced block.
///
/// Without a fenced block the whole input is returned trimmed. Pure and
/// idempotent: the interior never contains a closing fence, and trimming
/// never creates one.
pub fn extract_code(raw: &str) -> String {
    match FENCED_BLOCK.captures(raw).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Trimmed explanation, or [`MISSING_EXPLANATION`] when absent or blank.
pub fn explanation_or_default(explanation: Option<&str>) -> String {
    match explanation.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING_EXPLANATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tagged_block() {
        assert_eq!(extract_code("```yaml\nfoo: bar\n```"), "foo: bar");
    }

    #[test]
    fn test_extracts_untagged_block_with_prose() {
        let raw = "Here you go:\n```\nFROM nginx:alpine\nEXPOSE 80\n```\nEnjoy!";
        assert_eq!(extract_code(raw), "FROM nginx:alpine\nEXPOSE 80");
    }

    #[test]
    fn test_no_block_returns_trimmed_input() {
        assert_eq!(extract_code("  kubectl get pods \n"), "kubectl get pods");
    }

    #[test]
    fn test_fence_without_newline_is_not_a_block() {
        assert_eq!(extract_code("```yaml foo```"), "```yaml foo```");
    }

    #[test]
    fn test_only_first_block_is_used() {
        // Documented boundary: later blocks are dropped.
        let raw = "```hcl\nresource \"a\" {}\n```\ntext\n```hcl\nresource \"b\" {}\n```";
        assert_eq!(extract_code(raw), "resource \"a\" {}");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let samples = [
            "```yaml\nfoo: bar\n```",
            "plain text",
            "  padded  ",
            "```\n```",
            "```yaml foo```",
            "intro\n```tf\nx = 1\n```\n```tf\ny = 2\n```",
            "",
        ];
        for raw in samples {
            let once = extract_code(raw);
            assert_eq!(extract_code(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_explanation_fallback() {
        assert_eq!(explanation_or_default(None), MISSING_EXPLANATION);
        assert_eq!(explanation_or_default(Some("   ")), MISSING_EXPLANATION);
        assert_eq!(explanation_or_default(Some(" Creates a pod. ")), "Creates a pod.");
    }
}
