//! Report rendering: pure projections of a [`ValidationResult`] into
//! markdown, plain text, JSON, and a compact summary.
//!
//! Truncation of flags and recommendations happens here, never in the
//! scoring core.

use veracity_core::errors::VeracityResult;
use veracity_core::models::{ConfidenceLevel, ValidationResult};

/// Flags shown in the compact summary.
const SUMMARY_FLAG_LIMIT: usize = 3;

/// Render a markdown report.
pub fn markdown(result: &ValidationResult) -> String {
    let mut report = format!(
        "# Validation Report\n\n\
         **Generated:** {}  \n\
         **Overall Score:** {:.1}%  \n\
         **Status:** {}  \n\
         **Hallucination Risk:** {}\n\n\
         ## Confidence Distribution\n\n",
        result.timestamp.to_rfc3339(),
        result.overall_score * 100.0,
        if result.passed { "PASSED" } else { "FAILED" },
        result.hallucination_risk,
    );

    for level in ConfidenceLevel::ALL {
        report.push_str(&format!(
            "- **{}:** {} claims\n",
            level,
            result.confidence_distribution.count(level)
        ));
    }

    report.push_str(&format!(
        "\n## Key Metrics\n\n\
         - **Singleton Rate:** {:.1}%\n\
         - **Validation Flags:** {}\n\n\
         ## Issues Found\n\n",
        result.singleton_rate * 100.0,
        result.validation_flags.len(),
    ));

    for flag in &result.validation_flags {
        report.push_str(&format!("- {}\n", title_case(flag.code())));
    }

    report.push_str("\n## Recommendations\n\n");
    for (i, rec) in result.recommendations.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, rec));
    }

    report
}

/// Render a plain-text report.
pub fn text(result: &ValidationResult) -> String {
    let mut report = format!(
        "VALIDATION REPORT\n\
         ================\n\
         Generated: {}\n\
         Overall Score: {:.1}%\n\
         Status: {}\n\
         Hallucination Risk: {}\n\n\
         ISSUES:\n",
        result.timestamp.to_rfc3339(),
        result.overall_score * 100.0,
        if result.passed { "PASSED" } else { "FAILED" },
        result.hallucination_risk,
    );

    for flag in &result.validation_flags {
        report.push_str(&format!("  - {}\n", flag.code().replace('_', " ")));
    }

    report.push_str("\nRECOMMENDATIONS:\n");
    for (i, rec) in result.recommendations.iter().enumerate() {
        report.push_str(&format!("  {}. {}\n", i + 1, rec));
    }

    report
}

/// Serialize the full result record as pretty JSON.
pub fn json(result: &ValidationResult) -> VeracityResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a compact summary: score, verdict, risk, top flags, and
/// optionally the first recommendation.
pub fn summary(result: &ValidationResult, include_recommendations: bool) -> String {
    let key_issues = if result.validation_flags.is_empty() {
        "None".to_string()
    } else {
        result
            .validation_flags
            .iter()
            .take(SUMMARY_FLAG_LIMIT)
            .map(|f| f.code().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = format!(
        "**Validation Summary**\n\n\
         Score: {:.1}%\n\
         Status: {}\n\
         Risk: {}\n\
         Singleton Rate: {:.1}%\n\n\
         **Key Issues:** {}\n",
        result.overall_score * 100.0,
        if result.passed { "PASSED" } else { "FAILED" },
        result.hallucination_risk,
        result.singleton_rate * 100.0,
        key_issues,
    );

    if include_recommendations {
        if let Some(first) = result.recommendations.first() {
            out.push_str(&format!("\n**Top Recommendation:** {}", first));
        }
    }

    out
}

/// "HIGH_SINGLETON_RATE" → "High Singleton Rate".
fn title_case(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_rewrites_flag_codes() {
        assert_eq!(title_case("HIGH_SINGLETON_RATE"), "High Singleton Rate");
        assert_eq!(title_case("RECENCY_BIAS"), "Recency Bias");
    }
}
