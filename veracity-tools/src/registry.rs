//! Named-tool registry: tool listing with JSON schemas, and dispatch over
//! loosely-typed argument bags.
//!
//! Dispatch never panics on malformed arguments: a missing source list is
//! an empty list, everything else malformed surfaces as
//! [`VeracityError::InvalidArguments`].

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use veracity_core::errors::{VeracityError, VeracityResult};
use veracity_core::models::ValidationResult;
use veracity_validation::claims::{classifier, confidence, segmenter, support};

use crate::cache::{cache_key, ResultCache};
use crate::domains;
use crate::interface::{percent, summarize, ValidationInterface};
use crate::report;

/// Flags included in a full (non-detailed) validate_output payload.
const FULL_FLAG_LIMIT: usize = 5;
/// Recommendations included in a full validate_output payload.
const FULL_RECOMMENDATION_LIMIT: usize = 3;
/// Characters of each batch item echoed back as a preview.
const PREVIEW_LEN: usize = 100;

/// A registered tool: name, human description, and JSON input schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Tool registry and dispatcher around a [`ValidationInterface`].
pub struct ToolRegistry {
    interface: ValidationInterface,
    cache: ResultCache,
}

impl ToolRegistry {
    pub fn new(interface: ValidationInterface) -> Self {
        Self {
            interface,
            cache: ResultCache::new(),
        }
    }

    /// The interface behind this registry.
    pub fn interface(&self) -> &ValidationInterface {
        &self.interface
    }

    /// Describe every registered tool.
    pub fn list_tools() -> Vec<ToolSpec> {
        vec![
            ToolSpec {
                name: "validate_output",
                description: "Validate text for hallucination risk and quality issues. \
                              Returns score, risk level, and recommendations.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "content": {"type": "string"},
                        "sources": {"type": "array", "items": {"type": "string"}},
                        "mode": {
                            "type": "string",
                            "enum": ["quick", "full", "detailed"],
                            "default": "quick"
                        }
                    },
                    "required": ["content"]
                }),
            },
            ToolSpec {
                name: "validate_with_context",
                description: "Validate with domain context and overrides. Best for \
                              specialized content (consulting, technical, research).",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "content": {"type": "string"},
                        "sources": {"type": "array", "items": {"type": "string"}},
                        "domain": {"type": "string", "default": "general"},
                        "scope": {"type": "string"},
                        "confidence_threshold": {
                            "type": "number",
                            "minimum": 0,
                            "maximum": 1,
                            "default": 0.7
                        }
                    },
                    "required": ["content"]
                }),
            },
            ToolSpec {
                name: "check_hallucination_risk",
                description: "Quick check specifically for hallucination risk. Returns \
                              risk level and singleton rate.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "content": {"type": "string"},
                        "sources": {"type": "array", "items": {"type": "string"}}
                    },
                    "required": ["content"]
                }),
            },
            ToolSpec {
                name: "validate_claims",
                description: "Extract and validate individual claims. Returns \
                              claim-by-claim analysis.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "content": {"type": "string"},
                        "sources": {"type": "array", "items": {"type": "string"}},
                        "return_unsupported_only": {"type": "boolean", "default": false}
                    },
                    "required": ["content"]
                }),
            },
            ToolSpec {
                name: "get_validation_report",
                description: "Generate a formatted validation report.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "content": {"type": "string"},
                        "sources": {"type": "array", "items": {"type": "string"}},
                        "format": {
                            "type": "string",
                            "enum": ["markdown", "json", "text", "summary"],
                            "default": "summary"
                        },
                        "include_recommendations": {"type": "boolean", "default": true}
                    },
                    "required": ["content"]
                }),
            },
            ToolSpec {
                name: "batch_validate",
                description: "Validate multiple outputs at once. Useful for comparing \
                              alternatives.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "contents": {"type": "array", "items": {"type": "string"}},
                        "sources": {"type": "array", "items": {"type": "string"}},
                        "compare": {"type": "boolean", "default": true}
                    },
                    "required": ["contents"]
                }),
            },
        ]
    }

    /// Dispatch a tool call.
    pub fn dispatch(&mut self, name: &str, args: &Value) -> VeracityResult<Value> {
        info!(tool = name, "dispatching tool call");

        match name {
            "validate_output" => self.validate_output(args),
            "validate_with_context" => self.validate_with_context(args),
            "check_hallucination_risk" => self.check_hallucination_risk(args),
            "validate_claims" => self.validate_claims(args),
            "get_validation_report" => self.get_validation_report(args),
            "batch_validate" => self.batch_validate(args),
            _ => Err(VeracityError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }

    // ── Tool handlers ────────────────────────────────────────────────────

    fn validate_output(&mut self, args: &Value) -> VeracityResult<Value> {
        let content = require_str(args, "content", "validate_output")?;
        let sources = optional_sources(args, "validate_output")?;
        let mode = args["mode"].as_str().unwrap_or("quick");
        if !matches!(mode, "quick" | "full" | "detailed") {
            return Err(VeracityError::invalid_arguments(
                "validate_output",
                format!("unknown mode: {mode}"),
            ));
        }

        let key = cache_key(content, &sources, mode);
        let result = match self.cache.get(&key) {
            Some(cached) => {
                info!(tool = "validate_output", "returning cached result");
                cached
            }
            None => {
                let result = self.interface.full_validate(content, sources, None, None);
                self.cache.insert(key, result.clone());
                result
            }
        };

        let payload = match mode {
            "quick" => serde_json::to_value(summarize(&result))?,
            "detailed" => json!({
                "score": percent(result.overall_score),
                "passed": result.passed,
                "risk": result.hallucination_risk,
                "singleton_rate": percent(result.singleton_rate),
                "confidence_distribution": result.confidence_distribution,
                "total_claims": result.confidence_distribution.total(),
                "issues": result.validation_flags,
                "recommendations": result.recommendations,
            }),
            _ => json!({
                "score": percent(result.overall_score),
                "passed": result.passed,
                "risk": result.hallucination_risk,
                "singleton_rate": percent(result.singleton_rate),
                "key_issues": result.validation_flags.iter()
                    .take(FULL_FLAG_LIMIT)
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>(),
                "recommendations": result.recommendations.iter()
                    .take(FULL_RECOMMENDATION_LIMIT)
                    .collect::<Vec<_>>(),
            }),
        };

        Ok(payload)
    }

    fn validate_with_context(&mut self, args: &Value) -> VeracityResult<Value> {
        let content = require_str(args, "content", "validate_with_context")?;
        let sources = optional_sources(args, "validate_with_context")?;
        let domain = args["domain"].as_str().unwrap_or("general").to_string();
        let scope = args["scope"].as_str().map(String::from);
        let threshold = args["confidence_threshold"].as_f64().unwrap_or(0.7);

        let result =
            self.interface
                .full_validate(content, sources, scope.clone(), Some(domain.clone()));

        let meets_threshold = result.overall_score >= threshold;

        Ok(json!({
            "score": percent(result.overall_score),
            "passed": result.passed && meets_threshold,
            "domain": domain,
            "scope": scope,
            "risk": result.hallucination_risk,
            "singleton_rate": percent(result.singleton_rate),
            "meets_threshold": meets_threshold,
            "threshold": threshold * 100.0,
            "domain_specific_flags": domains::domain_flags(&result, &domain),
            "recommendations": result.recommendations,
        }))
    }

    fn check_hallucination_risk(&mut self, args: &Value) -> VeracityResult<Value> {
        let content = require_str(args, "content", "check_hallucination_risk")?;
        let sources = optional_sources(args, "check_hallucination_risk")?;

        let result = self
            .interface
            .full_validate(content, sources.clone(), None, None);

        // Claim-level breakdown over the listing variant of the segmenter.
        let claims = segmenter::split_claims_filtered(content);
        let unsupported = claims
            .iter()
            .filter(|c| support::support_count(c, &sources) == 0)
            .count();

        let dist = &result.confidence_distribution;
        Ok(json!({
            "hallucination_risk": result.hallucination_risk,
            "singleton_rate": percent(result.singleton_rate),
            "unsupported_claims": unsupported,
            "total_claims": claims.len(),
            "confidence_breakdown": {
                "high": dist.high,
                "medium": dist.medium,
                "low": dist.low,
                "uncertain": dist.uncertain,
            },
            "recommendation": risk_recommendation(&result),
        }))
    }

    fn validate_claims(&mut self, args: &Value) -> VeracityResult<Value> {
        let content = require_str(args, "content", "validate_claims")?;
        let sources = optional_sources(args, "validate_claims")?;
        let unsupported_only = args["return_unsupported_only"].as_bool().unwrap_or(false);

        let claims = segmenter::split_claims_filtered(content);
        let total = claims.len();
        let mut supported_total = 0usize;
        let mut analyzed = Vec::new();

        for claim in claims {
            let claim_type = classifier::classify(&claim);
            let count = support::support_count(&claim, &sources);
            let tier = confidence::assess(claim_type, count);
            let supported = count > 0;
            if supported {
                supported_total += 1;
            }

            if !unsupported_only || !supported {
                analyzed.push(json!({
                    "claim": claim,
                    "supported": supported,
                    "support_count": count,
                    "confidence": tier,
                    "type": claim_type,
                }));
            }
        }

        let support_ratio = if total > 0 {
            (supported_total as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Ok(json!({
            "claims": analyzed,
            "summary": {
                "total_claims": total,
                "supported_claims": supported_total,
                "unsupported_claims": total - supported_total,
                "support_ratio": support_ratio,
            }
        }))
    }

    fn get_validation_report(&mut self, args: &Value) -> VeracityResult<Value> {
        let content = require_str(args, "content", "get_validation_report")?;
        let sources = optional_sources(args, "get_validation_report")?;
        let format = args["format"].as_str().unwrap_or("summary");
        let include_recommendations = args["include_recommendations"].as_bool().unwrap_or(true);

        let mut result = self.interface.full_validate(content, sources, None, None);
        if !include_recommendations {
            result.recommendations.clear();
        }

        let rendered = match format {
            "markdown" => report::markdown(&result),
            "json" => report::json(&result)?,
            "text" => report::text(&result),
            "summary" => report::summary(&result, include_recommendations),
            other => {
                return Err(VeracityError::invalid_arguments(
                    "get_validation_report",
                    format!("unknown format: {other}"),
                ))
            }
        };

        Ok(Value::String(rendered))
    }

    fn batch_validate(&mut self, args: &Value) -> VeracityResult<Value> {
        let contents = require_str_array(args, "contents", "batch_validate")?;
        let sources = optional_sources(args, "batch_validate")?;
        let compare = args["compare"].as_bool().unwrap_or(true);

        let mut results: Vec<Value> = contents
            .iter()
            .enumerate()
            .map(|(index, content)| {
                let summary = self.interface.quick_validate(content, sources.clone());
                json!({
                    "index": index,
                    "content_preview": preview(content),
                    "score": summary.score,
                    "passed": summary.passed,
                    "risk": summary.risk,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b["score"]
                .as_f64()
                .unwrap_or(0.0)
                .partial_cmp(&a["score"].as_f64().unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut output = json!({
            "results": results,
            "best_index": results.first().map(|r| r["index"].clone()),
            "worst_index": results.last().map(|r| r["index"].clone()),
        });

        if compare && results.len() > 1 {
            let scores: Vec<f64> = results
                .iter()
                .filter_map(|r| r["score"].as_f64())
                .collect();
            let average = scores.iter().sum::<f64>() / scores.len() as f64;
            let max = scores.iter().cloned().fold(f64::MIN, f64::max);
            let min = scores.iter().cloned().fold(f64::MAX, f64::min);

            let mut risk_counts = (0usize, 0usize, 0usize);
            for r in &results {
                match r["risk"].as_str() {
                    Some("LOW") => risk_counts.0 += 1,
                    Some("MEDIUM") => risk_counts.1 += 1,
                    _ => risk_counts.2 += 1,
                }
            }

            output["comparison"] = json!({
                "average_score": (average * 10.0).round() / 10.0,
                "score_range": max - min,
                "all_passed": results.iter().all(|r| r["passed"] == Value::Bool(true)),
                "risk_distribution": {
                    "LOW": risk_counts.0,
                    "MEDIUM": risk_counts.1,
                    "HIGH": risk_counts.2,
                }
            });
        }

        Ok(output)
    }
}

// ── Argument decoding helpers ────────────────────────────────────────────

fn require_str<'a>(args: &'a Value, key: &str, tool: &str) -> VeracityResult<&'a str> {
    args[key]
        .as_str()
        .ok_or_else(|| VeracityError::invalid_arguments(tool, format!("missing string: {key}")))
}

fn require_str_array(args: &Value, key: &str, tool: &str) -> VeracityResult<Vec<String>> {
    let arr = args[key].as_array().ok_or_else(|| {
        VeracityError::invalid_arguments(tool, format!("missing string array: {key}"))
    })?;
    arr.iter()
        .map(|v| {
            v.as_str().map(String::from).ok_or_else(|| {
                VeracityError::invalid_arguments(tool, format!("{key} entries must be strings"))
            })
        })
        .collect()
}

/// Missing or null sources are an empty list; present-but-malformed
/// sources are an argument error.
fn optional_sources(args: &Value, tool: &str) -> VeracityResult<Vec<String>> {
    match &args["sources"] {
        Value::Null => Ok(Vec::new()),
        Value::Array(arr) => arr
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| {
                    VeracityError::invalid_arguments(tool, "sources entries must be strings")
                })
            })
            .collect(),
        _ => Err(VeracityError::invalid_arguments(
            tool,
            "sources must be an array of strings",
        )),
    }
}

fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_LEN {
        let cut: String = content.chars().take(PREVIEW_LEN).collect();
        format!("{cut}...")
    } else {
        content.to_string()
    }
}

fn risk_recommendation(result: &ValidationResult) -> &'static str {
    use veracity_core::models::RiskTier;
    match result.hallucination_risk {
        RiskTier::High => "Critical: Add source validation and explicit uncertainty acknowledgments",
        RiskTier::Medium => "Moderate: Strengthen claim support and qualify uncertain statements",
        RiskTier::Low => "Low risk: Maintain current validation practices",
    }
}
