// All prompt constants for the enhancement module. The wording is a product
// detail: any instruction producing equivalent output is acceptable.

/// Summary rewrite prompt. Replace `{summary}` before sending. The response
/// is unconstrained free text.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Rewrite this resume summary to be more professional, \
    engaging, and modern. Keep it to one paragraph. Input: \"{summary}\"";

/// Bullet transformation prompt. Replace `{text}` before sending. The
/// response is schema-constrained to `{"bullets": [...]}`.
pub const BULLETS_PROMPT_TEMPLATE: &str = "Transform this professional description into a set of \
    3-5 punchy, achievement-oriented bullet points for a resume. Use strong action verbs. \
    Input: \"{text}\"";

/// Structured-output config for the bullets call.
pub fn bullets_generation_config() -> serde_json::Value {
    serde_json::json!({
        "responseMimeType": "application/json",
        "responseSchema": {
            "type": "OBJECT",
            "properties": {
                "bullets": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["bullets"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_placeholders() {
        assert!(SUMMARY_PROMPT_TEMPLATE.contains("{summary}"));
        assert!(BULLETS_PROMPT_TEMPLATE.contains("{text}"));
    }

    #[test]
    fn test_bullets_config_requires_bullets_field() {
        let config = bullets_generation_config();
        assert_eq!(config["responseSchema"]["required"][0], "bullets");
    }
}
