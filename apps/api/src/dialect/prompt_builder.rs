//! Prompt Builder — renders the knowledge base into the few-shot system prompt.
//!
//! Pure and deterministic: the same knowledge base and input text always
//! produce the same bytes.

use crate::dialect::prompts::{
    CLOSING_INSTRUCTION, EXAMPLES_HEADING, FEATURES_HEADING, ROLE_STATEMENT,
};
use crate::models::knowledge::{CommonFeatures, DialectExample, KnowledgeBase};

/// Builds the system prompt for classifying `text`.
///
/// Callers must reject blank text first; the builder embeds it verbatim.
pub fn build_system_prompt(kb: &KnowledgeBase, text: &str) -> String {
    format!(
        "{ROLE_STATEMENT}\n\n{EXAMPLES_HEADING}\n\n{examples}\n\n{features}\n\n{CLOSING_INSTRUCTION}\n\n\"{text}\"",
        examples = render_examples(&kb.examples),
        features = render_common_features(&kb.common_features),
    )
}

fn render_examples(examples: &[DialectExample]) -> String {
    examples
        .iter()
        .map(|ex| {
            format!(
                "Texto: \"{}\"\nCaracterísticas: {}\n",
                ex.text,
                ex.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_common_features(common: &CommonFeatures) -> String {
    format!(
        "{FEATURES_HEADING}\n\
         - Pronombres: {}\n\
         - Verbos de voseo: {}\n\
         - Lunfardo común: {}\n\
         - Expresiones comunes: {}",
        common.pronouns.join(", "),
        common.verbs_voseo.join(", "),
        common.slang_nouns.join(", "),
        common.expressions.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> KnowledgeBase {
        KnowledgeBase {
            examples: vec![
                DialectExample {
                    text: "Che, ¿vos sabés?".to_string(),
                    features: vec!["che".to_string(), "voseo".to_string()],
                },
                DialectExample {
                    text: "No tengo un mango".to_string(),
                    features: vec!["lunfardo: mango".to_string()],
                },
            ],
            common_features: CommonFeatures {
                pronouns: vec!["vos".to_string()],
                verbs_voseo: vec!["sos".to_string(), "tenés".to_string()],
                slang_nouns: vec!["guita".to_string(), "laburo".to_string()],
                expressions: vec!["che".to_string(), "dale".to_string()],
            },
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let kb = fixture();
        let a = build_system_prompt(&kb, "Dale boludo");
        let b = build_system_prompt(&kb, "Dale boludo");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_prompt_sections_appear_in_order() {
        let prompt = build_system_prompt(&fixture(), "Dale boludo");
        let role = prompt.find(ROLE_STATEMENT).unwrap();
        let first_example = prompt.find("Texto: \"Che, ¿vos sabés?\"").unwrap();
        let second_example = prompt.find("Texto: \"No tengo un mango\"").unwrap();
        let features = prompt.find(FEATURES_HEADING).unwrap();
        let closing = prompt.find(CLOSING_INSTRUCTION).unwrap();
        let input = prompt.rfind("\"Dale boludo\"").unwrap();

        assert!(role < first_example);
        assert!(first_example < second_example);
        assert!(second_example < features);
        assert!(features < closing);
        assert!(closing < input);
        assert!(prompt.starts_with(ROLE_STATEMENT));
        assert!(prompt.ends_with("\"Dale boludo\""));
    }

    #[test]
    fn test_examples_render_joined_features() {
        let prompt = build_system_prompt(&fixture(), "x");
        assert!(prompt.contains("Texto: \"Che, ¿vos sabés?\"\nCaracterísticas: che, voseo\n"));
        assert!(prompt.contains("Características: lunfardo: mango\n"));
    }

    #[test]
    fn test_common_features_render_four_labeled_lists() {
        let prompt = build_system_prompt(&fixture(), "x");
        assert!(prompt.contains("- Pronombres: vos\n"));
        assert!(prompt.contains("- Verbos de voseo: sos, tenés\n"));
        assert!(prompt.contains("- Lunfardo común: guita, laburo\n"));
        assert!(prompt.contains("- Expresiones comunes: che, dale"));
    }

    #[test]
    fn test_input_text_is_embedded_verbatim() {
        let text = "  Hola, ¿cómo estás?\nTodo bien  ";
        let prompt = build_system_prompt(&fixture(), text);
        assert!(prompt.contains(&format!("\"{text}\"")));
    }

    #[test]
    fn test_different_input_changes_only_the_tail() {
        let kb = fixture();
        let a = build_system_prompt(&kb, "uno");
        let b = build_system_prompt(&kb, "dos");
        assert_ne!(a, b);
        assert_eq!(a.trim_end_matches("\"uno\""), b.trim_end_matches("\"dos\""));
    }
}
