// Prompt constants for dialect classification.
// The output-schema instruction is coupled to `validator.rs`: change both together.

/// Role statement opening the system prompt.
pub const ROLE_STATEMENT: &str = "Eres un experto en lingüística del español argentino. \
    Analiza los textos para determinar si están escritos en español argentino.";

/// Heading that introduces the worked examples.
pub const EXAMPLES_HEADING: &str =
    "Aquí tienes algunos ejemplos de español argentino junto con sus características:";

/// Heading of the common-features summary.
pub const FEATURES_HEADING: &str = "Características comunes del español argentino:";

/// Closing instruction. Followed by the quoted text under analysis.
pub const CLOSING_INSTRUCTION: &str = "Con base en estos ejemplos y características, \
    analiza el siguiente texto y determina si está escrito en español argentino. \
    Busca patrones similares y explica tu razonamiento:";

/// Fixed user message describing the exact JSON object the validator accepts.
pub const OUTPUT_SCHEMA_INSTRUCTION: &str = r#"Analiza este texto y proporciona tu análisis en el siguiente formato de objeto JSON, no aclares el formato:
{
  "confidence": (1, 2 o 3 según el nivel de confianza: 1 = Baja, 2 = Media, 3 = Alta),
  "isArgentinian": (true o false, según si el texto es español argentino),
  "details": "(Describe brevemente las características específicas identificadas)."
}
Responde únicamente con el objeto JSON, sin texto adicional ni bloques de código markdown."#;
