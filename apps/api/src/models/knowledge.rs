/// One labeled sample of Argentinian Spanish used as a few-shot example.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectExample {
    pub text: String,
    /// Annotated linguistic markers, in the order they appear in the dataset.
    pub features: Vec<String>,
}

/// Aggregated dialect markers rendered as the features summary of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonFeatures {
    pub pronouns: Vec<String>,
    pub verbs_voseo: Vec<String>,
    pub slang_nouns: Vec<String>,
    pub expressions: Vec<String>,
}

/// The curated dialect dataset. Built once at startup by
/// `dialect::knowledge_base` and shared read-only behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    pub examples: Vec<DialectExample>,
    pub common_features: CommonFeatures,
}
