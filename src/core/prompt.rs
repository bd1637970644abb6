use crate::utils::error::{GenError, Result};

pub const CODE_PLACEHOLDER: &str = "{code_snippet}";

const DEFAULT_TEMPLATE: &str = r#"You are an expert in Python unit testing with pytest.

Analyze the following Python code and generate comprehensive unit tests:
- Cover success cases, error conditions, and edge cases
- Use pytest framework with appropriate assertions
- Include brief comments to explain each test case
- Return only valid Python code without any additional text

Code to test:
{code_snippet}

Generated tests:
"#;

/// Fixed prompt text with a single `{code_snippet}` substitution point.
/// The snippet is interpolated verbatim, never parsed or escaped.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(CODE_PLACEHOLDER) {
            return Err(GenError::InvalidConfigValueError {
                field: "prompt_template".to_string(),
                value: template,
                reason: format!("Template must contain the {} placeholder", CODE_PLACEHOLDER),
            });
        }
        Ok(Self { template })
    }

    pub fn render(&self, snippet: &str) -> String {
        self.template.replace(CODE_PLACEHOLDER, snippet)
    }
}
