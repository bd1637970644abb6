use crate::core::prompt::PromptTemplate;
use crate::core::{ChatCompletion, Storage};
use crate::utils::error::Result;

pub struct GenerationEngine<A: ChatCompletion, S: Storage> {
    api: A,
    storage: S,
    template: PromptTemplate,
}

impl<A: ChatCompletion, S: Storage> GenerationEngine<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            template: PromptTemplate::default(),
        }
    }

    pub fn with_template(api: A, storage: S, template: PromptTemplate) -> Self {
        Self {
            api,
            storage,
            template,
        }
    }

    /// Render the prompt and submit one request to the generation service.
    /// The response text is returned exactly as received.
    pub async fn generate(&self, snippet: &str) -> Result<String> {
        let prompt = self.template.render(snippet);
        tracing::debug!("Rendered prompt ({} bytes)", prompt.len());

        let tests = self.api.generate(&prompt).await?;
        tracing::debug!("Received {} bytes from generation service", tests.len());

        Ok(tests)
    }

    /// Overwrite the destination file with the text, verbatim.
    pub async fn persist(&self, text: &str, destination: &str) -> Result<()> {
        self.storage.write_file(destination, text.as_bytes()).await
    }

    pub async fn run(&self, snippet: &str, destination: &str) -> Result<String> {
        println!("Generating tests...");
        let tests = self.generate(snippet).await?;

        println!("Saving output...");
        self.persist(&tests, destination).await?;
        println!("Output saved to: {}", destination);

        Ok(destination.to_string())
    }
}
