//! Port to the external text generator producing recipe suggestions

use async_trait::async_trait;

use crate::errors::DomainError;

/// Anything that turns a prompt into recipe text
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generate a completion for `prompt`
    ///
    /// Failures should be reported as `DomainError::ExternalService`.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use stub::StubRecipeGenerator;

#[cfg(any(test, feature = "test-utils"))]
mod stub {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::RecipeGenerator;
    use crate::errors::DomainError;

    /// Generator returning a canned reply and remembering the prompts it saw
    #[derive(Clone)]
    pub struct StubRecipeGenerator {
        reply: Result<String, String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl StubRecipeGenerator {
        pub fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                prompts: Arc::default(),
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                reply: Err(message.into()),
                prompts: Arc::default(),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl RecipeGenerator for StubRecipeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            self.reply
                .clone()
                .map_err(|message| DomainError::ExternalService { message })
        }
    }
}
