use async_trait::async_trait;
use inquire::{InquireError, Select};

use crate::{ports::SelectionPrompt, BrowseError};

/// Fuzzy-filterable single-choice list on the controlling terminal.
#[derive(Clone, Copy, Debug)]
pub struct InquirePrompt {
    page_size: usize,
}

impl Default for InquirePrompt {
    fn default() -> Self {
        Self { page_size: 15 }
    }
}

#[async_trait]
impl SelectionPrompt for InquirePrompt {
    async fn choose(
        &self,
        options: Vec<String>,
        placeholder: &str,
    ) -> Result<Option<String>, BrowseError> {
        // inquire refuses to render an empty list; all the user could do is dismiss it.
        if options.is_empty() {
            tracing::info!(placeholder, "Nothing to select");
            return Ok(None);
        }

        let message = placeholder.to_owned();
        let page_size = self.page_size;
        let answer = tokio::task::spawn_blocking(move || {
            Select::new(&message, options)
                .with_page_size(page_size)
                .prompt()
        })
        .await
        .map_err(|e| BrowseError::prompt(e.to_string()))?;

        dismissed_as_none(answer)
    }
}

fn dismissed_as_none(answer: Result<String, InquireError>) -> Result<Option<String>, BrowseError> {
    match answer {
        Ok(choice) => Ok(Some(choice)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(BrowseError::prompt(e.to_string())),
    }
}
