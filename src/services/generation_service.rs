use std::{sync::Arc, time::Instant};

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{Article, GenerationRequest, GenerationResult},
        dto::request::GenerateRequestDto,
    },
    repositories::{ArticleRepository, ResultRepository},
    services::{completion_client::CompletionClient, segmenter},
};

pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    articles: Arc<dyn ArticleRepository>,
    results: Arc<dyn ResultRepository>,
}

impl GenerationService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        articles: Arc<dyn ArticleRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            client,
            articles,
            results,
        }
    }

    pub async fn current_result(&self) -> AppResult<GenerationResult> {
        self.results.get().await
    }

    /// Runs one generation for the submitted article.
    ///
    /// A blank article is rejected before anything is stored or sent. Otherwise the
    /// result is reset to the loading placeholder, the provider is called once, and
    /// the outcome (sections, or an error message in the summary) becomes the live
    /// result. Overlapping calls are not serialised; whichever finishes last wins.
    pub async fn generate(&self, request: GenerateRequestDto) -> AppResult<GenerationResult> {
        request.validate()?;

        // Keep the file source when the page submits the text it was loaded with.
        let stored = self.articles.get().await?;
        if stored.text != request.article {
            self.articles.replace(Article::pasted(&request.article)).await?;
        }

        self.results.set(GenerationResult::loading()).await?;

        let started = Instant::now();
        let generation = GenerationRequest::for_article(&request.article);
        let result = match self.client.complete(&generation).await {
            Ok(text) => segmenter::segment(&text),
            Err(err) => {
                log::warn!("Generation failed: {}", err);
                GenerationResult::failed(err.user_message())
            }
        };

        self.results.set(result.clone()).await?;
        log::info!(
            "Generation finished with status {:?} in {} ms",
            result.status,
            started.elapsed().as_millis()
        );

        Ok(result)
    }
}
