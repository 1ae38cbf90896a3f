#[cfg(test)]
pub mod fixtures {
    pub const SAMPLE_ARTICLE: &str = "Photosynthesis is the process plants use to turn light into chemical energy.\n\
        It happens inside chloroplasts, and it releases oxygen.";

    /// A completion shaped the way the model usually answers the quiz prompt.
    pub const WELL_FORMED_COMPLETION: &str = "1. **Summary:** Photosynthesis converts light into chemical energy. \
It takes place in chloroplasts. Oxygen is released as a by-product.

2. **MCQs:**

   Question A: What process converts light into chemical energy?
   a) Photosynthesis
   b) Respiration
   c) Fermentation

   Question B: Where does photosynthesis take place?
   a) Mitochondria
   b) Chloroplasts
   c) Nucleus

   Question C: Which gas is released?
   a) Nitrogen
   b) Carbon dioxide
   c) Oxygen

3. **Fill in the Blanks:**

   - Photosynthesis takes place in the _____.
   - Oxygen is released as a _____.
";
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_article_is_not_blank() {
        assert!(!SAMPLE_ARTICLE.trim().is_empty());
    }
}
