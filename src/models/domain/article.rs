use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArticleSource {
    Empty,
    Pasted,
    File { file_name: Option<String> },
}

/// The source text the quiz is generated from. Replaced wholesale, never edited in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub text: String,
    pub source: ArticleSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn pasted(text: &str) -> Self {
        Article {
            text: text.to_string(),
            source: ArticleSource::Pasted,
            loaded_at: Some(Utc::now()),
        }
    }

    /// Decodes a file's bytes the way a browser text reader does: UTF-8, with invalid
    /// sequences replaced rather than rejected and a leading byte order mark dropped.
    pub fn from_file(bytes: &[u8], file_name: Option<&str>) -> Self {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Article {
            text: String::from_utf8_lossy(bytes).into_owned(),
            source: ArticleSource::File {
                file_name: file_name.map(str::to_string),
            },
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Default for Article {
    fn default() -> Self {
        Article {
            text: String::new(),
            source: ArticleSource::Empty,
            loaded_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_article_is_blank() {
        let article = Article::default();
        assert!(article.is_blank());
        assert_eq!(article.source, ArticleSource::Empty);
    }

    #[test]
    fn test_whitespace_article_is_blank() {
        assert!(Article::pasted(" \n\t ").is_blank());
        assert!(!Article::pasted(" x ").is_blank());
    }

    #[test]
    fn test_from_file_keeps_exact_text() {
        let text = "First line\r\nSecond line\n\n  indented";
        let article = Article::from_file(text.as_bytes(), Some("notes.txt"));

        assert_eq!(article.text, text);
        assert_eq!(
            article.source,
            ArticleSource::File {
                file_name: Some("notes.txt".to_string())
            }
        );
    }

    #[test]
    fn test_from_file_replaces_invalid_utf8() {
        let article = Article::from_file(&[b'o', b'k', 0xff], None);
        assert_eq!(article.text, "ok\u{FFFD}");
    }

    #[test]
    fn test_from_file_strips_leading_bom() {
        let article = Article::from_file(b"\xEF\xBB\xBFHello \xEF\xBB\xBF", Some("bom.txt"));
        assert_eq!(article.text, "Hello \u{FEFF}");
    }
}
