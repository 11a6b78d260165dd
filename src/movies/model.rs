use serde::{Deserialize, Deserializer};

/// A movie lookup outcome.
///
/// Field names follow the OMDb JSON payload. Equality is structural over
/// every field, ratings included: the same title with different scores is a
/// different movie.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Movie {
    #[serde(rename = "Response", default, deserialize_with = "deserialize_flag")]
    pub found: bool,
    #[serde(rename = "Error", default)]
    pub error_message: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

/// One rating source and its score, e.g. ("Rotten Tomatoes", "87%").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Movie {
    /// A failed lookup carrying only its message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The error message, if present and non-empty.
    pub fn error_text(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|msg| !msg.is_empty())
    }

    pub fn has_error(&self) -> bool {
        self.error_text().is_some()
    }

    /// One `"\n<value> (<source>)"` line per rating, in order.
    pub fn rating_summary(&self) -> String {
        self.ratings.iter().fold(String::new(), |mut summary, rating| {
            summary.push('\n');
            summary.push_str(&rating.summary());
            summary
        })
    }
}

impl Rating {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} ({})", self.value, self.short_source())
    }

    /// Short code for well-known sources; anything else passes through.
    pub fn short_source(&self) -> &str {
        let source = self.source.as_str();
        if source.contains("Internet Movie Database") {
            "IMDB"
        } else if source.contains("Rotten Tomatoes") {
            "RT"
        } else if source.contains("Metacritic") {
            "Metac"
        } else {
            source
        }
    }
}

/// OMDb sends `"Response": "True"`; accept real booleans too.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => text.trim().eq_ignore_ascii_case("true"),
    })
}
