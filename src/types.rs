use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the feed and by the date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Classification of a record's media. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other(s),
        }
    }
}

impl From<MediaType> for String {
    fn from(mt: MediaType) -> Self {
        match mt {
            MediaType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One astronomy-picture-of-the-day entry as served by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Record {
    pub fn is_image(&self) -> bool {
        matches!(self.media_type, MediaType::Image)
    }

    /// Calendar date of the entry, `None` when the feed value is malformed.
    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Source for the detail view: the high-resolution image when there is one.
    pub fn detail_src(&self) -> &str {
        self.hdurl.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.url)
    }

    /// Caption shown under a gallery card.
    pub fn caption(&self) -> String {
        format!("{} — {}", self.title, self.date)
    }
}

#[cfg(test)]
pub(crate) fn record(title: &str, date: &str, media_type: &str, url: &str) -> Record {
    Record {
        title: title.to_string(),
        date: date.to_string(),
        explanation: format!("About {title}"),
        media_type: MediaType::from(media_type.to_string()),
        url: url.to_string(),
        hdurl: None,
        copyright: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_keeps_unknown_values() {
        let mt: MediaType = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(mt, MediaType::Other("other".into()));
        assert_eq!(serde_json::to_string(&mt).unwrap(), "\"other\"");
        let mt: MediaType = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(mt, MediaType::Image);
    }

    #[test]
    fn record_defaults_optional_fields() {
        let r: Record = serde_json::from_str(
            r#"{"title":"T","date":"2024-03-01","media_type":"video","service_version":"v1"}"#,
        )
        .unwrap();
        assert_eq!(r.url, "");
        assert_eq!(r.explanation, "");
        assert!(r.hdurl.is_none());
        assert!(!r.is_image());
    }

    #[test]
    fn detail_src_prefers_hdurl() {
        let mut r = record("A", "2024-01-01", "image", "a.jpg");
        assert_eq!(r.detail_src(), "a.jpg");
        r.hdurl = Some("a_hd.jpg".into());
        assert_eq!(r.detail_src(), "a_hd.jpg");
        r.hdurl = Some(String::new());
        assert_eq!(r.detail_src(), "a.jpg");
    }

    #[test]
    fn caption_and_date() {
        let r = record("A", "2024-01-01", "image", "a.jpg");
        assert_eq!(r.caption(), "A — 2024-01-01");
        assert_eq!(r.date_value(), NaiveDate::from_ymd_opt(2024, 1, 1));
        let bad = record("B", "Jan 1", "image", "b.jpg");
        assert_eq!(bad.date_value(), None);
    }
}
