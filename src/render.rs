use std::fmt;

use askama::Template;
use chrono::{DateTime, FixedOffset, Timelike};

use crate::error::Result;
use crate::filter::MatchedArticle;

const FILENAME_SUFFIX: &str = "-Brief.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Evening,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPeriod::Morning
        } else {
            DayPeriod::Evening
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPeriod::Morning => write!(f, "Morning"),
            DayPeriod::Evening => write!(f, "Evening"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestDocument {
    pub filename: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "digest.md", escape = "none")]
struct DigestTemplate<'a> {
    date: String,
    time: String,
    period: DayPeriod,
    keywords: String,
    articles: &'a [MatchedArticle],
}

/// `{YYYY-MM-DD}-{Morning|Evening}-Brief.md`, dated in `now`'s own offset.
pub fn digest_filename(now: &DateTime<FixedOffset>) -> String {
    format!(
        "{}-{}{}",
        now.format("%Y-%m-%d"),
        DayPeriod::from_hour(now.hour()),
        FILENAME_SUFFIX
    )
}

/// Render the digest. Pure: identical inputs give byte-identical output.
pub fn render(
    articles: &[MatchedArticle],
    keywords: &[String],
    now: &DateTime<FixedOffset>,
) -> Result<DigestDocument> {
    let template = DigestTemplate {
        date: now.format("%Y-%m-%d").to_string(),
        time: now.format("%H:%M").to_string(),
        period: DayPeriod::from_hour(now.hour()),
        keywords: keywords.join(", "),
        articles,
    };

    Ok(DigestDocument {
        filename: digest_filename(now),
        body: template.render()?,
    })
}
