use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Public paths listed in the sitemap; the empty path is the homepage.
pub const SITE_PATHS: [&str; 6] = [
    "",
    "/property-management-kitchener-waterloo",
    "/areas/kitchener",
    "/areas/waterloo",
    "/areas/cambridge",
    "/areas/guelph",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

pub fn entries(base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    SITE_PATHS
        .iter()
        .map(|path| {
            let homepage = path.is_empty();
            SitemapEntry {
                url: format!("{base_url}{}", if homepage { "/" } else { *path }),
                last_modified: now,
                change_frequency: if homepage {
                    ChangeFrequency::Daily
                } else {
                    ChangeFrequency::Weekly
                },
                priority: if homepage { 1.0 } else { 0.7 },
            }
        })
        .collect()
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 24, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn homepage_is_daily_with_top_priority() {
        let entries = entries("https://chesterfield.group/", fixed_now());
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].url, "https://chesterfield.group/");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[0].priority, 1.0);
    }

    #[test]
    fn area_pages_are_weekly() {
        let entries = entries("https://chesterfield.group", fixed_now());
        let guelph = entries
            .iter()
            .find(|entry| entry.url.ends_with("/areas/guelph"))
            .expect("guelph listed");
        assert_eq!(guelph.url, "https://chesterfield.group/areas/guelph");
        assert_eq!(guelph.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(guelph.priority, 0.7);
    }

    #[test]
    fn xml_contains_escaped_locations() {
        let xml = render_xml(&entries("https://example.com/?a=1&b=2", fixed_now()));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2/</loc>"));
        assert!(xml.contains("<lastmod>2025-09-24T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert_eq!(xml.matches("<url>").count(), 6);
    }
}
