// crates/heritage-cli/src/render.rs
//! Plain-text and XML output for the CLI commands.

use heritage_core::prelude::*;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One listing line: `id  Name: Tagline (County)`.
pub fn site_line(site: &Site) -> String {
    format!("{:<24} {} ({})", site.id(), site.headline(), site.location_label())
}

/// Full record view for `heritage-cli site <ID>`.
pub fn site_detail(site: &Site) -> String {
    let mut out = Vec::new();
    out.push(format!("Site: {}", site.name()));
    out.push(format!("Id: {}", site.id()));
    if let Some(tagline) = site.tagline() {
        out.push(format!("Tagline: {tagline}"));
    }
    if let Some(kind) = site.site_type() {
        out.push(format!("Type: {}", format_label(kind)));
    }
    if let Some(era) = site.era() {
        out.push(format!("Era: {era}"));
    }
    out.push(format!("Location: {}", site.location_label()));
    if let Some(region) = site.region() {
        out.push(format!("Region: {region}"));
    }
    out.push(format!("Score: {}", site_score(site)));
    if let Some(summary) = site.summary() {
        out.push(String::new());
        out.push(summary);
    }

    push_list(&mut out, "Highlights", site.highlights());
    push_list(&mut out, "Tags", site.tags());
    push_list(&mut out, "Suitable for", site.suitable_for());
    push_rows(&mut out, "Admission", &site.admission_rows());
    push_rows(&mut out, "Resources", &site.resource_rows());

    if let Some(website) = site.contact.as_ref().and_then(|c| c.website.as_deref()) {
        out.push(String::new());
        out.push(format!("Website: {website}"));
    }
    if let Some(url) = site.hero_image_url() {
        out.push(format!("Image: {url}"));
    }
    out.join("\n")
}

fn push_list(out: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push(String::new());
    out.push(format!("{title}:"));
    out.extend(items.iter().map(|i| format!("  - {i}")));
}

fn push_rows(out: &mut Vec<String>, title: &str, rows: &[FlatRow]) {
    if rows.is_empty() {
        return;
    }
    out.push(String::new());
    out.push(format!("{title}:"));
    out.extend(rows.iter().map(|r| format!("  {}: {}", r.label, r.value)));
}

/// One line of the seasonal digest.
pub fn seasonal_line(entry: &SeasonalAccess<'_>) -> String {
    let mut parts = vec![entry.name.to_owned()];
    if let Some(status) = entry.current_status {
        parts.push(status.to_owned());
    }
    if !entry.special_closures.is_empty() {
        parts.push(format!("closed: {}", entry.special_closures.join(", ")));
    }
    if !entry.busy_periods.is_empty() {
        parts.push(format!("busy: {}", entry.busy_periods.join(", ")));
    }
    if entry.guided_tours > 0 {
        parts.push(format!("{} bookable tour(s)", entry.guided_tours));
    }
    parts.join(" | ")
}

/// Render sitemap entries as a `urlset` document.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 96);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn newgrange() -> Site {
        serde_json::from_str(
            r#"{
                "id": "newgrange",
                "name": "Newgrange",
                "tagline": "Older than Stonehenge",
                "type": "passageTomb",
                "location": { "address": { "county": "Meath", "region": "Leinster" } },
                "visitingInformation": { "admissionPrices": { "adult": 10, "heritageCard": true } },
                "tags": ["Neolithic"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn listing_line_has_id_headline_and_place() {
        let line = site_line(&newgrange());
        assert!(line.starts_with("newgrange "));
        assert!(line.ends_with("Newgrange: Older than Stonehenge (Meath)"));
    }

    #[test]
    fn detail_includes_admission_rows() {
        let detail = site_detail(&newgrange());
        assert!(detail.contains("Type: Passage Tomb"));
        assert!(detail.contains("  Adult: €10.00"));
        assert!(detail.contains("  Heritage Card: Available"));
        assert!(detail.contains("  - Neolithic"));
        assert!(!detail.contains("Resources:"));
    }

    #[test]
    fn sitemap_xml_escapes_locations() {
        let entries = vec![SitemapEntry {
            loc: "https://heritage.example/sites/a&b".into(),
            lastmod: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }];
        let xml = sitemap_xml(&entries);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("<loc>https://heritage.example/sites/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn escape_xml_covers_all_entities() {
        assert_eq!(
            escape_xml(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
    }
}
