use gdeltdoc_client::{Article, TimelineResult};

pub fn render_articles(articles: &[Article]) -> String {
    let mut lines = Vec::with_capacity(articles.len() * 3 + 2);
    for (i, article) in articles.iter().enumerate() {
        lines.push(format!("{:>3}. {}", i + 1, article.title));
        lines.push(format!("     {}", article.url));
        lines.push(format!(
            "     {} | {} | {} | {}",
            article.seen_date, article.domain, article.language, article.source_country
        ));
    }
    lines.push(format!("{} article(s)", articles.len()));
    lines.push(String::new());
    lines.join("\n")
}

/// Tab-separated table, one column per series in upstream order.
pub fn render_timeline(timeline: &TimelineResult) -> String {
    let with_counts = timeline.rows.iter().any(|r| r.all_articles.is_some());

    let mut header = vec!["timestamp".to_string()];
    header.extend(timeline.series_names.iter().cloned());
    if with_counts {
        header.push("all_articles".to_string());
    }
    let mut lines = vec![header.join("\t")];

    for row in &timeline.rows {
        let mut cells = vec![row.timestamp.format("%Y-%m-%d %H:%M").to_string()];
        cells.extend(timeline.series_names.iter().map(|name| {
            row.series
                .get(name)
                .map_or_else(String::new, ToString::to_string)
        }));
        if with_counts {
            cells.push(row.all_articles.map_or_else(String::new, |n| n.to_string()));
        }
        lines.push(cells.join("\t"));
    }
    lines.push(String::new());
    lines.join("\n")
}
