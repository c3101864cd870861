//! Plain-text rendering of a [`UIViewModel`].
//!
//! The output is line oriented so it can be printed after every change by the
//! stdin driver or compared verbatim in tests.

use crate::ui::viewmodel::{ChatView, DetailView, ExploreView, MapView, PageView, UIViewModel};
use std::fmt::Write;

/// Renders the whole frame.
#[must_use]
pub fn render(vm: &UIViewModel) -> String {
    let mut out = String::new();

    match &vm.page {
        PageView::Explore(view) => render_explore(&mut out, view),
        PageView::Event(view) => render_detail(&mut out, view),
        PageView::Chat(view) => render_chat(&mut out, view),
        PageView::NotFound { path } => {
            let _ = writeln!(out, "404: nothing at {path}");
        }
    }

    if let Some(status) = &vm.status {
        let _ = writeln!(out, "-- {status}");
    }
    out
}

fn render_explore(out: &mut String, view: &ExploreView) {
    let year = view
        .year
        .map_or_else(|| "any".to_string(), |y| y.to_string());
    let _ = writeln!(
        out,
        "Region: {} | Year: {year} | Topic: {}",
        view.region.as_deref().unwrap_or("anywhere"),
        view.topic.as_deref().unwrap_or("all topics"),
    );

    if !view.year_strip.is_empty() {
        let strip: Vec<String> = view.year_strip.iter().map(i32::to_string).collect();
        let _ = writeln!(out, "  years: {}", strip.join(" / "));
    }
    if let Some(banner) = &view.era_banner {
        let _ = writeln!(out, "  ~ {banner} ~");
    }
    if let Some(regions) = map_regions(&view.map) {
        let _ = writeln!(out, "  regions: {regions}");
    }
    if let Some(tooltip) = &view.tooltip {
        match tooltip.position {
            Some((x, y)) => {
                let _ = writeln!(out, "  map: {} @ ({x:.0}, {y:.0})", tooltip.text);
            }
            None => {
                let _ = writeln!(out, "  map: {}", tooltip.text);
            }
        }
    }

    let _ = writeln!(out, "Location: {}", view.location.input);
    for entry in &view.location.matches {
        let _ = writeln!(out, "  > {}", highlight(entry.name, &entry.highlight_ranges));
    }

    let _ = writeln!(out, "Search: {}", view.search_term);
    if let Some(suggestions) = &view.suggestions {
        for (index, title) in suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {index}. {title}");
        }
    }

    if view.loading {
        let _ = writeln!(out, "Loading events...");
    }

    if let Some(results) = &view.results {
        let _ = writeln!(out, "== Results ==");
        if let Some(message) = &results.empty_message {
            let _ = writeln!(out, "{message}");
        }
        for (index, card) in results.cards.iter().enumerate() {
            let _ = writeln!(out, "[{index}] {} ({}, {})", card.title, card.year, card.era);
            let _ = writeln!(out, "    {} | {}", card.category, card.region);
            let _ = writeln!(out, "    {}", card.description);
        }
    }
}

fn render_detail(out: &mut String, view: &DetailView) {
    let _ = writeln!(out, "# {}", view.title);
    let _ = writeln!(out, "image: {}", view.image_url);
    let _ = writeln!(out, "{}", view.content);
    let _ = writeln!(out, "[{}]", view.narration);
}

fn render_chat(out: &mut String, view: &ChatView) {
    for line in &view.lines {
        let who = if line.from_user { "you" } else { "historian" };
        let _ = writeln!(out, "{who}: {}", line.text);
    }
    if view.waiting {
        let _ = writeln!(out, "historian is typing...");
    }
}

fn map_regions(map: &MapView) -> Option<String> {
    let hovered = map
        .hovered
        .as_deref()
        .filter(|id| map.selected.as_deref() != Some(*id));
    match (map.selected.as_deref(), hovered) {
        (None, None) => None,
        (Some(selected), None) => Some(format!("*{selected}*")),
        (None, Some(hovered)) => Some(format!("~{hovered}~")),
        (Some(selected), Some(hovered)) => Some(format!("*{selected}* ~{hovered}~")),
    }
}

/// Brackets the character ranges of `text` that matched the typed input.
#[must_use]
pub fn highlight(text: &str, ranges: &[(usize, usize)]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        out.extend(&chars[pos..start]);
        out.push('[');
        out.extend(&chars[start..end]);
        out.push(']');
        pos = end;
    }
    out.extend(&chars[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::chat::Speaker;
    use crate::domain::{EventCard, EventSummary};
    use crate::ui::viewmodel::{ChatLine, LocationDropdown, ResultsDialog, NO_RESULTS};

    fn explore() -> ExploreView {
        ExploreView {
            region: Some("France".to_string()),
            year: Some(1800),
            year_strip: vec![1801, 1800, 1799],
            topic: Some("War".to_string()),
            search_term: String::new(),
            map: MapView::default(),
            tooltip: None,
            era_banner: None,
            suggestions: None,
            location: LocationDropdown {
                input: "France".to_string(),
                matches: vec![],
            },
            loading: false,
            results: None,
        }
    }

    #[test]
    fn highlight_brackets_ranges() {
        assert_eq!(highlight("Great Britain", &[(0, 1), (6, 8)]), "[G]reat [Br]itain");
        assert_eq!(highlight("Chad", &[]), "Chad");
        assert_eq!(highlight("Mali", &[(2, 10)]), "Ma[li]");
    }

    #[test]
    fn explore_page_lists_filters_and_cards() {
        let mut view = explore();
        view.results = Some(ResultsDialog {
            cards: vec![EventCard::from(&EventSummary::titled("Battle of Marengo"))],
            empty_message: None,
        });
        let text = render(&UIViewModel {
            page: PageView::Explore(view),
            status: None,
        });

        assert!(text.starts_with("Region: France | Year: 1800 | Topic: War\n"));
        assert!(text.contains("years: 1801 / 1800 / 1799"));
        assert!(text.contains("[0] Battle of Marengo (N/A, Unknown Era)"));
    }

    #[test]
    fn map_marks_selected_and_hovered_regions() {
        let mut view = explore();
        view.map = MapView {
            hovered: Some("ES".to_string()),
            selected: Some("FR".to_string()),
        };
        let text = render(&UIViewModel {
            page: PageView::Explore(view),
            status: None,
        });
        assert!(text.contains("  regions: *FR* ~ES~\n"));

        assert_eq!(
            map_regions(&MapView {
                hovered: Some("FR".to_string()),
                selected: Some("FR".to_string()),
            })
            .as_deref(),
            Some("*FR*")
        );
        assert_eq!(map_regions(&MapView::default()), None);
    }

    #[test]
    fn empty_results_show_message() {
        let mut view = explore();
        view.results = Some(ResultsDialog {
            cards: vec![],
            empty_message: Some(NO_RESULTS.to_string()),
        });
        let text = render(&UIViewModel {
            page: PageView::Explore(view),
            status: Some("Could not load events".to_string()),
        });

        assert!(text.contains(NO_RESULTS));
        assert!(text.ends_with("-- Could not load events\n"));
    }

    #[test]
    fn chat_marks_speakers() {
        let text = render(&UIViewModel {
            page: PageView::Chat(ChatView {
                lines: vec![
                    ChatLine::new(Speaker::Assistant, "Ask me anything about history"),
                    ChatLine::new(Speaker::User, "Who built Petra?"),
                ],
                waiting: true,
            }),
            status: None,
        });

        assert_eq!(
            text,
            "historian: Ask me anything about history\nyou: Who built Petra?\nhistorian is typing...\n"
        );
    }
}
