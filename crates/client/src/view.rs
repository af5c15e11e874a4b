//! Plain-text rendering of paginated tables for the terminal.

use examdesk_common::{cell_text, BaseFilters, PaginatedResponse, TableHeader, TableResource};

use crate::i18n::{translate, translate_with, translator, Locale};

pub fn render_table<T: TableResource>(rows: &[T], headers: &[TableHeader]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| headers.iter().map(|h| cell_text(row, &h.key)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{v}{}", " ".repeat(w - v.chars().count())))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().map(|h| h.label.as_str()).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

/// Table plus a localized page footer. Headers are built fresh for `locale`.
/// When more pages follow, the footer names the page `filters` would fetch next.
pub fn render_page<T: TableResource>(
    page: &PaginatedResponse<T>,
    filters: &BaseFilters,
    locale: Locale,
) -> String {
    if page.is_empty() {
        return translate(locale, "no_results");
    }
    let headers = T::table_header(&translator(locale));
    let current = page.current_page.to_string();
    let pages = page.pages_count.to_string();
    let footer = translate_with(
        locale,
        "page_summary",
        &[("current", current.as_str()), ("pages", pages.as_str())],
    );
    let mut out = format!("{}\n\n{footer}", render_table(&page.items, &headers));
    if page.has_next_page() {
        let next = filters.next_page().page_number().to_string();
        out.push('\n');
        out.push_str(&translate_with(locale, "next_page_hint", &[("next", next.as_str())]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use examdesk_common::{ManagedUser, Role};

    fn users() -> Vec<ManagedUser> {
        vec![
            ManagedUser {
                id: 1,
                full_name: "Ann".to_string(),
                email: Some("ann@x.com".to_string()),
                is_active: true,
                roles: vec![Role::named("Admin")],
            },
            ManagedUser {
                id: 22,
                full_name: "Bob".to_string(),
                email: None,
                is_active: false,
                roles: vec![],
            },
        ]
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let headers = vec![TableHeader::new("id", "#"), TableHeader::new("fullName", "Name")];
        let out = render_table(&users(), &headers);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#  | Name");
        assert_eq!(lines[1], "---+-----");
        assert_eq!(lines[2], "1  | Ann");
        assert_eq!(lines[3], "22 | Bob");
    }

    #[test]
    fn test_render_page_footer_and_empty() {
        let filters = BaseFilters::new(2, 10).unwrap().with_search("a");
        let page = PaginatedResponse {
            items: users(),
            pages_count: 5,
            current_page: 2,
            kind: "user".to_string(),
            total_items: Some(42),
        };
        let out = render_page(&page, &filters, Locale::En);
        assert!(out.starts_with("#"));
        assert!(out.contains("Full name"));
        assert!(out.ends_with("Page 2 of 5\nMore results: --page 3"));

        let empty: PaginatedResponse<ManagedUser> = PaginatedResponse {
            items: vec![],
            pages_count: 0,
            current_page: 1,
            kind: String::new(),
            total_items: None,
        };
        assert_eq!(render_page(&empty, &BaseFilters::first_page(), Locale::En), "No results");
    }

    #[test]
    fn test_last_page_has_no_next_hint() {
        let filters = BaseFilters::new(5, 10).unwrap();
        let page = PaginatedResponse {
            items: users(),
            pages_count: 5,
            current_page: 5,
            kind: "user".to_string(),
            total_items: Some(42),
        };
        let out = render_page(&page, &filters, Locale::En);
        assert!(out.ends_with("Page 5 of 5"));
        assert!(!out.contains("--page"));
    }
}
