//! HTML for the directory page.
//!
//! Every region of the page is always emitted so that the element ids stay
//! stable; regions the view doesn't need are hidden with `display: none`.

use vibe_core::page::{PageView, ProjectCard, RepositoryItem, RepositoryPanel};

const GITHUB_ICON_PATH: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z";

/// Live filtering for the repository panel, served from the static dir. The
/// search form still works without it.
pub const SEARCH_SCRIPT_TAG: &str = "<script src=\"search.js\" defer></script>\n";

pub fn render_page(view: &PageView) -> String {
    let title = escape(view.title());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n");
    html.push_str(SEARCH_SCRIPT_TAG);
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<header class=\"header\"><h1 id=\"org-name\">{title}</h1></header>\n"
    ));
    html.push_str("<main class=\"container\">\n");

    html.push_str(&format!(
        "<div id=\"loading\" class=\"loading\"{}>Loading projects...</div>\n",
        display(view.is_loading())
    ));

    html.push_str(&format!(
        "<div id=\"error\" class=\"error\"{}>{}</div>\n",
        display(view.error().is_some()),
        escape(view.error().unwrap_or_default())
    ));

    html.push_str(&format!(
        "<div id=\"projects-container\" class=\"projects-grid\"{}>\n",
        display(view.projects_visible())
    ));
    for project in view.projects() {
        html.push_str(&render_project_card(project));
    }
    html.push_str("</div>\n");

    html.push_str(&render_repositories_panel(view.repositories()));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_project_card(project: &ProjectCard) -> String {
    format!(
        concat!(
            "<a class=\"project-card\" href=\"{url}\" target=\"_blank\" ",
            "rel=\"noopener noreferrer\" aria-label=\"{label}\">",
            "<div class=\"project-name\">{name}</div>",
            "<div class=\"project-description\">{description}</div>",
            "</a>\n"
        ),
        url = escape(&project.url),
        label = escape(&project.aria_label()),
        name = escape(&project.name),
        description = escape(&project.description),
    )
}

fn render_repositories_panel(panel: Option<&RepositoryPanel>) -> String {
    let Some(panel) = panel else {
        return concat!(
            "<section id=\"repositories-panel\" class=\"repositories-panel\" style=\"display: none\">",
            "<div id=\"repositories-container\" class=\"repositories-list\"></div>",
            "</section>\n"
        )
        .to_string();
    };

    let mut html = String::from(
        "<section id=\"repositories-panel\" class=\"repositories-panel\">\n<h2>Repositories</h2>\n",
    );

    if panel.search_enabled() {
        html.push_str(&format!(
            concat!(
                "<form class=\"repo-search-form\" method=\"get\" action=\"/\" role=\"search\">",
                "<input type=\"search\" id=\"repo-search\" name=\"q\" class=\"repo-search\" ",
                "placeholder=\"Search repositories...\" autocomplete=\"off\" value=\"{}\">",
                "</form>\n"
            ),
            escape(panel.query())
        ));
    }

    html.push_str("<div id=\"repositories-container\" class=\"repositories-list\">\n");
    for item in panel.items() {
        html.push_str(&render_repository_item(item));
    }
    html.push_str("</div>\n</section>\n");

    html
}

fn render_repository_item(item: &RepositoryItem) -> String {
    let class = if item.hidden {
        "repo-item hidden"
    } else {
        "repo-item"
    };

    format!(
        concat!(
            "<a class=\"{class}\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" ",
            "aria-label=\"{label}\" data-repo-name=\"{key}\">",
            "<svg class=\"repo-icon\" viewBox=\"0 0 16 16\" fill=\"currentColor\"><path d=\"{icon}\"></path></svg>",
            "<span class=\"repo-name\">{name}</span>",
            "</a>\n"
        ),
        class = class,
        url = escape(&item.url),
        label = escape(&item.aria_label()),
        key = escape(&item.search_key),
        icon = GITHUB_ICON_PATH,
        name = escape(&item.name),
    )
}

fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " style=\"display: none\""
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
