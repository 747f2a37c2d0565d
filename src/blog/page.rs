use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{
        palette::tailwind::{BLUE, SLATE},
        Color, Modifier, Style, Stylize,
    },
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use super::post::{paragraphs, BlogPost, NavLink, RelatedPost};

const HEADER_STYLE: Style = Style::new()
    .fg(SLATE.c100)
    .bg(BLUE.c800)
    .add_modifier(Modifier::BOLD);
const ACCENT_FG: Color = BLUE.c400;
const MUTED_FG: Color = SLATE.c400;
const TEXT_FG: Color = SLATE.c200;

/// The whole page as data: one post, the navigation links, the related
/// posts, and the footer fields. Rendering is a pure function of these
/// records.
#[derive(Debug, Clone)]
pub struct BlogPage {
    pub site_title: String,
    pub post: BlogPost,
    pub links: Vec<NavLink>,
    pub related: Vec<RelatedPost>,
    pub year: i32,
    pub site_author: String,
}

impl BlogPage {
    /// The hard-coded page shown by the `blog` subcommand.
    pub fn sample() -> Self {
        Self {
            site_title: "The Terminal Gazette".to_string(),
            post: BlogPost {
                title: "Small Widgets, Plain Data".to_string(),
                author: "Morgan Reyes".to_string(),
                date: "September 17, 2025".to_string(),
                body: "Widgets are the building blocks of a terminal page. Splitting the layout into small, reusable pieces keeps each one easy to read and easy to maintain.\n\nData should flow one way: the page owns its records and every section renders only the fields it is handed. Nothing here holds state, so the same records always produce the same screen.".to_string(),
            },
            links: vec![
                NavLink {
                    href: "#home".to_string(),
                    label: "Home".to_string(),
                },
                NavLink {
                    href: "#posts".to_string(),
                    label: "Posts".to_string(),
                },
                NavLink {
                    href: "#about".to_string(),
                    label: "About".to_string(),
                },
                NavLink {
                    href: "#contact".to_string(),
                    label: "Contact".to_string(),
                },
            ],
            related: vec![
                RelatedPost {
                    title: "Laying Out Panes with Constraints".to_string(),
                    href: "#layout".to_string(),
                },
                RelatedPost {
                    title: "Keeping State Out of Widgets".to_string(),
                    href: "#state".to_string(),
                },
                RelatedPost {
                    title: "Styling Text in the Terminal".to_string(),
                    href: "#styles".to_string(),
                },
            ],
            year: Local::now().year(),
            site_author: "The Terminal Gazette".to_string(),
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.site_title.as_str())
            .style(HEADER_STYLE)
            .centered()
            .render(area, buf);
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for link in &self.links {
            if !spans.is_empty() {
                spans.push("   ".into());
            }
            spans.push(Span::styled(
                link.label.as_str(),
                Style::new().fg(ACCENT_FG),
            ));
            spans.push(Span::styled(
                format!(" [{}]", link.href),
                Style::new().fg(MUTED_FG),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_article(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled(self.post.title.as_str(), Style::new().fg(TEXT_FG).bold()),
            Line::styled(
                format!("By {} • {}", self.post.author, self.post.date),
                Style::new().fg(MUTED_FG),
            ),
        ];
        for paragraph in paragraphs(&self.post.body) {
            lines.push(Line::raw(""));
            lines.push(Line::styled(paragraph, Style::new().fg(TEXT_FG)));
        }
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::styled(
            "Related posts",
            Style::new().fg(TEXT_FG).bold(),
        )];
        for related in &self.related {
            lines.push(Line::from(vec![
                Span::raw(" • "),
                Span::styled(related.title.as_str(), Style::new().fg(ACCENT_FG)),
                Span::styled(format!(" [{}]", related.href), Style::new().fg(MUTED_FG)),
            ]));
        }
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(format!(
            "© {} {}. All rights reserved.",
            self.year, self.site_author
        ))
        .style(Style::new().fg(MUTED_FG))
        .centered()
        .render(area, buf);
    }
}

impl Widget for &BlogPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, nav, main, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);
        // article and sidebar share the main area on a 2:1 grid
        let [article, sidebar] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(main);

        self.render_header(header, buf);
        self.render_nav(nav, buf);
        self.render_article(article, buf);
        self.render_sidebar(sidebar, buf);
        self.render_footer(footer, buf);
    }
}
