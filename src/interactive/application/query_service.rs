use scraper::{ElementRef, Html};

use crate::client::RequestGateway;
use crate::interactive::domain::models::{
    PageRequest, PageResponse, PreviewRequest, PreviewResponse, SuggestRequest, SuggestResponse,
};

/// Worker-side service turning channel requests into gateway calls.
///
/// Runs on the fetch worker threads; every response carries the identity of
/// its request so the event loop can drop anything that has gone stale.
pub struct QueryService {
    gateway: RequestGateway,
}

impl QueryService {
    pub fn new(gateway: RequestGateway) -> Self {
        Self { gateway }
    }

    pub fn fetch_page(&self, request: PageRequest) -> PageResponse {
        PageResponse {
            id: request.id,
            reset: request.reset,
            outcome: self.gateway.search(&request.query, request.offset),
        }
    }

    pub fn fetch_suggestions(&self, request: SuggestRequest) -> SuggestResponse {
        SuggestResponse {
            seq: request.seq,
            outcome: self.gateway.autocomplete(&request.token),
        }
    }

    pub fn fetch_preview(&self, request: PreviewRequest) -> PreviewResponse {
        let outcome = self
            .gateway
            .preview(&request.row_key)
            .map(|html| extract_preview_text(&html));
        PreviewResponse {
            index: request.index,
            row_key: request.row_key,
            outcome,
        }
    }
}

/// Extract readable text from a cached page.
///
/// The document is parsed in isolation; markup, scripts, and styles from the
/// preview can never leak into the host chrome. Script/style/head subtrees
/// are skipped entirely.
pub fn extract_preview_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);

    // Collapse runs of whitespace; blank-line separation is kept so block
    // structure stays readable in the panel.
    let mut out = String::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            if !out.ends_with("\n\n") && !out.is_empty() {
                out.push('\n');
            }
            continue;
        }
        let mut last_space = false;
        for c in line.chars() {
            if c.is_whitespace() {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            match el.value().name() {
                "script" | "style" | "head" | "noscript" | "template" => continue,
                name => {
                    collect_text(el, out);
                    if is_block_element(name) {
                        out.push('\n');
                    }
                }
            }
        } else if let Some(text) = child.value().as_text() {
            // Newlines inside a text node are soft; only block boundaries
            // break lines in the extracted text.
            for c in text.text.chars() {
                out.push(if c == '\n' || c == '\r' { ' ' } else { c });
            }
        }
    }
}

fn is_block_element(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "li"
            | "ul"
            | "ol"
            | "br"
            | "table"
            | "tr"
            | "blockquote"
            | "pre"
    )
}
