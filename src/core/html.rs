// src/core/html.rs
// `MarkupNode` over scraper's element handles.

use scraper::{ElementRef, Html};
use scraper::node::Element;

use super::markup::MarkupNode;
use super::sanitize::normalize_ws;

fn descendant_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    // descendants() yields the node itself first
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

fn is_classless_div(el: &Element) -> bool {
    el.name().eq_ignore_ascii_case("div") && el.attr("class").is_none()
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn blocks(&self) -> Vec<Self> {
        descendant_elements(*self)
            .filter(|e| is_classless_div(e.value()))
            .collect()
    }

    fn markers(&self) -> Vec<Self> {
        descendant_elements(*self)
            .filter(|e| e.value().name().eq_ignore_ascii_case("span"))
            .collect()
    }

    fn find_by_class(&self, class: &str) -> Option<Self> {
        descendant_elements(*self).find(|e| MarkupNode::has_class(e, class))
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn text(&self) -> String {
        normalize_ws(&ElementRef::text(self).collect::<String>())
    }

    fn own_text(&self) -> String {
        let raw: String = self
            .children()
            .filter_map(|n| n.value().as_text().map(|t| &**t))
            .collect();
        normalize_ws(&raw)
    }
}

/// Parse a cell's inner HTML. Query the result through `root_element()`.
pub fn parse_fragment(markup: &str) -> Html {
    Html::parse_fragment(markup)
}
