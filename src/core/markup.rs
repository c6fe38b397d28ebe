// src/core/markup.rs

/// Read-only queries the lesson decoder needs from a parsed markup tree.
///
/// A node is cheap to copy around (a borrowed handle into a tree owned elsewhere);
/// every query returns fresh handles or owned text and never mutates the tree.
pub trait MarkupNode: Sized {
    /// Descendant `div`s carrying no `class` attribute, in document order.
    /// Each one is a candidate lesson layer.
    fn blocks(&self) -> Vec<Self>;

    /// Descendant `span`s, in document order.
    fn markers(&self) -> Vec<Self>;

    /// First descendant carrying `class`.
    fn find_by_class(&self, class: &str) -> Option<Self>;

    fn has_class(&self, class: &str) -> bool;

    /// All descendant text, whitespace-normalized.
    fn text(&self) -> String;

    /// Text of direct text children only, whitespace-normalized.
    fn own_text(&self) -> String;
}
