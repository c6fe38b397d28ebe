// src/timetable/segment.rs
// Cell markup → blocks of tagged markers, plus the warning panel text.
// Purely structural: nothing is validated here.

use crate::config::{DecodeOptions, RoleVocabulary};
use crate::core::MarkupNode;

use super::types::{Block, Marker, RoleTag, RoleTags, Segments};

pub fn segment<N: MarkupNode>(root: &N, opts: &DecodeOptions) -> Segments {
    let blocks = root
        .blocks()
        .iter()
        .map(|b| read_block(b, &opts.vocabulary))
        .collect();

    let warning = root
        .find_by_class(&opts.warning_panel_class)
        .map(|panel| panel.text());

    Segments { blocks, warning }
}

fn read_block<N: MarkupNode>(node: &N, vocab: &RoleVocabulary) -> Block {
    let markers = node
        .markers()
        .iter()
        .map(|m| Marker::new(m.text(), read_tags(m, vocab)))
        .collect();
    Block { markers, own_text: node.own_text() }
}

fn read_tags<N: MarkupNode>(node: &N, vocab: &RoleVocabulary) -> RoleTags {
    RoleTag::ALL
        .into_iter()
        .filter(|tag| node.has_class(class_for(vocab, *tag)))
        .collect()
}

fn class_for(vocab: &RoleVocabulary, tag: RoleTag) -> &str {
    match tag {
        RoleTag::Planned => &vocab.planned,
        RoleTag::Realized => &vocab.realized,
        RoleTag::Changed => &vocab.changed,
        RoleTag::MovedOrCanceled => &vocab.moved_or_canceled,
    }
}
