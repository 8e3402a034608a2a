use std::fs;

use component_splitter::{ChunkConfig, ComponentSplitter};
use more_asserts::assert_le;

#[test]
fn card_jsx() {
    let text = fs::read_to_string("tests/inputs/card.jsx").unwrap();

    let splitter = ComponentSplitter::new(40);
    let chunks = splitter.split_text(&text);

    for chunk in &chunks {
        assert_le!(chunk.chars().count(), 40);
    }
    insta::assert_debug_snapshot!("card_jsx_40", chunks);
}

#[test]
fn card_jsx_untrimmed() {
    let text = fs::read_to_string("tests/inputs/card.jsx").unwrap();

    let splitter = ComponentSplitter::new(ChunkConfig::new(40).with_trim(false));
    let chunks = splitter.split_text(&text);

    assert_eq!(chunks.join(""), text);
    insta::assert_debug_snapshot!("card_jsx_40_untrimmed", chunks);
}

#[test]
fn profile_vue() {
    let text = fs::read_to_string("tests/inputs/profile.vue").unwrap();

    let splitter = ComponentSplitter::new(48);
    let chunks = splitter.split_text(&text);

    for chunk in &chunks {
        assert_le!(chunk.chars().count(), 48);
    }
    insta::assert_debug_snapshot!("profile_vue_48", chunks);
}

#[test]
fn nav_svelte() {
    let text = fs::read_to_string("tests/inputs/nav.svelte").unwrap();

    let splitter = ComponentSplitter::new(40);
    let chunks = splitter.split_text(&text);

    for chunk in &chunks {
        assert_le!(chunk.chars().count(), 40);
    }
    insta::assert_debug_snapshot!("nav_svelte_40", chunks);
}
