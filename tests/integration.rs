use gsuffix_tree::{validate, GeneralizedSuffixTree, TreeBuilder, TreeOptions, Verbosity, ROOT};
use indoc::indoc;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_log::test;

/// Follows `suffix` from the root and returns the labels of the edges it passes, restricted to
/// `word`'s ranges.
fn spell_path(tree: &GeneralizedSuffixTree, word: usize, suffix: &[char]) -> Vec<char> {
    let mut node = ROOT;
    let mut spelled = Vec::new();
    while spelled.len() < suffix.len() {
        let edge = match tree.node(node).child_edge(suffix[spelled.len()]) {
            Some(edge) => tree.edge(edge),
            None => break,
        };
        let label = edge.label_for(word, tree.words()).unwrap_or_else(|| edge.label(tree.words()));
        spelled.extend_from_slice(label);
        node = edge.child();
    }

    spelled
}

fn assert_valid(tree: &GeneralizedSuffixTree) {
    for check in validate::run_all(tree) {
        assert!(check.passed(), "{}\n{}", check, tree);
    }
}

#[test]
fn every_suffix_is_spelled_from_the_root() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#", "abxxab%", "äbxä\u{E000}"]).unwrap();
    assert_valid(&tree);

    for word in 0..tree.word_count() {
        let text = tree.words().get(word).unwrap();
        for start in 0..text.len() {
            assert_eq!(spell_path(&tree, word, &text[start..]), &text[start..]);
        }
    }
}

#[test]
fn single_word_scenario() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxac#"]).unwrap();
    assert_valid(&tree);

    // One edge per first character: both suffixes starting with 'x' share the root edge "xa".
    let x = tree.edge(tree.root().child_edge('x').unwrap());
    assert_eq!(x.label_string(tree.words()), "xa");
    assert_eq!(tree.node(x.child()).child_count(), 2);

    let ac = tree.find("ac#");
    assert_eq!(ac.len(), 1);
    assert!(tree.is_suffix("ac#"));
    assert!(tree.is_suffix("abxac#"));
    assert_eq!(tree.leaf_count(), 7);
}

#[test]
fn leaf_count_matches_word_length() {
    for word in &["banana$", "mississippi#", "abcdefg%", "aaaaaaa&", "ääää\u{E000}"] {
        let chars: Vec<char> = word.chars().collect();
        let tree = GeneralizedSuffixTree::from_words(&[word]).unwrap();
        assert_eq!(tree.leaf_count(), chars.len(), "{}", word);

        let mut paths: Vec<String> = tree.leaves().map(|leaf| tree.path_label(leaf.child())).collect();
        paths.sort();
        let mut suffixes: Vec<String> = (0..chars.len()).map(|i| chars[i..].iter().collect()).collect();
        suffixes.sort();
        assert_eq!(paths, suffixes);
    }
}

#[test]
fn two_words_share_edges() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#"]).unwrap();
    assert_valid(&tree);

    let shared: Vec<_> = tree.edges().filter(|e| e.has_word(0) && e.has_word(1)).collect();
    assert!(!shared.is_empty());

    // "abx" is spelled by a chain of shared edges from the root.
    let a = tree.edge(tree.root().child_edge('a').unwrap());
    assert!(a.has_word(0) && a.has_word(1));
    let bx = tree.edge(tree.node(a.child()).child_edge('b').unwrap());
    assert!(bx.has_word(0) && bx.has_word(1));
    assert_eq!(a.label_string(tree.words()) + &bx.label_string(tree.words()), "abx");
    assert_eq!(tree.edge_range(bx.id(), 0), Some((2, 3)));
    assert_eq!(tree.edge_range(bx.id(), 1), Some((2, 3)));
}

#[test]
fn common_prefix_is_one_chain() {
    let tree = GeneralizedSuffixTree::from_words(&["abcab$", "abcd#"]).unwrap();

    let ab = tree.edge(tree.root().child_edge('a').unwrap());
    assert_eq!(ab.label_string(tree.words()), "ab");
    let c = tree.edge(tree.node(ab.child()).child_edge('c').unwrap());
    for edge in &[ab, c] {
        assert_eq!(edge.word_indices().collect::<Vec<_>>(), vec![0, 1]);
    }
}

#[test]
fn ranges_spell_the_key_of_their_edge() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#", "abab%"]).unwrap();
    for edge in tree.edges() {
        let key = tree.node(edge.parent()).child_edges()
            .find(|&(_, id)| id == edge.id())
            .map(|(c, _)| c)
            .unwrap();
        for word in edge.word_indices() {
            let (begin, end) = tree.edge_range(edge.id(), word).unwrap();
            let text = tree.range_string(word, begin, end).unwrap();
            assert_eq!(text, edge.label_string(tree.words()));
            assert_eq!(text.chars().next(), Some(key));
        }
    }
}

#[test]
fn depth_tags_follow_the_edge_nesting() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxa$", "babxba#"]).unwrap();
    for (edge, depth) in tree.depth_tagged_edges() {
        let mut hops = 0;
        let mut node = edge.child();
        while let Some(parent_edge) = tree.node(node).parent_edge() {
            hops += 1;
            node = tree.edge(parent_edge).parent();
        }
        assert_eq!(hops, depth);
    }
}

#[test]
fn rendering() {
    let tree = GeneralizedSuffixTree::from_words(&["xabxac#"]).unwrap();
    assert_eq!(tree.to_string(), indoc!("
        [\"xabxac#\"]
        (0)┳(9)#
           ┣(6)a┳(2)bxac#
           ┃    ┗(7)c#
           ┣(3)bxac#
           ┣(8)c#
           ┗(4)xa┳(1)bxac#
                 ┗(5)c#
        Suffix link from 6 to 0
        Suffix link from 4 to 6
    "));

    let tree = GeneralizedSuffixTree::from_words(&["ab$", "b#"]).unwrap();
    assert_eq!(tree.visualize().join("\n"), indoc!("
        (0)┳(6)#
           ┣(3)$
           ┣(1)ab$
           ┗(4)b┳(5)#
                ┗(2)$")
    );
}

#[test]
fn builder_and_verbose_logging() {
    let mut builder = TreeBuilder::new().verbosity(Verbosity::Verbose);
    builder.add_word("testing$").add_word("festung#").add_word("estland%");
    let tree = builder.build().unwrap();

    assert_valid(&tree);
    assert_eq!(tree.longest_common_substring(), "est");
}

#[test]
fn unicode_terminators_scale_past_ascii() {
    let words: Vec<String> = (0..300u32)
        .map(|i| format!("w{}", std::char::from_u32(0xE000 + i).unwrap()))
        .collect();
    let tree = GeneralizedSuffixTree::from_words(&words).unwrap();

    assert_eq!(tree.word_count(), 300);
    assert_valid(&tree);

    let mut tree = GeneralizedSuffixTree::new();
    assert_eq!(tree.insert_word("ab\u{E000}"), Ok(0));
    assert_eq!(tree.word(0), Some("ab\u{E000}".to_owned()));
    assert_eq!(tree.find("b\u{E000}").len(), 1);
}

#[test]
fn random_words_build_valid_trees() {
    let mut rng = StdRng::seed_from_u64(2012);
    for _ in 0..300 {
        let count = rng.gen_range(1..6);
        let alphabet = &['a', 'b', 'é', '\u{1F600}'][..rng.gen_range(1..5)];
        let words: Vec<String> = (0..count)
            .map(|i| {
                let len = rng.gen_range(0..16);
                let mut word: String = (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();
                word.push(['$', '#', '\u{E000}', '\u{E001}', '\u{E002}'][i]);
                word
            })
            .collect();

        for &skip in &[true, false] {
            let options = TreeOptions::default().skip_shared_prefix(skip);
            let tree = GeneralizedSuffixTree::from_words_with(options, &words).unwrap();
            assert_eq!(tree.word_count(), count);
            assert_valid(&tree);
            assert_eq!(tree.leaf_count(), words.iter().map(|w| w.chars().count()).sum::<usize>());
        }
    }
}
