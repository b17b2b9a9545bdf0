use std::fmt;

use crate::node::{NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;

impl GeneralizedSuffixTree {
    fn visualize_node(&self, node: NodeId) -> Vec<String> {
        let label = self.node(node).parent_edge()
            .map(|edge| self.edge(edge).label_string(&self.words))
            .unwrap_or_default();
        let head = format!("({}){}", node, label);
        let indent = " ".repeat(head.chars().count());

        let children: Vec<_> = self.node(node).child_edges().map(|(_, edge)| self.edge(edge).child()).collect();
        let mut lines = Vec::new();
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            for (j, line) in self.visualize_node(child).into_iter().enumerate() {
                let connector = match (i, j) {
                    (0, 0) => '┳',
                    (_, 0) if last => '┗',
                    (_, 0) => '┣',
                    _ if last => ' ',
                    _ => '┃',
                };
                let lead = if i == 0 && j == 0 { &head } else { &indent };
                lines.push(format!("{}{}{}", lead, connector, line));
            }
        }

        if lines.is_empty() {
            lines.push(head);
        }

        lines
    }

    /// One line per edge label with node ids, drawn as a tree below the root.
    pub fn visualize(&self) -> Vec<String> {
        self.visualize_node(ROOT)
    }
}

impl fmt::Display for GeneralizedSuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words: Vec<String> = self.words.iter().map(|word| word.iter().collect()).collect();
        writeln!(f, "{:?}", words)?;
        for line in self.visualize() {
            writeln!(f, "{}", line)?;
        }

        for node in self.nodes() {
            if let Some(link) = node.suffix_link() {
                writeln!(f, "Suffix link from {} to {}", node.id(), link)?;
            }
        }

        Ok(())
    }
}
