//! Simple printing implementation of the trie structure.
use super::nodes::{Node, NodeRef};
use super::Trie;
use crate::store::NodeStore;
use std::fmt::Display;

impl<S: NodeStore> Display for Trie<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.root.is_empty() {
            return write!(f, "Trie {{ EMPTY }}");
        }
        match self.resolve(&self.root) {
            Ok(node) => self.fmt_node(f, &node, 0),
            Err(_) => write!(f, "Trie {{ <unresolvable root> }}"),
        }
    }
}

impl<S: NodeStore> Trie<S> {
    fn fmt_ref(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        node_ref: &NodeRef,
        indent: usize,
    ) -> std::fmt::Result {
        match self.resolve(node_ref) {
            Ok(node) => self.fmt_node(f, &node, indent),
            Err(_) => match node_ref {
                NodeRef::Hash(hash) => {
                    write!(f, "{}Unresolved {{ {hash} }}", " ".repeat(indent))
                }
                _ => write!(f, "{}Unresolved", " ".repeat(indent)),
            },
        }
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        node: &Node,
        indent: usize,
    ) -> std::fmt::Result {
        write!(f, "{}", " ".repeat(indent))?;
        match node {
            Node::Empty => write!(f, "Empty"),
            Node::Leaf(leaf) => write!(
                f,
                "Leaf {{ path: {:?}, value: {:?} }}",
                leaf.path.to_vec(),
                leaf.value
            ),
            Node::Extension(ext) => {
                write!(f, "Extension {:?}", ext.path.to_vec())?;
                writeln!(f)?;
                self.fmt_ref(f, &ext.child, indent + 4)
            }
            Node::Branch(branch) => {
                write!(f, "Branch {{ value: {:?} }}", branch.value)?;
                for child in &branch.children {
                    writeln!(f)?;
                    if child.is_empty() {
                        write!(f, "{}None", " ".repeat(indent + 4))?;
                    } else {
                        self.fmt_ref(f, child, indent + 4)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use alloy_primitives::Bytes;

    #[test]
    fn renders_the_structure() {
        let mut trie = Trie::new(MemoryStore::new());
        assert_eq!(trie.to_string(), "Trie { EMPTY }");

        trie.insert(b"do", Bytes::from_static(b"verb")).unwrap();
        trie.insert(b"dog", Bytes::from_static(b"puppy")).unwrap();

        let rendered = trie.to_string();
        assert!(rendered.starts_with("Extension"));
        assert!(rendered.contains("Branch"));
        assert!(rendered.contains("puppy"));
    }
}
