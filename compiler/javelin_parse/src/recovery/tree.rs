//! The recovered-element tree.
//!
//! Nodes live in one arena vector and point at their parent by index.
//! A node is either a complete element taken whole from a reduction or a
//! container opened by a header or a `{` whose closing brace has not been
//! seen. Only containers are written back into their declarations.

use javelin_ir::ast::{DeclId, ImportDecl, PackageDecl, StmtId};
use javelin_ir::Span;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Unit { package: Option<PackageDecl> },
    /// `None` is the root of a class-body fragment.
    Type(Option<DeclId>),
    Field(DeclId),
    Method(DeclId),
    Initializer(DeclId),
    /// A nested `{ ... }` inside a body.
    Block,
    Statement(StmtId),
    Import(ImportDecl),
}

impl NodeKind {
    /// Whether a node of this kind may hold `child`.
    pub fn holds(&self, child: &NodeKind) -> bool {
        match self {
            NodeKind::Unit { .. } => matches!(child, NodeKind::Type(_) | NodeKind::Import(_)),
            NodeKind::Type(_) => matches!(
                child,
                NodeKind::Type(_)
                    | NodeKind::Field(_)
                    | NodeKind::Method(_)
                    | NodeKind::Initializer(_)
            ),
            NodeKind::Method(_) | NodeKind::Initializer(_) | NodeKind::Block => {
                matches!(child, NodeKind::Statement(_) | NodeKind::Type(_))
            }
            NodeKind::Field(_) | NodeKind::Statement(_) | NodeKind::Import(_) => false,
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(
            self,
            NodeKind::Field(_) | NodeKind::Method(_) | NodeKind::Initializer(_)
        )
    }

    /// Bodies that hold statements.
    pub fn has_statements(&self) -> bool {
        matches!(
            self,
            NodeKind::Method(_) | NodeKind::Initializer(_) | NodeKind::Block
        )
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Open braces not yet matched.
    pub balance: u32,
    /// The `{` that opened this node's body.
    pub brace: Option<Span>,
    pub span: Span,
    /// Built from a header or a brace; its contents come from the tree.
    pub open: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct RecoveryTree {
    nodes: Vec<Node>,
}

impl RecoveryTree {
    pub fn new(kind: NodeKind, span: Span, balance: u32) -> Self {
        RecoveryTree {
            nodes: vec![Node {
                kind,
                parent: None,
                children: Vec::new(),
                balance,
                brace: None,
                span,
                open: true,
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add(&mut self, parent: NodeId, kind: NodeKind, span: Span, open: bool) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            balance: 0,
            brace: None,
            span,
            open,
        });
        self.node_mut(parent).children.push(id);
        id
    }

    /// Stretch `id` to reach `end`. Ancestors catch up in [`settle`].
    ///
    /// [`settle`]: RecoveryTree::settle
    pub fn extend(&mut self, id: NodeId, end: u32) {
        let node = self.node_mut(id);
        node.span = node.span.extend_to(end);
    }

    /// Stretch every node over its descendants. A child is always stored
    /// after its parent, so one backward pass suffices.
    pub fn settle(&mut self) {
        for index in (1..self.nodes.len()).rev() {
            let end = self.nodes[index].span.end;
            if let Some(parent) = self.nodes[index].parent {
                let parent = &mut self.nodes[parent.index()];
                parent.span = parent.span.extend_to(end);
            }
        }
    }

    /// The last type container directly under `id`.
    pub fn last_open_type(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.iter().rev().copied().find(|child| {
            let node = self.node(*child);
            node.open && matches!(node.kind, NodeKind::Type(Some(_)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeId, NodeKind, RecoveryTree};
    use javelin_ir::ast::{DeclId, StmtId};
    use javelin_ir::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn children_stretch_their_ancestors() {
        let mut tree = RecoveryTree::new(NodeKind::Unit { package: None }, Span::point(0), 0);
        let ty = tree.add(
            NodeId::ROOT,
            NodeKind::Type(Some(DeclId::new(0))),
            Span::new(0, 10),
            true,
        );
        let method = tree.add(ty, NodeKind::Method(DeclId::new(1)), Span::new(12, 20), true);
        tree.add(method, NodeKind::Statement(StmtId::new(0)), Span::new(22, 30), false);
        assert_eq!(tree.node(ty).span, Span::new(0, 10));

        tree.settle();
        assert_eq!(tree.node(NodeId::ROOT).span, Span::new(0, 30));
        assert_eq!(tree.node(ty).span, Span::new(0, 30));
        assert_eq!(tree.node(method).children.len(), 1);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn containment_rules() {
        let ty = NodeKind::Type(None);
        assert!(ty.holds(&NodeKind::Method(DeclId::new(0))));
        assert!(!ty.holds(&NodeKind::Statement(StmtId::new(0))));
        assert!(NodeKind::Block.holds(&NodeKind::Statement(StmtId::new(0))));
        assert!(NodeKind::Block.holds(&NodeKind::Type(Some(DeclId::new(0)))));
        assert!(!NodeKind::Unit { package: None }.holds(&NodeKind::Field(DeclId::new(0))));
    }

    #[test]
    fn only_open_types_are_reentered() {
        let mut tree = RecoveryTree::new(NodeKind::Unit { package: None }, Span::point(0), 0);
        tree.add(NodeId::ROOT, NodeKind::Type(Some(DeclId::new(0))), Span::new(0, 5), false);
        assert_eq!(tree.last_open_type(NodeId::ROOT), None);
        let open = tree.add(
            NodeId::ROOT,
            NodeKind::Type(Some(DeclId::new(1))),
            Span::new(6, 9),
            true,
        );
        assert_eq!(tree.last_open_type(NodeId::ROOT), Some(open));
    }
}
