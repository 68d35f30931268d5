//! Markdown syntax tree consumed by the renderer, plus the depth-first
//! traversal driver that feeds it to a [`NodeVisitor`].

/// Handle to a node inside an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Column alignment declared by a table delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlignment {
    #[default]
    Unset,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading { level: u8 },
    Text(String),
    Code(String),
    CodeBlock { literal: String, info: String },
    Strong,
    Emphasis,
    Link { destination: String, title: String },
    List { ordered: bool, start: Option<u64> },
    Item,
    BlockQuote,
    Hardbreak,
    Softbreak,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell { alignment: CellAlignment },
    /// A construct the parser knows but the renderer has no rule for.
    Unknown(String),
}

impl NodeKind {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Text(_) => "Text",
            NodeKind::Code(_) => "Code",
            NodeKind::CodeBlock { .. } => "CodeBlock",
            NodeKind::Strong => "Strong",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Link { .. } => "Link",
            NodeKind::List { .. } => "List",
            NodeKind::Item => "Item",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::Hardbreak => "Hardbreak",
            NodeKind::Softbreak => "Softbreak",
            NodeKind::Table => "Table",
            NodeKind::TableHead => "TableHead",
            NodeKind::TableBody => "TableBody",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell { .. } => "TableCell",
            NodeKind::Unknown(name) => name,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree. The root is always a [`NodeKind::Document`].
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `kind` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Walks the tree depth-first, left to right, calling `visitor` once on
    /// enter and once on leave for every node.
    ///
    /// `SkipChildren` returned on enter jumps straight to that node's leave
    /// event; `Terminate` stops the walk without further events.
    pub fn walk<V: NodeVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        let mut stack = vec![(self.root(), true)];

        while let Some((id, entering)) = stack.pop() {
            match visitor.visit(self, id, entering)? {
                WalkStatus::Terminate => break,
                status => {
                    if entering {
                        stack.push((id, false));
                        if status == WalkStatus::Continue {
                            for child in self.children(id).iter().rev() {
                                stack.push((*child, true));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Signal returned by a visitor to steer the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    SkipChildren,
    Terminate,
}

/// Receives `(node, entering)` events from [`Ast::walk`].
pub trait NodeVisitor {
    type Error;

    fn visit(&mut self, ast: &Ast, node: NodeId, entering: bool)
        -> Result<WalkStatus, Self::Error>;
}
