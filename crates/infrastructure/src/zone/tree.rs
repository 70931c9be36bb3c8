use ironwood_dns_domain::{canonical_name, Message, QueryMethod, ResourceRecord, Response};
use tracing::warn;

/// Index of a node in a [`ZoneTree`] arena. Only valid for the tree that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct ZoneNode {
    /// Single path segment; empty for the root.
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    records: Vec<ResourceRecord>,
}

/// Hierarchical store of authorities and their resource records.
///
/// Nodes live in an arena and reference each other by index, so the
/// parent back-reference carries no ownership: lifetime is governed
/// solely by the tree itself. Detaching a child with [`remove_child`]
/// leaves its subtree allocated but unreachable, which is fine for the
/// short editing sessions this store supports.
///
/// Mutation requires `&mut self`; the resolution engine only ever holds a
/// shared reference, so the tree cannot change mid-resolution.
///
/// [`remove_child`]: ZoneTree::remove_child
#[derive(Debug)]
pub struct ZoneTree {
    nodes: Vec<ZoneNode>,
}

impl ZoneTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![ZoneNode {
                label: String::new(),
                parent: None,
                children: Vec::new(),
                records: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates and attaches a new child under `parent`. Sibling labels are
    /// not required to be unique; a duplicate label shadows its elder in
    /// lookups.
    pub fn add_child(&mut self, parent: NodeId, label: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ZoneNode {
            label: label.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            records: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detaches `child` (and transitively its whole subtree) from
    /// `parent`. Succeeds only if `child` is currently a direct child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        match children.iter().position(|&c| c == child) {
            Some(index) => {
                children.remove(index);
                self.nodes[child.0].parent = None;
                true
            }
            None => false,
        }
    }

    /// Resolves `owner_path` from the root (`"."` or `""` meaning the root
    /// itself) and appends `record` to that node. Returns `false`, leaving
    /// the record dropped, when a path segment does not exist.
    pub fn add_record(&mut self, owner_path: &str, record: ResourceRecord) -> bool {
        match self.lookup_from_root(owner_path) {
            Some(node) => {
                self.nodes[node.0].records.push(record);
                true
            }
            None => false,
        }
    }

    pub fn child_by_label(&self, node: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].label == label)
    }

    /// Resolves a dotted address starting from `from`, skipping empty
    /// segments (which also makes a leading separator harmless). Fails if
    /// any segment is not found among the current node's children.
    pub fn lookup(&self, from: NodeId, address: &str) -> Option<NodeId> {
        let mut cursor = from;
        for label in address.split('.').filter(|segment| !segment.is_empty()) {
            cursor = self.child_by_label(cursor, label)?;
        }
        Some(cursor)
    }

    pub fn lookup_from_root(&self, address: &str) -> Option<NodeId> {
        self.lookup(self.root(), address)
    }

    /// Reconstructs the fully-qualified dotted address by walking parent
    /// references up to the root. The root's address is the empty string.
    pub fn address(&self, node: NodeId) -> String {
        let mut labels = Vec::new();
        let mut cursor = node;
        while let Some(parent) = self.nodes[cursor.0].parent {
            labels.push(self.nodes[cursor.0].label.as_str());
            cursor = parent;
        }
        labels.reverse();
        labels.join(".")
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.0].label
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn records(&self, node: NodeId) -> &[ResourceRecord] {
        &self.nodes[node.0].records
    }

    /// Answers a single-hop query from the records attached directly to
    /// `node`: a record whose owner equals the question name lands in
    /// `answers` when its type matches the requested type, in `authority`
    /// when it is a referral (NS or CNAME), in `additional` otherwise.
    /// Owner comparison is exact apart from leading-separator tolerance.
    pub fn query(&self, node: NodeId, request: &Message) -> Response {
        let mut response = Response::default();
        if request.method != QueryMethod::Iterative {
            warn!(method = %request.method, "unsupported query method, returning empty response");
            return response;
        }

        let requested = canonical_name(&request.question.name);
        for record in &self.nodes[node.0].records {
            if canonical_name(&record.owner) != requested {
                continue;
            }
            if record.record_type == request.question.record_type {
                response.answers.push(record.clone());
            } else if record.record_type.is_referral() {
                response.authority.push(record.clone());
            } else {
                response.additional.push(record.clone());
            }
        }
        response
    }

    /// Indented textual rendering of the tree, four dashes per depth
    /// level, the root shown as ".".
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root(), 0, &mut out);
        out
    }

    fn render_node(&self, node: NodeId, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("----");
        }
        if node == self.root() {
            out.push('.');
        } else {
            out.push_str(&self.nodes[node.0].label);
        }
        out.push('\n');
        for &child in &self.nodes[node.0].children {
            self.render_node(child, depth + 1, out);
        }
    }
}

impl Default for ZoneTree {
    fn default() -> Self {
        Self::new()
    }
}
