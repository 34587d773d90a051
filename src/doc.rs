//! In-memory documentation tree.
//!
//! The tree is deserialized from the `index.json` that the Crystal doc
//! generator emits: a single `program` type whose nested `types` form the
//! namespace hierarchy. It is read-only once loaded.

use serde::Deserialize;
use std::fmt;
use std::io::Read;

/// Name of the synthetic root type holding top-level definitions.
pub const TOP_LEVEL_NAMESPACE: &str = "Top Level Namespace";

/// Name of the pseudo-namespace documenting compiler macros.
pub const MACROS_NAMESPACE: &str = "Macros";

/// A loaded documentation tree for one library version.
#[derive(Debug, Clone, Deserialize)]
pub struct DocTree {
    #[serde(rename = "program")]
    root: DocNode,
}

impl DocTree {
    pub fn new(root: DocNode) -> Self {
        Self { root }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn root(&self) -> &DocNode {
        &self.root
    }

    /// Number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

/// What a documented type or namespace is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[default]
    Namespace,
    Module,
    Class,
    Struct,
    Enum,
    Alias,
}

impl From<&str> for NodeKind {
    fn from(kind: &str) -> Self {
        match kind {
            "module" => Self::Module,
            "class" => Self::Class,
            "struct" => Self::Struct,
            "enum" => Self::Enum,
            "alias" => Self::Alias,
            // lib, annotation and anything newer are plain namespaces here
            _ => Self::Namespace,
        }
    }
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Module => "module",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Alias => "alias",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    #[serde(rename = "filename")]
    pub file: String,
    #[serde(rename = "line_number")]
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A named reference to another type, such as a superclass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub full_name: String,
}

/// A constant, or an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            summary: None,
            doc: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl From<String> for Visibility {
    fn from(visibility: String) -> Self {
        match visibility.as_str() {
            "Protected" => Self::Protected,
            "Private" => Self::Private,
            _ => Self::Public,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        })
    }
}

/// A constructor, method or macro.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDefinition")]
pub struct Definition {
    pub name: String,
    pub args: String,
    pub summary: Option<String>,
    pub doc: Option<String>,
    pub is_abstract: bool,
    pub visibility: Visibility,
    pub location: Option<Location>,
}

impl Definition {
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: args.into(),
            summary: None,
            doc: None,
            is_abstract: false,
            visibility: Visibility::Public,
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// Wire shape of a definition; visibility is nested under `def`.
#[derive(Deserialize)]
struct RawDefinition {
    name: String,
    #[serde(default, rename = "args_string")]
    args: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    def: Option<RawDef>,
}

#[derive(Deserialize)]
struct RawDef {
    #[serde(default)]
    visibility: Visibility,
}

impl From<RawDefinition> for Definition {
    fn from(raw: RawDefinition) -> Self {
        Self {
            name: raw.name,
            args: raw.args,
            summary: raw.summary,
            doc: raw.doc,
            is_abstract: raw.is_abstract,
            visibility: raw.def.map(|d| d.visibility).unwrap_or_default(),
            location: raw.location,
        }
    }
}

/// A documented namespace, module, class, struct, enum or alias.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocNode {
    pub name: String,
    pub full_name: String,
    /// Kind as written in the documentation, such as `lib` or `annotation`.
    #[serde(default, rename = "kind")]
    pub documented_kind: String,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "alias")]
    pub is_alias: bool,
    #[serde(default, rename = "aliased")]
    pub alias_target: Option<String>,
    #[serde(default, rename = "enum")]
    pub is_enum: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub constructors: Vec<Definition>,
    #[serde(default)]
    pub class_methods: Vec<Definition>,
    #[serde(default)]
    pub instance_methods: Vec<Definition>,
    #[serde(default)]
    pub macros: Vec<Definition>,
    #[serde(default, rename = "types")]
    pub children: Vec<DocNode>,
}

impl DocNode {
    /// Create an empty node. The short name is the last `::` segment of `full_name`.
    pub fn new(kind: NodeKind, full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit("::")
            .next()
            .unwrap_or(full_name.as_str())
            .to_string();

        Self {
            name,
            full_name,
            documented_kind: kind.as_str().to_string(),
            is_enum: kind == NodeKind::Enum,
            is_alias: kind == NodeKind::Alias,
            ..Self::default()
        }
    }

    /// The conventional root, holding top-level definitions and namespaces.
    pub fn top_level() -> Self {
        Self::new(NodeKind::Module, TOP_LEVEL_NAMESPACE)
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from(self.documented_kind.as_str())
    }

    /// The documented kind, or the classified one when the document has none.
    pub fn kind_name(&self) -> &str {
        if self.documented_kind.is_empty() {
            self.kind().as_str()
        } else {
            &self.documented_kind
        }
    }

    /// Whether members of this node are shown without an owner prefix.
    pub fn is_pseudo_namespace(&self) -> bool {
        self.name == TOP_LEVEL_NAMESPACE || self.name == MACROS_NAMESPACE
    }

    /// Whether `name` is this node's short or fully qualified name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.full_name == name
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: Constant) -> Self {
        self.constants.push(constant);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, definition: Definition) -> Self {
        self.constructors.push(definition);
        self
    }

    #[must_use]
    pub fn with_class_method(mut self, definition: Definition) -> Self {
        self.class_methods.push(definition);
        self
    }

    #[must_use]
    pub fn with_instance_method(mut self, definition: Definition) -> Self {
        self.instance_methods.push(definition);
        self
    }

    #[must_use]
    pub fn with_macro(mut self, definition: Definition) -> Self {
        self.macros.push(definition);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn aliasing(mut self, target: impl Into<String>) -> Self {
        self.is_alias = true;
        self.alias_target = Some(target.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    const INDEX_JSON: &str = r#"{
        "repository_name": "crystal",
        "body": "<p>The Crystal standard library.</p>",
        "program": {
            "html_id": "crystal/toplevel",
            "path": "toplevel.html",
            "kind": "module",
            "full_name": "Top Level Namespace",
            "name": "Top Level Namespace",
            "abstract": false,
            "program": true,
            "enum": false,
            "alias": false,
            "const": false,
            "locations": [],
            "macros": [
                {
                    "html_id": "record(name,*properties)-macro",
                    "name": "record",
                    "args_string": "(name, *properties)",
                    "abstract": false,
                    "location": {"filename": "src/macros.cr", "line_number": 96, "url": null},
                    "def": {"name": "record", "args": [], "visibility": "Public", "body": ""}
                }
            ],
            "types": [
                {
                    "kind": "class",
                    "full_name": "Array(T)",
                    "name": "Array",
                    "abstract": false,
                    "superclass": {"kind": "class", "full_name": "Reference", "name": "Reference"},
                    "locations": [{"filename": "src/array.cr", "line_number": 47, "url": null}],
                    "summary": "<p>An <code>Array</code> is an ordered, integer-indexed collection.</p>",
                    "doc": null,
                    "instance_methods": [
                        {
                            "name": "push",
                            "args_string": "(value : T) : self",
                            "abstract": false,
                            "location": {"filename": "src/array.cr", "line_number": 1732, "url": null},
                            "def": {"visibility": "Public"}
                        },
                        {
                            "name": "check_index_out_of_bounds",
                            "abstract": false,
                            "location": null,
                            "def": {"visibility": "Private"}
                        }
                    ]
                },
                {
                    "kind": "annotation",
                    "full_name": "Deprecated",
                    "name": "Deprecated",
                    "locations": [{"filename": "src/annotations.cr", "line_number": 2}]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_crystal_index() {
        let tree = DocTree::from_json(INDEX_JSON).unwrap();
        let root = tree.root();

        check!(root.name == TOP_LEVEL_NAMESPACE);
        check!(root.kind() == NodeKind::Module);
        check!(root.is_pseudo_namespace());
        check!(tree.node_count() == 3);

        let record = &root.macros[0];
        check!(record.name == "record");
        check!(record.args == "(name, *properties)");
        check!(record.location == Some(Location::new("src/macros.cr", 96)));

        let array = &root.children[0];
        check!(array.kind() == NodeKind::Class);
        check!(array.is_named("Array"));
        check!(array.is_named("Array(T)"));
        check!(array.superclass.as_ref().map(|s| s.full_name.as_str()) == Some("Reference"));
        check!(array.doc.is_none());

        let push = &array.instance_methods[0];
        check!(push.visibility == Visibility::Public);
        check!(push.location.as_ref().map(|l| l.line) == Some(1732));

        let private = &array.instance_methods[1];
        check!(private.visibility == Visibility::Private);
        check!(private.args.is_empty());
        check!(private.location.is_none());
    }

    #[test]
    fn test_unknown_kind_is_namespace() {
        let tree = DocTree::from_json(INDEX_JSON).unwrap();
        let deprecated = &tree.root().children[1];
        check!(deprecated.kind() == NodeKind::Namespace);
        check!(deprecated.kind_name() == "annotation");
        check!(DocNode::default().kind_name() == "namespace");
    }

    #[test]
    fn test_new_derives_short_name() {
        let node = DocNode::new(NodeKind::Struct, "JSON::Any");
        check!(node.name == "Any");
        check!(node.full_name == "JSON::Any");
        check!(!node.is_pseudo_namespace());

        let node = DocNode::new(NodeKind::Enum, "Signal");
        check!(node.name == "Signal");
        check!(node.is_enum);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        check!(DocTree::from_json(r#"{"program": {"name": 1}}"#).is_err());
        check!(DocTree::from_json("[]").is_err());
    }
}
