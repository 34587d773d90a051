use crate::doc::{Constant, Definition, DocNode, Location, NodeKind};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of symbol a match refers to. Results are grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Constant,
    Constructor,
    ClassMethod,
    InstanceMethod,
    Macro,
    Namespace,
    Class,
    Struct,
    Enum,
    Alias,
}

impl Category {
    /// Category of a type or namespace node. Alias and enum flags win over `kind`.
    pub fn of_node(node: &DocNode) -> Self {
        if node.is_alias {
            return Self::Alias;
        }
        if node.is_enum {
            return Self::Enum;
        }
        match node.kind() {
            NodeKind::Namespace | NodeKind::Module => Self::Namespace,
            NodeKind::Class => Self::Class,
            NodeKind::Struct => Self::Struct,
            NodeKind::Enum => Self::Enum,
            NodeKind::Alias => Self::Alias,
        }
    }

    /// Separator placed between owner and member when displaying a path.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Constructor | Self::ClassMethod => ".",
            Self::InstanceMethod | Self::Macro => "#",
            _ => "::",
        }
    }

    /// Heading used when listing results of this category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Constant => "Constants",
            Self::Constructor => "Constructors",
            Self::ClassMethod => "Class methods",
            Self::InstanceMethod => "Instance methods",
            Self::Macro => "Macros",
            Self::Namespace => "Namespaces",
            Self::Class => "Classes",
            Self::Struct => "Structs",
            Self::Enum => "Enums",
            Self::Alias => "Aliases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The documented entity behind a match, borrowed from the tree.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Constant {
        owner: &'a DocNode,
        constant: &'a Constant,
    },
    Definition {
        owner: &'a DocNode,
        definition: &'a Definition,
        category: Category,
    },
    Node(&'a DocNode),
}

impl<'a> Target<'a> {
    pub fn category(&self) -> Category {
        match self {
            Self::Constant { .. } => Category::Constant,
            Self::Definition { category, .. } => *category,
            Self::Node(node) => Category::of_node(node),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Constant { constant, .. } => &constant.name,
            Self::Definition { definition, .. } => &definition.name,
            Self::Node(node) => &node.full_name,
        }
    }
}

/// One search hit.
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    pub category: Category,
    /// `[owner, member, signature]` for members, with an empty owner for
    /// top-level and macro definitions and an empty signature when there is
    /// none; `[full name]` for types and namespaces.
    pub display_path: Vec<String>,
    pub location: Option<&'a Location>,
    /// Edit distance to the query, 0 for exact matches.
    pub distance: usize,
    pub target: Target<'a>,
}

impl RankedMatch<'_> {
    /// The display path joined the way the language writes it, e.g. `JSON::Any#as_s : String`.
    pub fn qualified_name(&self) -> String {
        match self.display_path.as_slice() {
            [owner, member, signature] if owner.is_empty() => format!("{member}{signature}"),
            [owner, member, signature] => {
                format!("{owner}{}{member}{signature}", self.category.separator())
            }
            fragments => fragments.join("::"),
        }
    }
}

/// Search results keyed by category, in category order.
///
/// Within a category, matches appear in traversal order: a node's own members
/// ranked by distance, followed by the matches of each child subtree in turn.
#[derive(Debug, Clone, Default)]
pub struct Matches<'a> {
    by_category: BTreeMap<Category, Vec<RankedMatch<'a>>>,
}

impl<'a> Matches<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ranked: RankedMatch<'a>) {
        self.by_category
            .entry(ranked.category)
            .or_default()
            .push(ranked);
    }

    /// Append every match of `other`, category by category, after the existing ones.
    pub fn merge(&mut self, other: Self) {
        for (category, matches) in other.by_category {
            self.by_category.entry(category).or_default().extend(matches);
        }
    }

    pub fn get(&self, category: Category) -> &[RankedMatch<'a>] {
        self.by_category.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[RankedMatch<'a>])> {
        self.by_category
            .iter()
            .map(|(category, matches)| (*category, matches.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.by_category.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    /// Total number of matches across all categories.
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }
}

impl<'a> Extend<RankedMatch<'a>> for Matches<'a> {
    fn extend<I: IntoIterator<Item = RankedMatch<'a>>>(&mut self, iter: I) {
        for ranked in iter {
            self.push(ranked);
        }
    }
}
