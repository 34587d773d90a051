//! Plain-text rendering of search results and looked-up entities.

use crate::doc::{Constant, Definition, DocNode, Location, Visibility};
use crate::types::{Category, Matches, RankedMatch, Target};
use std::fmt;

/// Superclasses too common to be worth printing.
const IMPLICIT_SUPERCLASSES: [&str; 2] = ["Reference", "Value"];

/// Render grouped search results, one block per category.
pub fn render_matches(matches: &Matches<'_>) -> String {
    let mut output = String::new();
    // writing to a String cannot fail
    let _ = write_matches(&mut output, matches);
    output
}

/// Render the full documentation of a single entity.
pub fn render_target(target: &Target<'_>) -> String {
    let mut output = String::new();
    let _ = write_target(&mut output, target);
    output
}

pub fn write_matches(out: &mut impl fmt::Write, matches: &Matches<'_>) -> fmt::Result {
    for (index, (category, ranked)) in matches.iter().enumerate() {
        if index > 0 {
            out.write_char('\n')?;
        }
        writeln!(out, "{}:", category)?;
        for ranked in ranked {
            write_match(out, ranked)?;
        }
    }
    Ok(())
}

fn write_match(out: &mut impl fmt::Write, ranked: &RankedMatch<'_>) -> fmt::Result {
    match ranked.location {
        Some(location) => writeln!(out, "  {}", location)?,
        None => writeln!(out, "  unknown source")?,
    }
    writeln!(out, "    {}{}", keyword(&ranked.target), ranked.qualified_name())
}

/// Leading keyword of a one-line entry, with its trailing space.
fn keyword(target: &Target<'_>) -> String {
    match target.category() {
        Category::Constant => String::new(),
        Category::Macro => "macro ".to_string(),
        Category::Constructor | Category::ClassMethod | Category::InstanceMethod => {
            "def ".to_string()
        }
        category => match target {
            Target::Node(node) => format!("{} ", node_keyword(node)),
            _ => format!("{} ", category.label()),
        },
    }
}

fn node_keyword(node: &DocNode) -> &str {
    if node.is_alias {
        "alias"
    } else if node.is_enum {
        "enum"
    } else {
        node.kind_name()
    }
}

pub fn write_target(out: &mut impl fmt::Write, target: &Target<'_>) -> fmt::Result {
    match *target {
        Target::Constant { owner, constant } => write_constant(out, owner, constant),
        Target::Definition {
            owner,
            definition,
            category,
        } => write_definition(out, owner, definition, category),
        Target::Node(node) => write_node(out, node),
    }
}

fn write_constant(out: &mut impl fmt::Write, owner: &DocNode, constant: &Constant) -> fmt::Result {
    if !owner.is_pseudo_namespace() {
        write!(out, "{}::", owner.name)?;
    }
    write!(out, "{}", constant.name)?;
    if !constant.value.is_empty() {
        write!(out, " = {}", constant.value)?;
    }
    out.write_char('\n')?;

    write_summary(out, constant.summary.as_deref())?;
    write_locations(out, &owner.locations)?;
    write_doc(out, constant.doc.as_deref())
}

fn write_definition(
    out: &mut impl fmt::Write,
    owner: &DocNode,
    definition: &Definition,
    category: Category,
) -> fmt::Result {
    if definition.visibility != Visibility::Public {
        write!(out, "{} ", definition.visibility)?;
    }
    if definition.is_abstract {
        out.write_str("abstract ")?;
    }
    out.write_str(if category == Category::Macro { "macro " } else { "def " })?;
    if !owner.is_pseudo_namespace() {
        write!(out, "{}{}", owner.name, category.separator())?;
    }
    writeln!(out, "{}{}", definition.name, definition.args)?;

    write_summary(out, definition.summary.as_deref())?;
    let locations: &[Location] = match (&definition.location, category) {
        (Some(location), _) => std::slice::from_ref(location),
        (None, Category::Constructor) => &owner.locations,
        (None, _) => &[],
    };
    write_locations(out, locations)?;
    write_doc(out, definition.doc.as_deref())
}

fn write_node(out: &mut impl fmt::Write, node: &DocNode) -> fmt::Result {
    if node.is_abstract {
        out.write_str("abstract ")?;
    }
    write!(out, "{} {}", node_keyword(node), node.full_name)?;

    if node.is_alias {
        match &node.alias_target {
            Some(target) => writeln!(out, " = {}", target)?,
            None => out.write_char('\n')?,
        }
    } else if node.is_enum {
        for member in &node.constants {
            write!(out, "\n  {}", member.name)?;
            if !member.value.is_empty() {
                write!(out, " = {}", member.value)?;
            }
        }
        out.write_str("\nend\n")?;
    } else {
        if let Some(superclass) = &node.superclass
            && !IMPLICIT_SUPERCLASSES.contains(&superclass.full_name.as_str())
        {
            write!(out, " < {}", superclass.full_name)?;
        }
        out.write_char('\n')?;

        if !node.constants.is_empty() {
            for constant in &node.constants {
                writeln!(out, "  {} = {}", constant.name, constant.value)?;
            }
            out.write_str("end\n")?;
        }
    }

    write_summary(out, node.summary.as_deref())?;
    write_locations(out, &node.locations)?;

    if !node.constructors.is_empty() {
        out.write_str("\nConstructors:\n")?;
        for constructor in &node.constructors {
            writeln!(out, "  def {}{}", constructor.name, constructor.args)?;
        }
    }
    if !node.class_methods.is_empty() {
        writeln!(out, "\nClass methods: {}", node.class_methods.len())?;
    }
    if !node.instance_methods.is_empty() {
        writeln!(out, "\nInstance methods: {}", node.instance_methods.len())?;
    }
    if !node.children.is_empty() {
        writeln!(out, "\nTypes: {}", node.children.len())?;
    }

    write_doc(out, node.doc.as_deref())
}

fn write_summary(out: &mut impl fmt::Write, summary: Option<&str>) -> fmt::Result {
    match summary.map(str::trim) {
        Some(summary) if !summary.is_empty() => writeln!(out, "{}", summary),
        _ => Ok(()),
    }
}

fn write_locations(out: &mut impl fmt::Write, locations: &[Location]) -> fmt::Result {
    out.write_str("\nDefined:\n")?;
    if locations.is_empty() {
        return out.write_str("  (cannot resolve locations)\n");
    }
    for location in locations {
        writeln!(out, "  {}", location)?;
    }
    Ok(())
}

fn write_doc(out: &mut impl fmt::Write, doc: Option<&str>) -> fmt::Result {
    match doc.map(str::trim) {
        Some(doc) if !doc.is_empty() => writeln!(out, "\n{}", doc),
        _ => out.write_str("\n  (no information available)\n"),
    }
}
