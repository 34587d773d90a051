use crate::context::DocContext;
use crate::tools::error_chain;
use std::fmt::Write as _;

/// List installed libraries with their versions, oldest first.
pub fn handle_list(context: &DocContext) -> Result<String, String> {
    let libraries = context.store().libraries().map_err(error_chain)?;

    if libraries.is_empty() {
        return Err("no libraries have been installed".to_string());
    }

    let mut output = String::new();
    for (name, versions) in &libraries {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(name);
        output.push('\n');

        for version in versions {
            let prefix = if version.starts_with(|c: char| c.is_ascii_digit()) {
                "v"
            } else {
                ""
            };
            let _ = writeln!(output, "  • {}{}", prefix, version);
        }
    }

    Ok(output)
}
