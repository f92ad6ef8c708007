//! Typed view over a parsed system document.

use crate::parser::{parse_system_source, Node, Object};

use super::alias::AliasIndex;
use super::breakpoint::BreakpointTable;

/// Top-level section names.
pub const BREAKPOINTS: &str = "breakpoints";
pub const ALIASES: &str = "aliases";
pub const TOKENS: &str = "tokens";
pub const ELEMENTS: &str = "elements";

/// A design system: breakpoints, aliases, tokens and elements.
///
/// Sections that are missing, or written as scalars, read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub breakpoints: BreakpointTable,
    pub aliases: AliasIndex,
    /// category -> token name -> scalar or breakpoint set
    pub tokens: Object,
    /// element name -> declaration
    pub elements: Object,
}

impl System {
    /// Build from a parsed tree with the default breakpoint widths.
    pub fn from_tree(tree: &Object) -> Self {
        Self::from_tree_with(tree, BreakpointTable::default())
    }

    /// Build from a parsed tree, starting from `breakpoints` before the
    /// document's own overrides are applied.
    pub fn from_tree_with(tree: &Object, breakpoints: BreakpointTable) -> Self {
        let breakpoints = match tree.get_object(BREAKPOINTS) {
            Some(section) => breakpoints.with_overrides(section),
            None => breakpoints,
        };

        Self {
            breakpoints,
            aliases: tree
                .get_object(ALIASES)
                .map(AliasIndex::from_section)
                .unwrap_or_default(),
            tokens: section(tree, TOKENS),
            elements: section(tree, ELEMENTS),
        }
    }

    /// Parse document text into a system.
    pub fn parse(source: &str) -> Self {
        Self::from_tree(&parse_system_source(source))
    }

    /// Token categories in declaration order. Scalar categories are skipped.
    pub fn token_categories(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.tokens
            .iter()
            .filter_map(|(name, node)| node.as_object().map(|obj| (name, obj)))
    }
}

fn section(tree: &Object, name: &str) -> Object {
    match tree.get(name) {
        Some(Node::Object(obj)) => obj.clone(),
        Some(Node::Scalar(value)) => {
            log::debug!("section '{}' has scalar value {:?}, treating as empty", name, value);
            Object::new()
        }
        None => Object::new(),
    }
}

/// Starter system written by `siam init`.
pub const EXAMPLE_SYSTEM: &str = "breakpoints
	small 576
	medium 768
	large 992
aliases
	tokens
		color backgroundColor,color,borderColor
		size width,height
tokens
	color
		primary blue
		primaryDark darkblue
		danger red
		dangerDark darkred
		primaryText black
		lightText white
		secondaryBackground #E4E4E4
	borderRadius
		sm 3
		md 6
	size
		controlRegularHeight 40
		controlLargeHeight 50
	spacing
		gutter
			base 8
			medium 16
	borderWidth
		regular 2
elements
	button
		borderRadius sm
		color lightText
		padding
			base 8
			large 12
		roles
			primary
				backgroundColor primary
				:hover
					backgroundColor primaryDark
			danger
				backgroundColor danger
				:hover
					backgroundColor dangerDark
		size
			regular
				height controlRegularHeight
			large
				height controlLargeHeight
	input
		borderRadius sm
		color primaryText
		borderStyle solid
		borderWidth regular
		borderColor transparent
		roles
			primary
				backgroundColor secondaryBackground
				:hover
					borderColor primary
				:focus
					borderColor primary
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Value;
    use crate::types::Breakpoint;

    #[test]
    fn test_parse_example_system() {
        let system = System::parse(EXAMPLE_SYSTEM);

        assert_eq!(system.aliases.resolve_category("borderColor"), "color");
        let categories: Vec<&str> = system.token_categories().map(|(name, _)| name).collect();
        assert_eq!(
            categories,
            vec!["color", "borderRadius", "size", "spacing", "borderWidth"]
        );
        let elements: Vec<&str> = system.elements.keys().collect();
        assert_eq!(elements, vec!["button", "input"]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let system = System::parse("tokens\n\tcolor\n\t\tprimary blue");

        assert!(system.aliases.is_empty());
        assert!(system.elements.is_empty());
        assert_eq!(system.breakpoints, BreakpointTable::default());
    }

    #[test]
    fn test_scalar_section_is_empty() {
        let system = System::parse("elements none\ntokens 3");
        assert!(system.elements.is_empty());
        assert!(system.tokens.is_empty());
    }

    #[test]
    fn test_document_breakpoints_override_base_table() {
        let tree = parse_system_source("breakpoints\n\tmedium 800");
        let base = BreakpointTable::default().with_width(Breakpoint::Small, 500);
        let system = System::from_tree_with(&tree, base);

        assert_eq!(system.breakpoints.width(Breakpoint::Small), 500);
        assert_eq!(system.breakpoints.width(Breakpoint::Medium), 800);
    }

    #[test]
    fn test_token_values_are_coerced() {
        let system = System::parse("tokens\n\tsize\n\t\tcontrolLargeHeight 50");
        let (_, size) = system.token_categories().next().unwrap();
        assert_eq!(
            size.get("controlLargeHeight"),
            Some(&Node::Scalar(Value::Number(50.0)))
        );
    }
}
