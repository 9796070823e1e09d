//! Enum declarations.

use rbxbind_core::schema::{DocMap, EnumDescriptor};

use crate::decl::{EnumDecl, EnumItemDecl};
use crate::docs::{DocSynthesizer, ENUM_DEPRECATED, ENUM_ITEM_DEPRECATED};
use crate::ident::safe_identifier;

/// Emit every enum, sorted by name. Items keep their declared order.
pub fn emit_enums(enums: &[EnumDescriptor], docs: &DocMap, class_prefix: &str, enum_prefix: &str) -> Vec<EnumDecl> {
    let synth = DocSynthesizer::new(docs, class_prefix, enum_prefix);

    let mut sorted: Vec<_> = enums.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    sorted
        .into_iter()
        .map(|descriptor| EnumDecl {
            name: safe_identifier(&descriptor.name),
            doc: synth.enum_doc(descriptor),
            deprecation: descriptor.is_deprecated().then_some(ENUM_DEPRECATED),
            items: descriptor
                .items
                .iter()
                .map(|item| EnumItemDecl {
                    name: safe_identifier(&item.name),
                    value: item.value,
                    deprecation: item.is_deprecated().then_some(ENUM_ITEM_DEPRECATED),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_sorted_items_in_order() {
        let enums = vec![
            EnumDescriptor::new("Material").with_item("Plastic", 256).with_item("Wood", 512),
            EnumDescriptor::new("KeyCode").with_item("Unknown", 0).with_item("1", 49),
        ];

        let decls = emit_enums(&enums, &DocMap::new(), "@roblox/globaltype/", "@roblox/enum/");
        assert_eq!(decls[0].name, "KeyCode");
        assert_eq!(decls[0].items[1].name, "_1");
        assert_eq!(decls[0].items[1].value, 49);
        assert_eq!(decls[1].name, "Material");
        assert_eq!(
            decls[1].items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["Plastic", "Wood"]
        );
        assert_eq!(decls[1].doc.summary, "Represents the Material enum.");
        assert_eq!(decls[1].deprecation, None);
    }
}
