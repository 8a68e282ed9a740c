//! Class token composition.

use super::ButtonProps;
use crate::node::ClassList;
use crate::theme::TokenSet;

/// Class lists for the control and its container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedClasses {
    pub button: ClassList,
    pub container: ClassList,
}

/// Compose class lists from props and the theme's token set.
///
/// Order is fixed: base, type, block, danger, shadow, size, class name,
/// disabled. Later tokens win when specificity ties, so the order must not
/// change.
pub fn compose(props: &ButtonProps, tokens: &TokenSet) -> ComposedClasses {
    let mut button = ClassList::new();
    button.push(tokens.base.as_deref());
    button.push(tokens.variant_token(props.variant_type));
    button.push_if(props.block, tokens.block.as_deref());
    button.push_if(props.danger, tokens.danger_token(props.variant_type));
    button.push_if(
        props.shadow && props.variant_type.supports_shadow(),
        tokens.shadow.as_deref(),
    );
    button.push(tokens.size_token(props.size));
    if let Some(class_name) = props.class_name.as_deref().filter(|c| !c.is_empty()) {
        button.push(Some(class_name));
    }
    button.push_if(props.disabled, tokens.disabled.as_deref());

    let mut container = ClassList::new();
    container.push(tokens.container.as_deref());
    container.push_if(props.block, tokens.block.as_deref());

    ComposedClasses { button, container }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{sbui, StyleTokenSource, BUTTON_COMPONENT};
    use crate::types::{ButtonSize, ButtonType};
    use strum::IntoEnumIterator;

    fn tokens() -> TokenSet {
        sbui().resolve(BUTTON_COMPONENT).into_owned()
    }

    fn present(list: &ClassList) -> Vec<&str> {
        list.present().collect()
    }

    /// Independent statement of the ordering rule used to check every
    /// combination.
    fn expected(props: &ButtonProps, t: &TokenSet) -> Vec<Option<String>> {
        let mut out = vec![t.base.clone(), t.variant.get(&props.variant_type).cloned()];
        if props.block {
            out.push(t.block.clone());
        }
        if props.danger {
            out.push(t.danger.get(&props.variant_type).cloned());
        }
        if props.shadow && !matches!(props.variant_type, ButtonType::Link | ButtonType::Text) {
            out.push(t.shadow.clone());
        }
        out.push(t.size.get(&props.size).cloned());
        if let Some(class_name) = props.class_name.as_ref().filter(|c| !c.is_empty()) {
            out.push(Some(class_name.clone()));
        }
        if props.disabled {
            out.push(t.disabled.clone());
        }
        out
    }

    #[test]
    fn test_primary_medium_with_shadow() {
        let props = ButtonProps::new()
            .variant_type(ButtonType::Primary)
            .size(ButtonSize::Medium)
            .shadow(true);
        let classes = compose(&props, &tokens());

        assert_eq!(
            present(&classes.button),
            vec!["sbui-btn", "sbui-btn-primary", "sbui-btn--shadow", "sbui-btn--medium"]
        );
        assert_eq!(present(&classes.container), vec!["sbui-btn-container"]);
    }

    #[test]
    fn test_defaults() {
        let classes = compose(&ButtonProps::default(), &tokens());
        assert_eq!(
            present(&classes.button),
            vec!["sbui-btn", "sbui-btn-primary", "sbui-btn--shadow", "sbui-btn--tiny"]
        );
    }

    #[test]
    fn test_block_follows_type_and_marks_container() {
        let props = ButtonProps::new().variant_type(ButtonType::Dashed).block(true);
        let classes = compose(&props, &tokens());

        assert_eq!(
            &present(&classes.button)[..3],
            &["sbui-btn", "sbui-btn-dashed", "sbui-btn--w-full"]
        );
        assert_eq!(
            present(&classes.container),
            vec!["sbui-btn-container", "sbui-btn--w-full"]
        );
    }

    #[test]
    fn test_danger_outline_position() {
        let without_block = ButtonProps::new().variant_type(ButtonType::Outline).danger(true);
        let classes = compose(&without_block, &tokens());
        assert_eq!(present(&classes.button)[2], "sbui-btn--danger-outline");

        let with_block = without_block.block(true);
        let classes = compose(&with_block, &tokens());
        assert_eq!(present(&classes.button)[2], "sbui-btn--w-full");
        assert_eq!(present(&classes.button)[3], "sbui-btn--danger-outline");
    }

    #[test]
    fn test_link_and_text_never_get_shadow() {
        for variant in [ButtonType::Link, ButtonType::Text] {
            let props = ButtonProps::new().variant_type(variant).shadow(true);
            let classes = compose(&props, &tokens());
            assert!(!present(&classes.button).contains(&"sbui-btn--shadow"));
        }
    }

    #[test]
    fn test_class_name_precedes_disabled() {
        let props = ButtonProps::new().class_name("mine").disabled(true);
        let classes = compose(&props, &tokens());
        let tail: Vec<_> = present(&classes.button).into_iter().rev().take(2).collect();
        assert_eq!(tail, vec!["sbui-btn--disabled", "mine"]);
    }

    #[test]
    fn test_empty_class_name_is_skipped() {
        let with_empty = compose(&ButtonProps::new().class_name(""), &tokens());
        let without = compose(&ButtonProps::new(), &tokens());

        assert_eq!(with_empty.button.tokens(), without.button.tokens());
        assert!(!with_empty.button.tokens().contains(&Some(String::new())));
    }

    #[test]
    fn test_loading_does_not_add_disabled_token() {
        let props = ButtonProps::new().loading(true);
        let classes = compose(&props, &tokens());
        assert!(!present(&classes.button).contains(&"sbui-btn--disabled"));
    }

    #[test]
    fn test_missing_tokens_keep_their_position() {
        let sparse = TokenSet {
            base: Some("b".into()),
            ..Default::default()
        };
        let props = ButtonProps::new().size(ButtonSize::Large).danger(true);
        let classes = compose(&props, &sparse);

        // base, type, danger, shadow, size
        assert_eq!(
            classes.button.tokens(),
            &[Some("b".to_string()), None, None, None, None]
        );
        assert_eq!(classes.button.to_attr(), "b");
    }

    #[test]
    fn test_all_combinations_follow_order() {
        let t = tokens();
        for variant in ButtonType::iter() {
            for size in ButtonSize::iter() {
                for flags in 0u8..64 {
                    let mut props = ButtonProps::new()
                        .variant_type(variant)
                        .size(size)
                        .block(flags & 1 != 0)
                        .danger(flags & 2 != 0)
                        .shadow(flags & 4 != 0)
                        .disabled(flags & 8 != 0);
                    if flags & 16 != 0 {
                        props = props.class_name(if flags & 32 != 0 { "" } else { "extra" });
                    }

                    let classes = compose(&props, &t);
                    assert_eq!(classes.button.tokens(), expected(&props, &t).as_slice());
                }
            }
        }
    }
}
