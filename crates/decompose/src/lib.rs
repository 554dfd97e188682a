//! Label decomposition: raw ingredient text in, ordered candidate phrases out.
//!
//! Packaged-food ingredient lists are messy: nested parenthetical
//! sub-lists, inconsistent casing and punctuation, "and/or" joins,
//! unbalanced parentheses from OCR or truncation. This crate turns that
//! text into a flat, ordered sequence of [`CandidatePhrase`]s annotated
//! with their parenthesis nesting depth, which is all the classifier
//! needs: depth alone drives the downstream precedence rules, so there
//! is no tree to carry around.
//!
//! An item with a parenthetical breakdown yields both sides: the outer
//! phrase ("vegetable oil") and each sub-phrase inside the parentheses
//! ("soybean", "palm"), recursively at increasing depth.
//!
//! ## Guarantees
//!
//! - Deterministic and stateless: same input, same output, no state kept
//!   between calls
//! - Total: malformed input degrades to a valid (possibly empty) candidate
//!   sequence, never an error
//! - Ordered: each depth-0 candidate is immediately followed by the
//!   candidates extracted from its own parentheses

mod phrase;
mod pipeline;

pub use crate::phrase::CandidatePhrase;
pub use crate::pipeline::decompose;

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(candidates: &[CandidatePhrase]) -> Vec<(&str, usize)> {
        candidates
            .iter()
            .map(|c| (c.normalized_key.as_str(), c.origin_depth))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        assert!(decompose("").is_empty());
        assert!(decompose("   ").is_empty());
        assert!(decompose("\"\"").is_empty());
    }

    #[test]
    fn top_level_commas_split_items() {
        let out = decompose("water, sugar, citric acid");
        assert_eq!(
            keys(&out),
            vec![("water", 0), ("sugar", 0), ("citric acid", 0)]
        );
    }

    #[test]
    fn semicolons_delimit_items_like_commas() {
        let out = decompose("water; salt");
        assert_eq!(keys(&out), vec![("water", 0), ("salt", 0)]);
    }

    #[test]
    fn strips_ingredient_prefix_and_trailing_period() {
        let out = decompose("INGREDIENTS: Water, Salt.");
        assert_eq!(keys(&out), vec![("water", 0), ("salt", 0)]);
        assert_eq!(out[1].raw_text, "Salt");
    }

    #[test]
    fn strips_contains_prefix() {
        let out = decompose("Contains: water");
        assert_eq!(keys(&out), vec![("water", 0)]);
    }

    #[test]
    fn prefix_requires_word_boundary() {
        // "Containsol" is an ingredient name, not a prefix label.
        let out = decompose("Containsol, water");
        assert_eq!(keys(&out), vec![("containsol", 0), ("water", 0)]);
    }

    #[test]
    fn parenthetical_item_yields_outer_and_inner_candidates() {
        let out = decompose("Vegetable Oil (Soybean, Palm, Palm Kernel Oil)");
        assert_eq!(
            keys(&out),
            vec![
                ("vegetable oil", 0),
                ("soybean", 1),
                ("palm", 1),
                ("palm kernel oil", 1),
            ]
        );
        assert_eq!(out[0].raw_text, "Vegetable Oil");
    }

    #[test]
    fn and_or_separates_sub_items() {
        let out = decompose("Vegetable Oil (Palm and/or Soybean)");
        assert_eq!(
            keys(&out),
            vec![("vegetable oil", 0), ("palm", 1), ("soybean", 1)]
        );
    }

    #[test]
    fn final_and_separates_last_two_sub_items() {
        let out = decompose("Spices (Salt, Pepper and Paprika)");
        assert_eq!(
            keys(&out),
            vec![("spices", 0), ("salt", 1), ("pepper", 1), ("paprika", 1)]
        );
    }

    #[test]
    fn interior_and_is_not_a_separator() {
        let out = decompose("Emulsifier (Lecithin, Mono and Diglycerides, Salt)");
        assert_eq!(
            keys(&out),
            vec![
                ("emulsifier", 0),
                ("lecithin", 1),
                ("mono and diglycerides", 1),
                ("salt", 1),
            ]
        );
    }

    #[test]
    fn oxford_comma_before_and_leaves_no_empty_phrase() {
        let out = decompose("Seasoning (Salt, and Paprika)");
        assert_eq!(
            keys(&out),
            vec![("seasoning", 0), ("salt", 1), ("paprika", 1)]
        );
    }

    #[test]
    fn nested_parens_expand_at_increasing_depth() {
        let out = decompose("Chocolate (Cocoa (Cocoa Butter, Cocoa Mass), Sugar)");
        assert_eq!(
            keys(&out),
            vec![
                ("chocolate", 0),
                ("cocoa", 1),
                ("cocoa butter", 2),
                ("cocoa mass", 2),
                ("sugar", 1),
            ]
        );
    }

    #[test]
    fn multiple_groups_in_one_item() {
        let out = decompose("Cheese Powder (Milk) (Salt)");
        assert_eq!(
            keys(&out),
            vec![("cheese powder", 0), ("milk", 1), ("salt", 1)]
        );
    }

    #[test]
    fn unmatched_open_paren_extends_to_end() {
        let out = decompose("Oil (Soybean, Palm");
        assert_eq!(keys(&out), vec![("oil", 0), ("soybean", 1), ("palm", 1)]);
    }

    #[test]
    fn unmatched_close_paren_is_dropped() {
        let out = decompose("Oil), Water");
        assert_eq!(keys(&out), vec![("oil", 0), ("water", 0)]);
        assert_eq!(out[0].raw_text, "Oil");
    }

    #[test]
    fn empty_group_yields_outer_candidate_only() {
        let out = decompose("Oil ()");
        assert_eq!(keys(&out), vec![("oil", 0)]);
    }

    #[test]
    fn raw_text_preserves_original_casing() {
        let out = decompose("Unrecognized Ingredient XYZ, Water");
        assert_eq!(out[0].raw_text, "Unrecognized Ingredient XYZ");
        assert_eq!(out[0].normalized_key, "unrecognized ingredient xyz");
    }

    #[test]
    fn normalized_key_matches_normalizer_output() {
        let out = decompose("FD&C Red No. 40");
        assert_eq!(out[0].normalized_key, normalize::normalize(&out[0].raw_text));
        assert_eq!(out[0].normalized_key, "fd&c red no 40");
    }

    #[test]
    fn deterministic_and_restartable() {
        let label = "Water, Vegetable Oil (Soybean and/or Palm), Spices (Salt, Pepper and Paprika).";
        assert_eq!(decompose(label), decompose(label));
    }

    #[test]
    fn skips_empty_items_from_repeated_commas() {
        let out = decompose("water,, ,salt");
        assert_eq!(keys(&out), vec![("water", 0), ("salt", 0)]);
    }
}
