//! Rule-based mapping from bone name and hierarchy position to a semantic
//! category and display color.
//!
//! The taxonomy is an ordered rule table evaluated top-to-bottom; the first
//! matching rule wins and every name falls through to Unclassified/black,
//! so classification is total. Name tests are ASCII case-insensitive.

use crate::utils::color;
use nalgebra::Vector3;

const LEG_PARTS: &[&str] = &["leg", "foot", "calf", "thigh", "knee"];
const ARM_PARTS: &[&str] = &["arm", "shoulder", "hand", "forearm", "wrist", "elbow"];
const TORSO_PARTS: &[&str] = &["chest", "belly", "pelvis"];
const HEAD_PARTS: &[&str] = &["head", "jaw", "forehead", "neck"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneCategory {
    Root,
    Attachment,
    RightLeg,
    RightArm,
    RightSide,
    LeftLeg,
    LeftArm,
    LeftSide,
    Torso,
    Head,
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: BoneCategory,
    pub color: Vector3<f32>,
}

struct RuleInput<'a> {
    /// Bone name, already lowercased.
    name: &'a str,
    has_parent: bool,
}

struct Rule {
    category: BoneCategory,
    color: Vector3<f32>,
    applies: fn(&RuleInput) -> bool,
}

/// Ordered taxonomy; priority is position in the table.
const RULES: &[Rule] = &[
    Rule {
        category: BoneCategory::Root,
        color: color::WHITE,
        applies: |input| !input.has_parent,
    },
    Rule {
        category: BoneCategory::Attachment,
        color: color::YELLOW,
        applies: |input| input.name.contains("attachment"),
    },
    Rule {
        category: BoneCategory::RightLeg,
        color: color::DARK_RED,
        applies: |input| side_token_matches(input.name, 'r', LEG_PARTS),
    },
    Rule {
        category: BoneCategory::RightArm,
        color: color::LIGHT_RED,
        applies: |input| side_token_matches(input.name, 'r', ARM_PARTS),
    },
    Rule {
        category: BoneCategory::RightSide,
        color: color::RED,
        applies: |input| side_token(input.name, 'r').is_some(),
    },
    Rule {
        category: BoneCategory::LeftLeg,
        color: color::DARK_BLUE,
        applies: |input| side_token_matches(input.name, 'l', LEG_PARTS),
    },
    Rule {
        category: BoneCategory::LeftArm,
        color: color::LIGHT_BLUE,
        applies: |input| side_token_matches(input.name, 'l', ARM_PARTS),
    },
    Rule {
        category: BoneCategory::LeftSide,
        color: color::BLUE,
        applies: |input| side_token(input.name, 'l').is_some(),
    },
    Rule {
        category: BoneCategory::Torso,
        color: color::PURPLE,
        applies: |input| contains_any(input.name, TORSO_PARTS),
    },
    Rule {
        category: BoneCategory::Head,
        color: color::GREEN,
        applies: |input| contains_any(input.name, HEAD_PARTS),
    },
];

/// The token following a side prefix like `R-` or `L-`, if present.
fn side_token(name: &str, side: char) -> Option<&str> {
    let rest = name.strip_prefix(side)?.strip_prefix('-')?;
    rest.split('-').next()
}

fn side_token_matches(name: &str, side: char, parts: &[&str]) -> bool {
    side_token(name, side).is_some_and(|token| contains_any(token, parts))
}

fn contains_any(name: &str, parts: &[&str]) -> bool {
    parts.iter().any(|part| name.contains(part))
}

/// Total classification: every bone name yields exactly one category and
/// color; there are no error conditions.
pub fn classify(bone_name: &str, has_parent: bool) -> Classification {
    let lowered = bone_name.to_ascii_lowercase();
    let input = RuleInput {
        name: &lowered,
        has_parent,
    };

    for rule in RULES {
        if (rule.applies)(&input) {
            return Classification {
                category: rule.category,
                color: rule.color,
            };
        }
    }

    Classification {
        category: BoneCategory::Unclassified,
        color: color::BLACK,
    }
}
