//! Real-world objects shown next to the cube stack for scale.

use serde::Serialize;

/// Lets a reference stand in for a stack up to 40% taller than itself.
pub const DEFAULT_TOLERANCE: f64 = 1.4;

/// Which illustration the view layer draws for a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    /// Six-sided die.
    Dice,
    /// Toy brick.
    Lego,
    /// Apple.
    Apple,
    /// Drinking cup.
    Cup,
    /// Cat.
    Cat,
    /// Young child.
    Child,
    /// House door.
    Door,
    /// Passenger car.
    Car,
    /// City bus.
    Bus,
    /// Small house.
    House,
    /// Office building.
    Building,
    /// Skyscraper.
    Tower,
    /// Large tree.
    Tree,
    /// Mountain.
    Mountain,
    /// The Earth, by diameter.
    Earth,
    /// Distance from the Earth to the Moon.
    MoonDistance,
}

impl ReferenceKind {
    /// Stable key used for asset file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dice => "dice",
            Self::Lego => "lego",
            Self::Apple => "apple",
            Self::Cup => "cup",
            Self::Cat => "cat",
            Self::Child => "child",
            Self::Door => "door",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::House => "house",
            Self::Building => "building",
            Self::Tower => "tower",
            Self::Tree => "tree",
            Self::Mountain => "mountain",
            Self::Earth => "earth",
            Self::MoonDistance => "moonDistance",
        }
    }
}

/// A familiar object of known height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceObject {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Height (or length, for distances) in centimetres.
    pub height_cm: f64,
    /// Illustration to draw.
    pub kind: ReferenceKind,
}

const fn reference(
    id: &'static str,
    name: &'static str,
    height_cm: f64,
    kind: ReferenceKind,
) -> ReferenceObject {
    ReferenceObject {
        id,
        name,
        height_cm,
        kind,
    }
}

/// Catalogue in selection order; the first object tall enough wins.
pub const REFERENCES: [ReferenceObject; 18] = [
    reference("dice", "骰子", 2.0, ReferenceKind::Dice),
    reference("lego", "积木", 3.0, ReferenceKind::Lego),
    reference("apple", "苹果", 8.0, ReferenceKind::Apple),
    reference("cup", "杯子", 10.0, ReferenceKind::Cup),
    reference("cat", "小猫", 25.0, ReferenceKind::Cat),
    reference("child", "小朋友", 110.0, ReferenceKind::Child),
    reference("door", "门", 200.0, ReferenceKind::Door),
    reference("car", "小汽车", 150.0, ReferenceKind::Car),
    reference("bus", "公交车", 320.0, ReferenceKind::Bus),
    reference("house", "小房子", 600.0, ReferenceKind::House),
    reference("tree", "大树", 1_200.0, ReferenceKind::Tree),
    reference("building", "大楼（60米）", 6_000.0, ReferenceKind::Building),
    reference("tower", "摩天楼（150米）", 15_000.0, ReferenceKind::Tower),
    reference("megaTower", "超高楼（600米）", 60_000.0, ReferenceKind::Tower),
    reference("mountain1k", "千米高山（1000米）", 100_000.0, ReferenceKind::Mountain),
    reference("mountain10k", "万米高山（10000米）", 1_000_000.0, ReferenceKind::Mountain),
    reference("earth", "地球直径", 1_274_200_000.0, ReferenceKind::Earth),
    reference("moonDistance", "地月距离", 38_440_000_000.0, ReferenceKind::MoonDistance),
];

/// First reference whose height times `tolerance` reaches `height_cm`,
/// falling back to the largest one.
pub fn choose_reference_with_tolerance(
    height_cm: f64,
    tolerance: f64,
) -> &'static ReferenceObject {
    REFERENCES
        .iter()
        .find(|reference| height_cm <= reference.height_cm * tolerance)
        .unwrap_or(&REFERENCES[REFERENCES.len() - 1])
}

/// Reference object to show next to a stack `height_cm` tall.
pub fn choose_reference(height_cm: f64) -> &'static ReferenceObject {
    choose_reference_with_tolerance(height_cm, DEFAULT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_stacks_get_small_objects() {
        assert_eq!(choose_reference(1.0).id, "dice");
        assert_eq!(choose_reference(2.7).id, "dice");
        assert_eq!(choose_reference(2.9).id, "lego");
        assert_eq!(choose_reference(10.0).id, "apple");
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        assert_eq!(choose_reference_with_tolerance(3.0, 1.5).id, "dice");
        assert_eq!(choose_reference(50.0).id, "child");
        assert_eq!(choose_reference(150.0).id, "child");
        assert_eq!(choose_reference(160.0).id, "door");
    }

    #[test]
    fn oversized_stacks_fall_back_to_the_moon() {
        let moon = choose_reference(1e12);
        assert_eq!(moon.kind, ReferenceKind::MoonDistance);
        assert_eq!(moon.kind.as_str(), "moonDistance");
    }

    #[test]
    fn tighter_tolerance_picks_larger_objects() {
        assert_eq!(choose_reference_with_tolerance(2.5, 1.0).id, "lego");
        assert_eq!(choose_reference_with_tolerance(2.5, 1.4).id, "dice");
    }

    #[test]
    fn kind_serializes_camel_case() {
        let json = serde_json::to_string(&ReferenceKind::MoonDistance).expect("serialize");
        assert_eq!(json, "\"moonDistance\"");
    }
}
