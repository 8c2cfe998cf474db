//! Template slots and slot resolution.
//!
//! A slot describes one window region of a layout template in relative terms:
//! a row keyline for its top edge, a column keyline for its left edge, and a
//! width and height class. [`resolve`] turns a slot into absolute pixels
//! against a display's work area.
//!
//! # Keylines
//!
//! ```text
//!  KEY_0      KEY_33   KEY_50   KEY_66
//!  +----------+--------+--------+--------+  ROW_0
//!  |                                     |
//!  +-------------------------------------+  ROW_50
//!  |                                     |
//!  +-------------------------------------+
//! ```
//!
//! Every fractional division is floored in 64-bit arithmetic. A slot whose
//! keyline and span add up to at most the full extent never leaves the work
//! area (see [`Slot::fits`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Returns `floor(extent * num / den)`.
///
/// `num <= den`, so the result never exceeds `extent` in magnitude.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn fraction(extent: i32, num: i64, den: i64) -> i32 {
    (extent as i64 * num).div_euclid(den) as i32
}

/// Row keyline for the top edge of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RowKey {
    /// Top edge of the work area.
    #[serde(rename = "row_0")]
    Row0,
    /// Vertical midpoint of the work area.
    #[serde(rename = "row_50")]
    Row50,
}

impl RowKey {
    /// Returns the top coordinate of this keyline within the work area.
    #[must_use]
    pub const fn offset(self, work_area: &Rect) -> i32 {
        match self {
            Self::Row0 => work_area.top,
            Self::Row50 => fraction(work_area.height, 1, 2).saturating_add(work_area.top),
        }
    }

    /// Position of the keyline in halves of the work area height.
    const fn halves(self) -> u8 {
        match self {
            Self::Row0 => 0,
            Self::Row50 => 1,
        }
    }
}

/// Column keyline for the left edge of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ColKey {
    /// Left edge of the work area.
    #[serde(rename = "keyline_0")]
    Key0,
    /// One third of the work area width.
    #[serde(rename = "keyline_33")]
    Key33,
    /// Horizontal midpoint of the work area.
    #[serde(rename = "keyline_50")]
    Key50,
    /// Two thirds of the work area width.
    #[serde(rename = "keyline_66")]
    Key66,
}

impl ColKey {
    /// Returns the left coordinate of this keyline within the work area.
    #[must_use]
    pub const fn offset(self, work_area: &Rect) -> i32 {
        match self {
            Self::Key0 => work_area.left,
            Self::Key33 => fraction(work_area.width, 1, 3).saturating_add(work_area.left),
            Self::Key50 => fraction(work_area.width, 1, 2).saturating_add(work_area.left),
            Self::Key66 => fraction(work_area.width, 2, 3).saturating_add(work_area.left),
        }
    }

    /// Position of the keyline in sixths of the work area width.
    const fn sixths(self) -> u8 {
        match self {
            Self::Key0 => 0,
            Self::Key33 => 2,
            Self::Key50 => 3,
            Self::Key66 => 4,
        }
    }
}

/// Width class of a slot, relative to the work area width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WidthClass {
    /// The full work area width.
    Full,
    /// Half of the work area width.
    Half,
    /// One third of the work area width.
    Third,
    /// Two thirds of the work area width.
    TwoThirds,
}

impl WidthClass {
    /// Returns the slot width for a work area.
    #[must_use]
    pub const fn span(self, work_area: &Rect) -> i32 {
        match self {
            Self::Full => work_area.width,
            Self::Half => fraction(work_area.width, 1, 2),
            Self::Third => fraction(work_area.width, 1, 3),
            Self::TwoThirds => fraction(work_area.width, 2, 3),
        }
    }

    const fn sixths(self) -> u8 {
        match self {
            Self::Full => 6,
            Self::Half => 3,
            Self::Third => 2,
            Self::TwoThirds => 4,
        }
    }
}

/// Height class of a slot, relative to the work area height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum HeightClass {
    /// The full work area height.
    Full,
    /// Half of the work area height.
    Half,
}

impl HeightClass {
    /// Returns the slot height for a work area.
    #[must_use]
    pub const fn span(self, work_area: &Rect) -> i32 {
        match self {
            Self::Full => work_area.height,
            Self::Half => fraction(work_area.height, 1, 2),
        }
    }

    const fn halves(self) -> u8 {
        match self {
            Self::Full => 2,
            Self::Half => 1,
        }
    }
}

/// One region of a layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Keyline for the top edge.
    pub row_key: RowKey,
    /// Keyline for the left edge.
    pub col_key: ColKey,
    /// Width class.
    pub width_class: WidthClass,
    /// Height class.
    pub height_class: HeightClass,
}

impl Slot {
    /// Creates a new slot.
    #[must_use]
    pub const fn new(
        row_key: RowKey,
        col_key: ColKey,
        width_class: WidthClass,
        height_class: HeightClass,
    ) -> Self {
        Self {
            row_key,
            col_key,
            width_class,
            height_class,
        }
    }

    /// Returns whether the slot stays inside the work area.
    ///
    /// A slot whose keyline plus span passes the far edge (for example
    /// `keyline_66` with a `half` width) would overflow on every display.
    #[must_use]
    pub const fn fits(&self) -> bool {
        self.col_key.sixths() + self.width_class.sixths() <= 6
            && self.row_key.halves() + self.height_class.halves() <= 2
    }
}

/// Slot as written in a configuration file, before validation.
///
/// Every field is optional here so that a missing key can be reported with
/// the template and slot it belongs to instead of a bare parse error. The
/// short `y`/`x`/`w`/`h` aliases match the compact attribute names used by
/// older template files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SlotSpec {
    /// Row keyline: `row_0` or `row_50`.
    #[serde(alias = "y", skip_serializing_if = "Option::is_none")]
    pub row_key: Option<RowKey>,

    /// Column keyline: `keyline_0`, `keyline_33`, `keyline_50` or `keyline_66`.
    #[serde(alias = "x", skip_serializing_if = "Option::is_none")]
    pub col_key: Option<ColKey>,

    /// Width class: `full`, `half`, `third` or `twoThirds`.
    #[serde(alias = "w", skip_serializing_if = "Option::is_none")]
    pub width_class: Option<WidthClass>,

    /// Height class: `full` or `half`.
    #[serde(alias = "h", skip_serializing_if = "Option::is_none")]
    pub height_class: Option<HeightClass>,
}

impl SlotSpec {
    /// Converts the spec into a slot.
    ///
    /// # Errors
    ///
    /// Returns the camelCase name of the first missing key.
    pub const fn to_slot(&self) -> Result<Slot, &'static str> {
        let Some(row_key) = self.row_key else {
            return Err("rowKey");
        };
        let Some(col_key) = self.col_key else {
            return Err("colKey");
        };
        let Some(width_class) = self.width_class else {
            return Err("widthClass");
        };
        let Some(height_class) = self.height_class else {
            return Err("heightClass");
        };
        Ok(Slot::new(row_key, col_key, width_class, height_class))
    }
}

impl From<Slot> for SlotSpec {
    fn from(slot: Slot) -> Self {
        Self {
            row_key: Some(slot.row_key),
            col_key: Some(slot.col_key),
            width_class: Some(slot.width_class),
            height_class: Some(slot.height_class),
        }
    }
}

/// Resolves a slot into absolute pixel geometry within a work area.
///
/// Pure: the same slot and work area always produce the same rectangle.
#[must_use]
pub const fn resolve(slot: &Slot, work_area: &Rect) -> Rect {
    Rect::new(
        slot.row_key.offset(work_area),
        slot.col_key.offset(work_area),
        slot.width_class.span(work_area),
        slot.height_class.span(work_area),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [RowKey; 2] = [RowKey::Row0, RowKey::Row50];
    const COLS: [ColKey; 4] = [ColKey::Key0, ColKey::Key33, ColKey::Key50, ColKey::Key66];
    const WIDTHS: [WidthClass; 4] = [
        WidthClass::Full,
        WidthClass::Half,
        WidthClass::Third,
        WidthClass::TwoThirds,
    ];
    const HEIGHTS: [HeightClass; 2] = [HeightClass::Full, HeightClass::Half];

    #[test]
    fn test_resolve_bottom_right_third() {
        let work_area = Rect::new(0, 0, 1200, 800);
        let slot = Slot::new(RowKey::Row50, ColKey::Key66, WidthClass::Third, HeightClass::Half);

        assert_eq!(resolve(&slot, &work_area), Rect::new(400, 800, 400, 400));
    }

    #[test]
    fn test_resolve_offsets_by_work_area_origin() {
        let work_area = Rect::new(25, 1920, 2560, 1415);
        let slot = Slot::new(RowKey::Row50, ColKey::Key50, WidthClass::Half, HeightClass::Half);

        let frame = resolve(&slot, &work_area);
        assert_eq!(frame.top, 707 + 25);
        assert_eq!(frame.left, 1280 + 1920);
        assert_eq!(frame.width, 1280);
        assert_eq!(frame.height, 707);
    }

    #[test]
    fn test_resolve_floors_fractional_divisions() {
        let work_area = Rect::new(0, 0, 1001, 801);

        let two_thirds = Slot::new(RowKey::Row0, ColKey::Key66, WidthClass::TwoThirds, HeightClass::Full);
        let frame = resolve(&two_thirds, &work_area);
        // 1001 / 3 * 2 = 667.33
        assert_eq!(frame.left, 667);
        assert_eq!(frame.width, 667);

        let third = Slot::new(RowKey::Row50, ColKey::Key33, WidthClass::Third, HeightClass::Half);
        let frame = resolve(&third, &work_area);
        assert_eq!(frame.top, 400);
        assert_eq!(frame.left, 333);
        assert_eq!(frame.width, 333);
        assert_eq!(frame.height, 400);
    }

    #[test]
    fn test_resolve_stays_inside_work_area_for_fitting_slots() {
        let work_areas = [
            Rect::new(0, 0, 1200, 800),
            Rect::new(25, 0, 1440, 875),
            Rect::new(0, -1920, 1919, 1079),
            Rect::new(-300, 2560, 1081, 1921),
            Rect::new(0, 0, 1, 1),
        ];

        let mut fitting = 0;
        for work_area in &work_areas {
            for row_key in ROWS {
                for col_key in COLS {
                    for width_class in WIDTHS {
                        for height_class in HEIGHTS {
                            let slot = Slot::new(row_key, col_key, width_class, height_class);
                            let frame = resolve(&slot, work_area);

                            assert!(frame.top >= work_area.top, "{slot:?} in {work_area}");
                            assert!(frame.left >= work_area.left, "{slot:?} in {work_area}");

                            if slot.fits() {
                                fitting += 1;
                                assert!(work_area.contains_rect(&frame), "{slot:?} in {work_area}");
                            }
                        }
                    }
                }
            }
        }

        // 10 of 16 column combinations and 3 of 4 row combinations fit.
        assert_eq!(fitting, work_areas.len() * 10 * 3);
    }

    #[test]
    fn test_fits_rejects_overflowing_slots() {
        assert!(Slot::new(RowKey::Row0, ColKey::Key0, WidthClass::Full, HeightClass::Full).fits());
        assert!(Slot::new(RowKey::Row50, ColKey::Key66, WidthClass::Third, HeightClass::Half).fits());
        assert!(Slot::new(RowKey::Row0, ColKey::Key33, WidthClass::TwoThirds, HeightClass::Full).fits());

        assert!(!Slot::new(RowKey::Row0, ColKey::Key50, WidthClass::TwoThirds, HeightClass::Full).fits());
        assert!(!Slot::new(RowKey::Row0, ColKey::Key66, WidthClass::Half, HeightClass::Full).fits());
        assert!(!Slot::new(RowKey::Row50, ColKey::Key0, WidthClass::Full, HeightClass::Full).fits());
    }

    #[test]
    fn test_resolve_floors_negative_extents() {
        let work_area = Rect::new(0, 0, -7, -5);
        let slot = Slot::new(RowKey::Row50, ColKey::Key66, WidthClass::TwoThirds, HeightClass::Half);

        // floor(-5 / 2) = -3, floor(-14 / 3) = -5
        assert_eq!(resolve(&slot, &work_area), Rect::new(-3, -5, -5, -3));
    }

    #[test]
    fn test_resolve_huge_work_area_does_not_overflow() {
        let work_area = Rect::new(0, 0, i32::MAX, i32::MAX);
        let slot = Slot::new(RowKey::Row50, ColKey::Key66, WidthClass::TwoThirds, HeightClass::Half);

        assert_eq!(
            resolve(&slot, &work_area),
            Rect::new(1_073_741_823, 1_431_655_764, 1_431_655_764, 1_073_741_823)
        );

        let far_right = Rect::new(0, i32::MAX - 10, i32::MAX, 100);
        assert_eq!(ColKey::Key66.offset(&far_right), i32::MAX);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let work_area = Rect::new(25, 0, 1920, 1055);
        let slot = Slot::new(RowKey::Row0, ColKey::Key33, WidthClass::TwoThirds, HeightClass::Full);
        assert_eq!(resolve(&slot, &work_area), resolve(&slot, &work_area));
    }

    #[test]
    fn test_slot_spec_reports_first_missing_key() {
        let spec = SlotSpec {
            row_key: Some(RowKey::Row0),
            col_key: None,
            width_class: Some(WidthClass::Full),
            height_class: None,
        };
        assert_eq!(spec.to_slot(), Err("colKey"));

        assert_eq!(SlotSpec::default().to_slot(), Err("rowKey"));
    }

    #[test]
    fn test_slot_spec_deserializes_keyline_vocabulary() {
        let json = r#"{ "rowKey": "row_50", "colKey": "keyline_33", "widthClass": "twoThirds", "heightClass": "half" }"#;
        let spec: SlotSpec = serde_json::from_str(json).unwrap();

        assert_eq!(
            spec.to_slot(),
            Ok(Slot::new(RowKey::Row50, ColKey::Key33, WidthClass::TwoThirds, HeightClass::Half))
        );
    }

    #[test]
    fn test_slot_spec_accepts_short_aliases() {
        let json = r#"{ "y": "row_0", "x": "keyline_50", "w": "half", "h": "full" }"#;
        let spec: SlotSpec = serde_json::from_str(json).unwrap();

        assert_eq!(
            spec.to_slot(),
            Ok(Slot::new(RowKey::Row0, ColKey::Key50, WidthClass::Half, HeightClass::Full))
        );
    }

    #[test]
    fn test_slot_spec_rejects_unknown_keyline() {
        let json = r#"{ "colKey": "keyline_25" }"#;
        assert!(serde_json::from_str::<SlotSpec>(json).is_err());
    }
}
