//! Layout templates and the template catalog.
//!
//! A template is an ordered list of slots. Order matters: the first slot goes
//! to the focused window, the next ones to the other windows in provider
//! order.
//!
//! The catalog holds the built-in templates followed by the user templates
//! from the configuration file. Every template goes through [`TemplateSpec::validate`]
//! when the catalog is built, so a malformed template is reported once at load
//! time and never reaches slot resolution.
//!
//! # Built-in Templates
//!
//! ```text
//! full        halves      stacked     thirds      main-left   main-right
//! +------+    +---+---+   +------+    +--+--+--+  +----+--+   +--+----+
//! |  1   |    | 1 | 2 |   |  1   |    |1 |2 |3 |  | 1  |2 |   |2 | 1  |
//! |      |    |   |   |   +------+    |  |  |  |  |    |  |   |  |    |
//! |      |    |   |   |   |  2   |    |  |  |  |  |    |  |   |  |    |
//! +------+    +---+---+   +------+    +--+--+--+  +----+--+   +--+----+
//!
//! quarters    main-left-stacked  main-right-stacked  main-left-third-stacked
//! +---+---+   +---+---+          +---+---+           +----+--+
//! | 1 | 2 |   |   | 2 |          | 2 |   |           |    |2 |
//! +---+---+   | 1 +---+          +---+ 1 |           | 1  +--+
//! | 3 | 4 |   |   | 3 |          | 3 |   |           |    |3 |
//! +---+---+   +---+---+          +---+---+           +----+--+
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{LayoutError, LayoutResult};
use super::geometry::Rect;
use super::slot::{ColKey, HeightClass, RowKey, Slot, SlotSpec, WidthClass, resolve};

/// Inline capacity for resolved template geometry.
///
/// Built-in templates have at most four slots.
pub const SLOT_INLINE_CAP: usize = 4;

/// Absolute frames for every slot of a template, in slot order.
pub type ResolvedFrames = SmallVec<[Rect; SLOT_INLINE_CAP]>;

/// A validated layout template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTemplate {
    /// Unique name used to select the template.
    pub name: String,
    /// Short description shown in listings.
    pub description: String,
    /// Slots in priority order.
    pub slots: Vec<Slot>,
}

impl LayoutTemplate {
    /// Returns the number of windows this template arranges.
    #[must_use]
    pub fn slot_count(&self) -> usize { self.slots.len() }

    /// Resolves every slot against a work area, in slot order.
    #[must_use]
    pub fn resolve(&self, work_area: &Rect) -> ResolvedFrames {
        self.slots.iter().map(|slot| resolve(slot, work_area)).collect()
    }
}

/// A template as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateSpec {
    /// Unique template name (e.g. "editor-and-terminal").
    pub name: String,

    /// Optional description shown by `tilepad templates`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Slots in priority order. The first slot receives the focused window.
    pub slots: Vec<SlotSpec>,
}

impl TemplateSpec {
    /// Validates the spec and converts it into a template.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::MalformedTemplate` if the name is empty, there
    /// are no slots, or a slot is missing one of its four keys. A slot that
    /// extends past the work area is kept and logged.
    pub fn validate(&self) -> LayoutResult<LayoutTemplate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LayoutError::malformed("<unnamed>", "template name is empty"));
        }

        if self.slots.is_empty() {
            return Err(LayoutError::malformed(name, "template has no slots"));
        }

        let mut slots = Vec::with_capacity(self.slots.len());
        for (index, spec) in self.slots.iter().enumerate() {
            let slot = spec.to_slot().map_err(|missing| {
                LayoutError::malformed(name, format!("slot {} has no {missing}", index + 1))
            })?;

            if !slot.fits() {
                tracing::warn!(
                    template = name,
                    slot = index + 1,
                    "layout: template slot extends past the work area"
                );
            }

            slots.push(slot);
        }

        Ok(LayoutTemplate {
            name: name.to_string(),
            description: self.description.clone(),
            slots,
        })
    }
}

/// Ordered set of templates available for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<LayoutTemplate>,
}

impl TemplateCatalog {
    /// Creates a catalog holding only the built-in templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// Builds a catalog from user templates.
    ///
    /// User templates are appended after the built-ins; a user template with
    /// the same name as a built-in replaces it in place.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::MalformedTemplate` for the first invalid user
    /// template, or when two user templates share a name.
    pub fn from_specs(specs: &[TemplateSpec], include_builtin: bool) -> LayoutResult<Self> {
        let mut catalog = if include_builtin {
            Self::builtin()
        } else {
            Self::default()
        };

        let mut seen: Vec<&str> = Vec::with_capacity(specs.len());
        for spec in specs {
            let template = spec.validate()?;

            if seen.contains(&spec.name.trim()) {
                return Err(LayoutError::malformed(
                    template.name,
                    "another user template has the same name",
                ));
            }
            seen.push(spec.name.trim());

            catalog.insert(template);
        }

        tracing::debug!(count = catalog.len(), "layout: template catalog ready");
        Ok(catalog)
    }

    /// Inserts a template, replacing any template with the same name.
    fn insert(&mut self, template: LayoutTemplate) {
        if let Some(existing) = self.templates.iter_mut().find(|t| t.name == template.name) {
            tracing::debug!(name = %template.name, "layout: user template overrides built-in");
            *existing = template;
        } else {
            self.templates.push(template);
        }
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::TemplateNotFound` if no template has that name.
    pub fn get(&self, name: &str) -> LayoutResult<&LayoutTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| LayoutError::TemplateNotFound(name.to_string()))
    }

    /// Returns the templates in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutTemplate> { self.templates.iter() }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize { self.templates.len() }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.templates.is_empty() }
}

// ============================================================================
// Built-in Templates
// ============================================================================

fn template(name: &str, description: &str, slots: &[Slot]) -> LayoutTemplate {
    LayoutTemplate {
        name: name.to_string(),
        description: description.to_string(),
        slots: slots.to_vec(),
    }
}

/// Returns the built-in templates in presentation order.
#[must_use]
pub fn builtin_templates() -> Vec<LayoutTemplate> {
    use ColKey::{Key0, Key33, Key50, Key66};
    use HeightClass::Full as H100;
    use HeightClass::Half as H50;
    use RowKey::{Row0, Row50};
    use WidthClass::{Full, Half, Third, TwoThirds};

    vec![
        template("full", "One window filling the display", &[Slot::new(
            Row0, Key0, Full, H100,
        )]),
        template("halves", "Two windows side by side", &[
            Slot::new(Row0, Key0, Half, H100),
            Slot::new(Row0, Key50, Half, H100),
        ]),
        template("stacked", "Two windows stacked vertically", &[
            Slot::new(Row0, Key0, Full, H50),
            Slot::new(Row50, Key0, Full, H50),
        ]),
        template("thirds", "Three equal columns", &[
            Slot::new(Row0, Key0, Third, H100),
            Slot::new(Row0, Key33, Third, H100),
            Slot::new(Row0, Key66, Third, H100),
        ]),
        template("main-left", "Wide window on the left, narrow column on the right", &[
            Slot::new(Row0, Key0, TwoThirds, H100),
            Slot::new(Row0, Key66, Third, H100),
        ]),
        template("main-right", "Wide window on the right, narrow column on the left", &[
            Slot::new(Row0, Key33, TwoThirds, H100),
            Slot::new(Row0, Key0, Third, H100),
        ]),
        template("quarters", "Four windows in a 2x2 grid", &[
            Slot::new(Row0, Key0, Half, H50),
            Slot::new(Row0, Key50, Half, H50),
            Slot::new(Row50, Key0, Half, H50),
            Slot::new(Row50, Key50, Half, H50),
        ]),
        template("main-left-stacked", "Left half plus two stacked windows on the right", &[
            Slot::new(Row0, Key0, Half, H100),
            Slot::new(Row0, Key50, Half, H50),
            Slot::new(Row50, Key50, Half, H50),
        ]),
        template("main-right-stacked", "Right half plus two stacked windows on the left", &[
            Slot::new(Row0, Key50, Half, H100),
            Slot::new(Row0, Key0, Half, H50),
            Slot::new(Row50, Key0, Half, H50),
        ]),
        template(
            "main-left-third-stacked",
            "Wide window on the left plus two stacked windows in the right third",
            &[
                Slot::new(Row0, Key0, TwoThirds, H100),
                Slot::new(Row0, Key66, Third, H50),
                Slot::new(Row50, Key66, Third, H50),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, slots: Vec<SlotSpec>) -> TemplateSpec {
        TemplateSpec {
            name: name.to_string(),
            description: String::new(),
            slots,
        }
    }

    fn full_slot() -> SlotSpec {
        Slot::new(RowKey::Row0, ColKey::Key0, WidthClass::Full, HeightClass::Full).into()
    }

    #[test]
    fn test_builtin_templates_are_valid() {
        for template in builtin_templates() {
            let spec = TemplateSpec {
                name: template.name.clone(),
                description: template.description.clone(),
                slots: template.slots.iter().copied().map(SlotSpec::from).collect(),
            };
            assert_eq!(spec.validate().as_ref(), Ok(&template), "{}", template.name);
        }
    }

    #[test]
    fn test_builtin_template_names_are_unique() {
        let templates = builtin_templates();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_builtin_templates_cover_the_work_area() {
        let work_area = Rect::new(0, 0, 1200, 800);
        for template in builtin_templates() {
            let frames = template.resolve(&work_area);
            let covered: i64 = frames.iter().map(Rect::area).sum();
            assert_eq!(covered, work_area.area(), "{}", template.name);
        }
    }

    #[test]
    fn test_resolve_template_keeps_slot_order() {
        let catalog = TemplateCatalog::builtin();
        let thirds = catalog.get("thirds").unwrap();

        let frames = thirds.resolve(&Rect::new(0, 0, 1200, 800));
        assert_eq!(frames.as_slice(), &[
            Rect::new(0, 0, 400, 800),
            Rect::new(0, 400, 400, 800),
            Rect::new(0, 800, 400, 800),
        ]);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = spec("  ", vec![full_slot()]).validate().unwrap_err();
        assert!(matches!(err, LayoutError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_slots() {
        let err = spec("nothing", vec![]).validate().unwrap_err();
        assert_eq!(err, LayoutError::malformed("nothing", "template has no slots"));
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let mut broken = full_slot();
        broken.height_class = None;

        let err = spec("broken", vec![full_slot(), broken]).validate().unwrap_err();
        assert_eq!(err, LayoutError::malformed("broken", "slot 2 has no heightClass"));
    }

    #[test]
    fn test_validate_keeps_overflowing_slot() {
        let overflowing =
            Slot::new(RowKey::Row0, ColKey::Key50, WidthClass::TwoThirds, HeightClass::Full);

        let template = spec("wide", vec![full_slot(), overflowing.into()]).validate().unwrap();
        assert_eq!(template.slot_count(), 2);
        assert!(!template.slots[1].fits());

        let frames = template.resolve(&Rect::new(0, 0, 1200, 800));
        assert_eq!(frames[1], Rect::new(0, 600, 800, 800));
    }

    #[test]
    fn test_catalog_appends_user_templates() {
        let catalog =
            TemplateCatalog::from_specs(&[spec("solo", vec![full_slot()])], true).unwrap();

        assert_eq!(catalog.len(), builtin_templates().len() + 1);
        assert_eq!(catalog.iter().last().map(|t| t.name.as_str()), Some("solo"));
    }

    #[test]
    fn test_catalog_user_template_replaces_builtin() {
        let catalog =
            TemplateCatalog::from_specs(&[spec("halves", vec![full_slot()])], true).unwrap();

        assert_eq!(catalog.len(), builtin_templates().len());
        assert_eq!(catalog.get("halves").unwrap().slot_count(), 1);
        assert_eq!(catalog.iter().nth(1).map(|t| t.name.as_str()), Some("halves"));
    }

    #[test]
    fn test_catalog_without_builtins() {
        let catalog =
            TemplateCatalog::from_specs(&[spec("solo", vec![full_slot()])], false).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("halves").unwrap_err().is_not_found());
    }

    #[test]
    fn test_catalog_rejects_duplicate_user_templates() {
        let specs = [spec("solo", vec![full_slot()]), spec("solo", vec![full_slot()])];
        let err = TemplateCatalog::from_specs(&specs, true).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_template_spec_parses_from_json() {
        let json = r#"{
            "name": "editor",
            "slots": [
                { "rowKey": "row_0", "colKey": "keyline_0", "widthClass": "twoThirds", "heightClass": "full" },
                { "rowKey": "row_0", "colKey": "keyline_66", "widthClass": "third", "heightClass": "full" }
            ]
        }"#;

        let spec: TemplateSpec = serde_json::from_str(json).unwrap();
        let template = spec.validate().unwrap();
        assert_eq!(template.name, "editor");
        assert_eq!(template.slot_count(), 2);
        assert!(template.description.is_empty());
    }
}
