//! Physical laws: which object may rest directly on which.
//!
//! This predicate judges *hypothetical* placements. It is shared by goal
//! compilation (filtering impossible goals), successor generation (filtering
//! illegal moves), arm execution and world validation.

use crate::world::object::{Form, ObjectDefinition, Size};

/// May `top` rest directly on (or inside) `base`?
///
/// Anything may rest on the floor, and the floor never rests on anything.
/// Self-support cannot be judged from definitions alone; callers holding
/// identifiers reject `x` on `x` before asking.
#[must_use]
pub fn can_support(top: &ObjectDefinition, base: &ObjectDefinition) -> bool {
    if top.form == Form::Floor {
        return false;
    }
    if base.form == Form::Floor {
        return true;
    }
    !violates_any_law(top, base)
}

fn violates_any_law(top: &ObjectDefinition, base: &ObjectDefinition) -> bool {
    // Large objects cannot be supported by small objects.
    if top.size == Size::Large && base.size == Size::Small {
        return true;
    }
    // Balls cannot support anything.
    if base.form == Form::Ball {
        return true;
    }
    // Balls do not rest on tables.
    if top.form == Form::Ball && base.form == Form::Table {
        return true;
    }
    // A box cannot contain a pyramid, plank or box of its own size.
    if base.form == Form::Box
        && base.size == top.size
        && matches!(top.form, Form::Pyramid | Form::Plank | Form::Box)
    {
        return true;
    }
    if top.form == Form::Box {
        match top.size {
            Size::Small => {
                if base.form == Form::Pyramid
                    || (base.form == Form::Brick && base.size == Size::Small)
                {
                    return true;
                }
            }
            Size::Large => {
                if base.form == Form::Pyramid && base.size == Size::Large {
                    return true;
                }
            }
            Size::Unspecified => {}
        }
    }
    false
}
