//! Attribute names, event names, and legacy key codes.
//!
//! These values are shared with the rendering layer, which owns the actual
//! element attributes and dispatches the custom events.

/// Attribute controlling whether the element takes part in tab order.
pub const TAB_INDEX: &str = "tabindex";

/// ARIA attribute hiding the element from assistive technology.
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// ARIA attribute carrying the selection state of a filter chip.
pub const ARIA_CHECKED: &str = "aria-checked";

/// `tabindex` value making the element focusable.
pub const FOCUSABLE: &str = "0";

/// `tabindex` value removing the element from tab order.
pub const NOT_FOCUSABLE: &str = "-1";

/// Trailing action was activated.
pub const TRAILING_ACTION_INTERACTION_EVENT: &str = "MDCChipTrailingAction:interaction";

/// Trailing action requested focus to move elsewhere.
pub const TRAILING_ACTION_NAVIGATION_EVENT: &str = "MDCChipTrailingAction:navigation";

/// Chip primary action was activated.
pub const CHIP_INTERACTION_EVENT: &str = "MDCChip:interaction";

/// Chip requested focus to move to a sibling chip.
pub const CHIP_NAVIGATION_EVENT: &str = "MDCChip:navigation";

/// Chip finished its exit animation and should be removed.
pub const CHIP_REMOVAL_EVENT: &str = "MDCChip:removal";

/// Filter or choice chip changed selection.
pub const CHIP_SELECTION_EVENT: &str = "MDCChip:selection";

/// Chip trailing icon was activated.
pub const CHIP_TRAILING_ICON_INTERACTION_EVENT: &str = "MDCChip:trailingIconInteraction";

/// Legacy `keyCode` for Backspace.
pub const BACKSPACE_KEYCODE: u32 = 8;
/// Legacy `keyCode` for Enter.
pub const ENTER_KEYCODE: u32 = 13;
/// Legacy `keyCode` for the space bar.
pub const SPACEBAR_KEYCODE: u32 = 32;
/// Legacy `keyCode` for End.
pub const END_KEYCODE: u32 = 35;
/// Legacy `keyCode` for Home.
pub const HOME_KEYCODE: u32 = 36;
/// Legacy `keyCode` for the left arrow.
pub const ARROW_LEFT_KEYCODE: u32 = 37;
/// Legacy `keyCode` for the up arrow.
pub const ARROW_UP_KEYCODE: u32 = 38;
/// Legacy `keyCode` for the right arrow.
pub const ARROW_RIGHT_KEYCODE: u32 = 39;
/// Legacy `keyCode` for the down arrow.
pub const ARROW_DOWN_KEYCODE: u32 = 40;
/// Legacy `keyCode` for Delete.
pub const DELETE_KEYCODE: u32 = 46;
