/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// BOOKING FUNNEL
// =============================================================================

/// Services offered through the booking funnel.
pub const SERVICE_TYPES: &[&str] = &["mehndi", "rangoli", "nail-art", "jewelry"];

/// Bookable time-slot labels shown in the wizard, in display order.
/// Half- and full-hour slots only.
pub const TIME_SLOTS: &[&str] = &[
    "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "02:00 PM", "02:30 PM", "03:00 PM",
    "03:30 PM", "04:00 PM", "04:30 PM", "05:00 PM", "05:30 PM", "06:00 PM",
];

// =============================================================================
// CATEGORY PAGE
// =============================================================================

/// Fixed rendering order for category page sections.
pub const SECTION_ORDER: &[&str] = &[
    "gallery",
    "process",
    "commitment",
    "bespoke",
    "testimonials",
    "blog",
    "care",
    "faq",
];

/// Icon names the process-step renderer knows how to resolve.
pub const KNOWN_ICONS: &[&str] = &[
    "Palette",
    "Brush",
    "Sparkles",
    "Gem",
    "Flower",
    "Hand",
    "Heart",
    "Star",
    "Sun",
    "Leaf",
    "Camera",
    "Calendar",
];

/// Fallback icon used when a process step names an unknown icon.
pub const DEFAULT_ICON: &str = "Sparkles";

/// Label that clears the gallery tag filter.
pub const ALL_TAG: &str = "All";
